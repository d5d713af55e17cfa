//! FAQ Section Component
//!
//! Accordion with one delegated click handler on the container.
//! Escape anywhere on the page closes every open answer.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::accordion::{icon, Accordion};
use crate::models::FAQ_ENTRIES;
use crate::navigation::bind_global_keydown;

#[component]
pub fn FaqSection() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::new(FAQ_ENTRIES.iter().map(|entry| entry.target)));

    bind_global_keydown(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            log::debug!("escape: closing all answers");
            accordion.try_update(Accordion::close_all);
        }
    });

    // Resolve the clicked question (or its ancestor) to its answer target
    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let Ok(Some(question)) = target.closest(".faq-question") else {
            return;
        };
        let Some(answer_id) = question.get_attribute("data-target") else {
            return;
        };
        accordion.maybe_update(|acc| acc.toggle(&answer_id));
    };

    view! {
        <div class="faq-container" on:click=on_click>
            {FAQ_ENTRIES
                .iter()
                .map(move |entry| {
                    let target = entry.target;
                    let is_open = move || accordion.with(|acc| acc.is_open(target));
                    view! {
                        <div class=move || if is_open() { "faq-item active" } else { "faq-item" }>
                            <div class="faq-question" role="button" tabindex="0" data-target=target>
                                <span class="faq-text">{entry.question}</span>
                                <span class="faq-icon">{move || icon(is_open())}</span>
                            </div>
                            <div
                                id=target
                                class=move || if is_open() { "faq-answer active" } else { "faq-answer" }
                            >
                                <p>{entry.answer}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
