//! Counter Panel Component
//!
//! +1 / −1 / reset buttons with a range-dependent feedback banner.

use leptos::prelude::*;
use leptos_sequence::Pulse;

use crate::config::{COUNTER_MESSAGE_MS, PRESS_FEEDBACK_MS};
use crate::counter::{Counter, CounterCommand, Feedback};

#[component]
pub fn CounterPanel() -> impl IntoView {
    let (counter, set_counter) = signal(Counter::default());
    let feedback = Memo::new(move |_| Feedback::for_value(counter.get().value()));
    let message = Pulse::new();

    let run = move |command: CounterCommand| {
        set_counter.update(|c| c.apply(command));
        log::debug!("{command:?} -> {}", counter.get_untracked().value());
        message.trigger(COUNTER_MESSAGE_MS);
    };

    // Feedback for the initial value
    message.trigger(COUNTER_MESSAGE_MS);

    let message_class = move || {
        let tone = feedback.get().tone.css_class();
        if message.is_active() {
            format!("message {tone} show")
        } else {
            format!("message {tone}")
        }
    };

    view! {
        <div id="counter-display" class="counter-display">
            {move || counter.get().value()}
        </div>
        <div class="counter-buttons">
            {CounterCommand::ALL
                .into_iter()
                .map(move |command| {
                    let press = Pulse::new();
                    view! {
                        <button
                            id=command.button_id()
                            class="btn counter-btn"
                            style:transform=move || {
                                if press.is_active() { "scale(0.95)" } else { "scale(1)" }
                            }
                            on:click=move |_| {
                                run(command);
                                press.trigger(PRESS_FEEDBACK_MS);
                            }
                        >
                            {command.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
        <div id="counter-message" class=message_class>
            {move || feedback.get().message}
        </div>
    }
}
