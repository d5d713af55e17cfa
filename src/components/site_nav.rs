//! Site Navigation Component
//!
//! In-page anchors, scrolled smoothly by `navigation::bind_smooth_scroll`.

use leptos::prelude::*;

const SECTIONS: &[(&str, &str)] = &[
    ("#counter-section", "Counter"),
    ("#faq-section", "FAQ"),
    ("#form-section", "Register"),
];

#[component]
pub fn SiteNav() -> impl IntoView {
    view! {
        <nav class="site-nav">
            {SECTIONS
                .iter()
                .map(|(href, label)| view! { <a href=*href class="nav-link">{*label}</a> })
                .collect_view()}
        </nav>
    }
}
