//! Status Line Component
//!
//! Renders the shared welcome/status region.

use leptos::prelude::*;

use crate::context::use_status_banner;

#[component]
pub fn StatusLine() -> impl IntoView {
    let banner = use_status_banner();

    view! {
        <p
            id="welcome-message"
            class="welcome-message"
            style:opacity=move || if banner.visible.get() { "1" } else { "0" }
        >
            {move || banner.text.get()}
        </p>
    }
}
