//! Theme Toggle Component
//!
//! Light/dark switch persisted to localStorage.

use leptos::prelude::*;

use crate::context::use_status_banner;
use crate::logging::warn_on_err;
use crate::storage::BrowserStorage;
use crate::theme::{load_theme, toggle_theme, Theme};

/// Toggle button; also keeps the `dark-mode` class on `<body>` in sync
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let banner = use_status_banner();
    let (theme, set_theme) = signal(load_theme(&BrowserStorage));

    Effect::new(move |_| apply_body_class(theme.get()));

    let toggle = move |_| {
        let next = toggle_theme(&BrowserStorage, theme.get_untracked());
        set_theme.set(next);
        log::info!("theme set to {}", next.as_str());
        banner.display(next.activation_message());
    };

    view! {
        <button id="theme-toggle" class="theme-toggle" title="Toggle theme" on:click=toggle>
            <span id="theme-icon">{move || theme.get().icon()}</span>
        </button>
    }
}

fn apply_body_class(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
    else {
        return;
    };
    let classes = body.class_list();
    let updated = if theme.is_dark() {
        classes.add_1("dark-mode")
    } else {
        classes.remove_1("dark-mode")
    };
    warn_on_err!(updated, "could not update body class");
}
