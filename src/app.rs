//! Interactive Demo App
//!
//! Page layout; attaches every controller and the document-level helpers.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CounterPanel, FaqSection, RegistrationForm, SiteNav, StatusLine, ThemeToggle};
use crate::config::{STARTUP_GREETING, STARTUP_GREETING_DELAY_MS};
use crate::context::StatusBanner;
use crate::navigation;

#[component]
pub fn App() -> impl IntoView {
    // Shared status region for all controllers
    let banner = StatusBanner::new();
    provide_context(banner);

    navigation::bind_smooth_scroll();
    navigation::bind_enter_activation();

    spawn_local(async move {
        TimeoutFuture::new(STARTUP_GREETING_DELAY_MS).await;
        banner.display(STARTUP_GREETING);
    });

    view! {
        <div id="top" class="page">
            <header class="page-header">
                <h1>"Interactive Demo"</h1>
                <ThemeToggle />
            </header>

            <SiteNav />
            <StatusLine />

            <main class="page-content">
                <section id="counter-section" class="card">
                    <h2>"Counter"</h2>
                    <CounterPanel />
                </section>

                <section id="faq-section" class="card">
                    <h2>"Frequently Asked Questions"</h2>
                    <FaqSection />
                </section>

                <section id="form-section" class="card">
                    <h2>"Register"</h2>
                    <RegistrationForm />
                </section>
            </main>

            <footer class="page-footer">
                <a href="#top">"Back to top"</a>
            </footer>
        </div>
    }
}
