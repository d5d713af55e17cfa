//! Interactive Demo Entry Point

mod accordion;
mod app;
mod components;
mod config;
mod context;
mod counter;
mod logging;
mod models;
mod navigation;
mod storage;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::LOG_LEVEL);
    log::info!("initializing interactive features");
    mount_to_body(App);
    log::info!("all interactive features initialized");
}
