//! Navigation Helpers
//!
//! Document-level listeners: smooth scrolling for in-page anchors and
//! keyboard activation of FAQ questions.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::logging::warn_on_err;

/// Bind a keydown handler on the document for the lifetime of the page
pub fn bind_global_keydown<F>(handler: F)
where
    F: Fn(web_sys::KeyboardEvent) + 'static,
{
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(handler);
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        warn_on_err!(
            doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref()),
            "could not bind keydown listener"
        );
    }
    on_keydown.forget();
}

/// Enter on a focused FAQ question acts as a click on it
pub fn bind_enter_activation() {
    bind_global_keydown(|ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) else {
            return;
        };
        if target.class_list().contains("faq-question") {
            target.click();
        }
    });
}

/// Intercept clicks on `a[href^="#"]` and scroll smoothly to the target.
/// Links whose target does not exist are swallowed.
pub fn bind_smooth_scroll() {
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(|ev: web_sys::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let Ok(Some(anchor)) = target.closest("a[href^=\"#\"]") else {
            return;
        };
        ev.prevent_default();
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        scroll_to_selector(&href);
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        warn_on_err!(
            doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()),
            "could not bind anchor click listener"
        );
    }
    on_click.forget();
}

fn scroll_to_selector(selector: &str) {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };
    // "#" alone is not a valid selector; query_selector reports it as Err
    match doc.query_selector(selector) {
        Ok(Some(element)) => scroll_smoothly(&element),
        Ok(None) => log::debug!("no anchor target for {selector}"),
        Err(_) => log::debug!("invalid anchor selector {selector}"),
    }
}

/// Smooth-scroll `element` to the top of the viewport
pub fn scroll_smoothly(element: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
