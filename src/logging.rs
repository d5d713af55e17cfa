//! Console Logging
//!
//! `log` backend that writes to the browser console, tagged with the
//! emitting module, e.g. `[THEME_TOGGLE] theme set to dark`.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// `[MODULE] message` using the last segment of the target path
fn format_line(target: &str, message: &str) -> String {
    let tag = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", tag.to_uppercase(), message)
}

/// Install the console logger. Later calls are ignored.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Warn about a failed DOM call under the caller's module tag.
/// Evaluates to `true` when the call succeeded.
macro_rules! warn_on_err {
    ($result:expr, $what:literal) => {
        match $result {
            Ok(_) => true,
            Err(err) => {
                log::warn!(concat!($what, ": {:?}"), err);
                false
            }
        }
    };
}
pub(crate) use warn_on_err;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_on_err_reports_outcome() {
        let failed: Result<(), &str> = Err("NotAllowedError");
        assert!(!warn_on_err!(failed, "could not bind listener"));
        assert!(warn_on_err!(Ok::<(), &str>(()), "could not bind listener"));
    }

    #[test]
    fn test_format_line_uses_last_target_segment() {
        assert_eq!(
            format_line("interactive_demo_ui::components::counter_panel", "pressed"),
            "[COUNTER_PANEL] pressed"
        );
        assert_eq!(format_line("app", "ready"), "[APP] ready");
    }
}
