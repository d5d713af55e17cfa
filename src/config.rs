//! Page Configuration
//!
//! Compile-time settings: storage key, fixed texts and animation timings.

use log::LevelFilter;

/// localStorage key holding "light" or "dark"
pub const THEME_STORAGE_KEY: &str = "theme";

/// Sentence the status region falls back to
pub const DEFAULT_WELCOME: &str = "Welcome! Explore the interactive features below.";

/// Shown once after startup
pub const STARTUP_GREETING: &str = "All systems ready! Start exploring! ";
pub const STARTUP_GREETING_DELAY_MS: u32 = 1000;

/// Status region fade and hold
pub const STATUS_FADE_MS: u32 = 300;
pub const STATUS_HOLD_MS: u32 = 3000;

/// Counter banner auto-dismiss
pub const COUNTER_MESSAGE_MS: u32 = 3000;

/// Button "press" scale feedback
pub const PRESS_FEEDBACK_MS: u32 = 100;

/// Lets the error fade-out finish before the text is cleared
pub const ERROR_CLEAR_DELAY_MS: u32 = 200;

pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};
