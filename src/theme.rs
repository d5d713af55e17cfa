//! Theme Preference
//!
//! Light/dark mode, its persisted form and the glyphs shown for it.

use crate::config::THEME_STORAGE_KEY;
use crate::storage::PreferenceStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted form
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only "dark" selects dark mode; anything else, or nothing, is light
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Toggle glyph: offers the opposite mode
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn activation_message(self) -> &'static str {
        match self {
            Theme::Light => "Light mode activated! ☀️",
            Theme::Dark => "Dark mode activated! 🌙",
        }
    }
}

/// Read the saved theme, falling back to light
pub fn load_theme(store: &impl PreferenceStore) -> Theme {
    match store.read(THEME_STORAGE_KEY) {
        Ok(value) => Theme::from_stored(value.as_deref()),
        Err(err) => {
            log::warn!("could not read theme preference: {err}");
            Theme::default()
        }
    }
}

/// Flip the theme and persist it. A failed write keeps the new theme.
pub fn toggle_theme(store: &impl PreferenceStore, current: Theme) -> Theme {
    let next = current.toggled();
    if let Err(err) = store.write(THEME_STORAGE_KEY, next.as_str()) {
        log::warn!("could not save theme preference: {err}");
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::{BrokenStore, MemoryStore};

    #[test]
    fn test_load_defaults_to_light() {
        assert_eq!(load_theme(&MemoryStore::default()), Theme::Light);
        assert_eq!(load_theme(&MemoryStore::with("theme", "sepia")), Theme::Light);
        assert_eq!(load_theme(&MemoryStore::with("theme", "dark")), Theme::Dark);
        assert_eq!(load_theme(&BrokenStore), Theme::Light);
    }

    #[test]
    fn test_toggle_persists_new_value() {
        let store = MemoryStore::default();
        let theme = toggle_theme(&store, Theme::Light);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.read("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(load_theme(&store), theme);
    }

    #[test]
    fn test_double_toggle_restores_icon_and_value() {
        let store = MemoryStore::with("theme", "dark");
        let start = load_theme(&store);
        let once = toggle_theme(&store, start);
        assert_eq!(once.icon(), "🌙");
        assert_eq!(once.activation_message(), "Light mode activated! ☀️");
        let twice = toggle_theme(&store, once);
        assert_eq!(twice, start);
        assert_eq!(twice.icon(), "☀️");
        assert_eq!(store.read("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_failed_write_still_toggles() {
        assert_eq!(toggle_theme(&BrokenStore, Theme::Light), Theme::Dark);
    }
}
