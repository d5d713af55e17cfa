//! Application Context
//!
//! The shared status region, provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_sequence::{play, SequenceGuard, Step};

use crate::config::{DEFAULT_WELCOME, STATUS_FADE_MS, STATUS_HOLD_MS};

/// Stages of one status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerStage {
    FadeOut,
    ShowMessage,
    RestoreDefault,
}

/// fade out -> show -> hold -> fade out -> default sentence
pub const BANNER_SEQUENCE: [Step<BannerStage>; 4] = [
    Step { delay_ms: 0, stage: BannerStage::FadeOut },
    Step { delay_ms: STATUS_FADE_MS, stage: BannerStage::ShowMessage },
    Step { delay_ms: STATUS_HOLD_MS, stage: BannerStage::FadeOut },
    Step { delay_ms: STATUS_FADE_MS, stage: BannerStage::RestoreDefault },
];

/// Handle to the shared status/welcome region
#[derive(Clone, Copy)]
pub struct StatusBanner {
    /// Current text - read
    pub text: ReadSignal<String>,
    set_text: WriteSignal<String>,
    /// Faded in (opacity 1) - read
    pub visible: ReadSignal<bool>,
    set_visible: WriteSignal<bool>,
    guard: StoredValue<SequenceGuard>,
}

impl StatusBanner {
    pub fn new() -> Self {
        let (text, set_text) = signal(DEFAULT_WELCOME.to_string());
        let (visible, set_visible) = signal(true);
        Self {
            text,
            set_text,
            visible,
            set_visible,
            guard: StoredValue::new(SequenceGuard::new()),
        }
    }

    /// Show `message`, then return to the default sentence.
    /// A newer call supersedes whatever stages of this one are still pending.
    pub fn display(&self, message: impl Into<String>) {
        let message = message.into();
        let ticket = self.guard.with_value(SequenceGuard::begin);
        log::debug!("status #{}: {message}", ticket.id());
        let banner = *self;
        spawn_local(async move {
            play(&ticket, &BANNER_SEQUENCE, |stage| banner.apply(stage, &message)).await;
        });
    }

    fn apply(&self, stage: BannerStage, message: &str) {
        match stage {
            BannerStage::FadeOut => self.set_visible.set(false),
            BannerStage::ShowMessage => {
                self.set_text.set(message.to_string());
                self.set_visible.set(true);
            }
            BannerStage::RestoreDefault => {
                self.set_text.set(DEFAULT_WELCOME.to_string());
                self.set_visible.set(true);
            }
        }
    }
}

impl Default for StatusBanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the status banner from context
pub fn use_status_banner() -> StatusBanner {
    expect_context::<StatusBanner>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_sequence::total_duration;

    #[test]
    fn test_banner_sequence_timing() {
        assert_eq!(total_duration(&BANNER_SEQUENCE), 3600);
        assert_eq!(BANNER_SEQUENCE[0].delay_ms, 0);
        assert_eq!(BANNER_SEQUENCE[1].stage, BannerStage::ShowMessage);
    }

    #[test]
    fn test_banner_sequence_ends_on_default() {
        let last = BANNER_SEQUENCE[BANNER_SEQUENCE.len() - 1];
        assert_eq!(last.stage, BannerStage::RestoreDefault);
    }
}
