//! Field Error Component
//!
//! Per-field status class and inline error slot.

use form_rules::{FieldStatus, ValidationError};
use leptos::prelude::*;
use leptos_sequence::{after, SequenceGuard, Ticket};

use crate::config::ERROR_CLEAR_DELAY_MS;

/// Inline error text with a fade-out before the text is cleared
#[derive(Clone, Copy)]
pub struct ErrorSlot {
    text: RwSignal<String>,
    visible: RwSignal<bool>,
    guard: StoredValue<SequenceGuard>,
}

impl ErrorSlot {
    pub fn new() -> Self {
        Self {
            text: RwSignal::new(String::new()),
            visible: RwSignal::new(false),
            guard: StoredValue::new(SequenceGuard::new()),
        }
    }

    pub fn show(&self, message: String) {
        // A pending clear from an earlier hide must not wipe this message
        self.guard.with_value(SequenceGuard::cancel);
        self.text.set(message);
        self.visible.set(true);
    }

    pub fn hide(&self) {
        let ticket = self.begin_hide();
        self.clear_later(ticket);
    }

    /// Hide now; the returned ticket owns the deferred text clear
    fn begin_hide(&self) -> Ticket {
        self.visible.set(false);
        self.guard.with_value(SequenceGuard::begin)
    }

    fn clear_later(&self, ticket: Ticket) {
        let text = self.text;
        after(ticket, ERROR_CLEAR_DELAY_MS, move || text.set(String::new()));
    }
}

impl Default for ErrorSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Validity class of an input plus its error slot
#[derive(Clone, Copy)]
pub struct FieldSlot {
    pub status: RwSignal<FieldStatus>,
    pub error: ErrorSlot,
}

impl FieldSlot {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(FieldStatus::Untouched),
            error: ErrorSlot::new(),
        }
    }

    /// Apply a check result to the field; returns whether it passed
    pub fn settle(&self, outcome: &Result<(), ValidationError>) -> bool {
        if let Some(ticket) = self.record(outcome) {
            self.error.clear_later(ticket);
        }
        outcome.is_ok()
    }

    /// Immediate part of `settle`: status class and error visibility.
    /// Returns the ticket of the text clear still to schedule.
    fn record(&self, outcome: &Result<(), ValidationError>) -> Option<Ticket> {
        self.status.set(FieldStatus::from_valid(outcome.is_ok()));
        match outcome {
            Ok(()) => Some(self.error.begin_hide()),
            Err(err) => {
                self.error.show(err.to_string());
                None
            }
        }
    }
}

impl Default for FieldSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn FieldError(#[prop(into)] id: String, error: ErrorSlot) -> impl IntoView {
    view! {
        <div
            id=id
            class=move || if error.visible.get() { "error-message show" } else { "error-message" }
        >
            {move || error.text.get()}
        </div>
    }
}
