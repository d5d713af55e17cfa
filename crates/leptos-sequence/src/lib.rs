//! Leptos Sequence Utilities
//!
//! Token-guarded timers for animated regions.
//! Each region owns a `SequenceGuard`. Starting a new sequence invalidates
//! every ticket handed out before it, so the pending stages of an older
//! sequence become no-ops instead of racing with the newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Owner of the current sequence number for one region
#[derive(Clone, Debug, Default)]
pub struct SequenceGuard {
    current: Arc<AtomicU64>,
}

impl SequenceGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new sequence, invalidating older tickets
    pub fn begin(&self) -> Ticket {
        let id = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            id,
            current: Arc::clone(&self.current),
        }
    }

    /// Invalidate outstanding tickets without starting a sequence
    pub fn cancel(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

/// Proof that a sequence was started; stays valid until the next `begin`
#[derive(Clone, Debug)]
pub struct Ticket {
    id: u64,
    current: Arc<AtomicU64>,
}

impl Ticket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.id
    }
}

/// One stage of a timed sequence, applied `delay_ms` after the previous one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step<S> {
    pub delay_ms: u32,
    pub stage: S,
}

/// Total running time of a sequence
pub fn total_duration<S>(steps: &[Step<S>]) -> u32 {
    steps.iter().map(|step| step.delay_ms).sum()
}

/// Wait `ms`, then report whether the ticket still owns its region
pub async fn wait_current(ticket: &Ticket, ms: u32) -> bool {
    if ms > 0 {
        TimeoutFuture::new(ms).await;
    }
    ticket.is_current()
}

/// Apply each step in order, stopping as soon as the ticket goes stale
pub async fn play<S, F>(ticket: &Ticket, steps: &[Step<S>], mut apply: F)
where
    S: Copy,
    F: FnMut(S),
{
    for step in steps {
        if !wait_current(ticket, step.delay_ms).await {
            log::trace!("sequence {} superseded", ticket.id());
            return;
        }
        apply(step.stage);
    }
}

/// Run `effect` after `ms` unless a newer sequence started meanwhile
pub fn after<F>(ticket: Ticket, ms: u32, effect: F)
where
    F: FnOnce() + 'static,
{
    spawn_local(async move {
        if wait_current(&ticket, ms).await {
            effect();
        }
    });
}

/// Boolean flag that switches itself off after a delay.
///
/// Re-triggering restarts the delay rather than letting the first timer
/// switch the flag off early.
#[derive(Clone, Copy)]
pub struct Pulse {
    active: RwSignal<bool>,
    guard: StoredValue<SequenceGuard>,
}

impl Pulse {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(false),
            guard: StoredValue::new(SequenceGuard::new()),
        }
    }

    pub fn trigger(&self, ms: u32) {
        let ticket = self.guard.with_value(SequenceGuard::begin);
        let active = self.active;
        active.set(true);
        after(ticket, ms, move || active.set(false));
    }

    /// Reactive read
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Default for Pulse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_current_until_next_begin() {
        let guard = SequenceGuard::new();
        let first = guard.begin();
        assert!(first.is_current());

        let second = guard.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.id() > first.id());
    }

    #[test]
    fn test_cancel_invalidates_without_new_ticket() {
        let guard = SequenceGuard::new();
        let ticket = guard.begin();
        guard.cancel();
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_guards_are_independent() {
        let a = SequenceGuard::new();
        let b = SequenceGuard::new();
        let ta = a.begin();
        let _tb = b.begin();
        assert!(ta.is_current());
    }

    #[test]
    fn test_cloned_guard_shares_sequence() {
        let guard = SequenceGuard::new();
        let ticket = guard.begin();
        guard.clone().begin();
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_total_duration() {
        let steps = [
            Step { delay_ms: 0, stage: 'a' },
            Step { delay_ms: 300, stage: 'b' },
            Step { delay_ms: 3000, stage: 'c' },
        ];
        assert_eq!(total_duration(&steps), 3300);
    }
}
