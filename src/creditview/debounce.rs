//! Last-call-wins deferral of a single value.
//!
//! A [`Debouncer`] holds at most one pending value together with the instant it
//! becomes due. Scheduling a new value replaces (cancels) the pending one, so a
//! burst of inputs yields exactly one value once input goes quiet for `delay`.
//! Nothing runs on its own: the owner polls with the current time.

use chrono::{DateTime, FixedOffset, TimeDelta};
use tracing::trace;

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    due: DateTime<FixedOffset>,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: TimeDelta,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: TimeDelta) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> TimeDelta {
        self.delay
    }

    /// Schedules `value` to become due at `now + delay`.
    ///
    /// Returns `true` if a previously pending value was cancelled.
    pub fn schedule(&mut self, value: T, now: DateTime<FixedOffset>) -> bool {
        let due = now + self.delay;
        let replaced = self.pending.replace(Pending { value, due }).is_some();
        trace!(replaced, %due, "debounce scheduled");
        replaced
    }

    /// Takes the pending value if it is due at `now`.
    pub fn take_due(&mut self, now: DateTime<FixedOffset>) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.due => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Takes the pending value regardless of its due time.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.value)
    }

    pub fn due_at(&self) -> Option<DateTime<FixedOffset>> {
        self.pending.as_ref().map(|p| p.due)
    }
}
