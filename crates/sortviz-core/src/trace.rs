#![forbid(unsafe_code)]

//! Append-only ordered store of sort events for one run.
//!
//! Insertion order is temporal order of the algorithm's execution. Exactly
//! one trace exists per run: it is fully built before playback begins and
//! emptied by [`Trace::reset`] once the run's finale has elapsed.
//!
//! # Invariants
//!
//! 1. `push` appends at the tail in O(1); nothing reorders stored events.
//! 2. Iteration yields events in insertion order, strictly forward.
//! 3. After `reset`, the store is empty and ready for a new append
//!    sequence.

use crate::event::SortEvent;

/// Ordered sequence of [`SortEvent`]s, insertion order = temporal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    events: Vec<SortEvent>,
}

impl Trace {
    /// Create an empty trace.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event at the tail.
    pub fn push(&mut self, event: SortEvent) {
        self.events.push(event);
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the trace holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Last recorded event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&SortEvent> {
        self.events.last()
    }

    /// Iterate events in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, SortEvent> {
        self.events.iter()
    }

    /// Empty the store, leaving it ready for a new run.
    pub fn reset(&mut self) {
        self.events.clear();
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a SortEvent;
    type IntoIter = std::slice::Iter<'a, SortEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
