#![forbid(unsafe_code)]

//! Test doubles for driving playback without a renderer or a real clock.
//!
//! [`RecordingSink`] captures the full render command stream,
//! [`RecordingFinale`] captures completion-boundary signals in order, and
//! [`ManualPacer`] records requested pauses and returns immediately.
//! These are ordinary public types: demos and integration tests use them
//! the same way.

use web_time::Duration;

use crate::commands::{FinaleHandler, Highlight, RenderCommand, RenderSink};
use crate::pacer::Pacer;

/// Sink that appends every command to a vector, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    /// Every command received so far, oldest first.
    pub commands: Vec<RenderCommand>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSink for RecordingSink {
    fn set_highlight(&mut self, slot: usize, category: Highlight) {
        self.commands
            .push(RenderCommand::SetHighlight { slot, category });
    }

    fn clear_highlight(&mut self, category: Highlight) {
        self.commands.push(RenderCommand::ClearHighlight { category });
    }

    fn set_disabled(&mut self, slot: usize, disabled: bool) {
        self.commands
            .push(RenderCommand::SetDisabled { slot, disabled });
    }

    fn apply_swap(&mut self, slot_a: usize, slot_b: usize) {
        self.commands.push(RenderCommand::ApplySwap { slot_a, slot_b });
    }

    fn signal_complete(&mut self) {
        self.commands.push(RenderCommand::SignalComplete);
    }
}

/// One completion-boundary signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinaleSignal {
    /// The last event was replayed.
    Complete,
    /// The finale delay elapsed; the run should be torn down.
    ResetRequested,
}

/// Finale handler that records signals in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingFinale {
    /// Signals received so far, oldest first.
    pub signals: Vec<FinaleSignal>,
}

impl RecordingFinale {
    /// Create an empty recording handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FinaleHandler for RecordingFinale {
    fn on_complete(&mut self) {
        self.signals.push(FinaleSignal::Complete);
    }

    fn on_reset_requested(&mut self) {
        self.signals.push(FinaleSignal::ResetRequested);
    }
}

/// Pacer that records every requested pause and never sleeps.
#[derive(Debug, Clone, Default)]
pub struct ManualPacer {
    /// Durations requested so far, oldest first.
    pub pauses: Vec<Duration>,
}

impl ManualPacer {
    /// Create a pacer with no recorded pauses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pacer for ManualPacer {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}
