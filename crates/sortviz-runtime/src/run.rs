#![forbid(unsafe_code)]

//! Run lifecycle: input collection through playback to the terminal reset.
//!
//! A [`Run`] owns the trace store, the input set, and the player, and
//! walks the `Idle -> Running -> Complete -> Idle` state machine once per
//! run. Trace generation happens synchronously and atomically before any
//! playback: there is no interleaving between the sort and the replay.
//!
//! Single-flight: no second run may start while one is in progress, and
//! value collection is rejected for the whole playback-plus-finale
//! window. After the finale the trace store is emptied and the input set
//! cleared, so a second run is fully independent of the first.

use sortviz_core::{InputError, InputSet, SlotBoard, Trace, sort_traced};
use thiserror::Error;

use crate::commands::{FinaleHandler, RenderSink};
use crate::pacer::Pacer;
use crate::player::{PlaybackState, Player};

/// Why a run could not start or accept input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    /// A playback (including its finale window) is already in progress.
    #[error("a run is already in progress")]
    Busy,
    /// The collected input violates a precondition.
    #[error(transparent)]
    Input(#[from] InputError),
}

/// One sort-and-replay cycle, from input collection to reset.
#[derive(Debug, Default)]
pub struct Run {
    input: InputSet,
    trace: Trace,
    player: Player,
}

impl Run {
    /// Create an idle run with no collected input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current playback state.
    #[must_use]
    pub const fn state(&self) -> PlaybackState {
        self.player.state()
    }

    /// Values collected so far, in insertion order.
    #[must_use]
    pub fn pending_values(&self) -> &[i32] {
        self.input.values()
    }

    /// Collect one value. Rejected while a playback window is open or
    /// when the value violates the input rules.
    pub fn push_value(&mut self, value: i32) -> Result<(), RunError> {
        if !self.player.is_idle() {
            return Err(RunError::Busy);
        }
        self.input.push(value)?;
        Ok(())
    }

    /// Sort the collected values, then replay the trace to completion,
    /// including the finale and the terminal reset.
    ///
    /// On precondition failure (scenario: too few inputs) the sorter is
    /// never invoked and no trace is created. On success the run returns
    /// to `Idle` with the trace emptied and the input set cleared.
    pub fn start(
        &mut self,
        sink: &mut dyn RenderSink,
        finale: &mut dyn FinaleHandler,
        pacer: &mut dyn Pacer,
    ) -> Result<(), RunError> {
        if !self.player.is_idle() {
            return Err(RunError::Busy);
        }
        self.input.require_ready()?;
        debug_assert!(
            self.trace.is_empty(),
            "trace store must be empty before a new run"
        );

        let mut values = self.input.values().to_vec();
        let mut board = SlotBoard::from_insertion_order(&values);

        {
            let _span = tracing::debug_span!("sort", len = values.len()).entered();
            sort_traced(&mut values, &mut self.trace);
        }
        debug_assert!(values.windows(2).all(|w| w[0] < w[1]));
        tracing::debug!(events = self.trace.len(), "trace recorded, starting playback");

        self.player
            .play(&self.trace, &mut board, sink, finale, pacer);
        debug_assert_eq!(self.player.state(), PlaybackState::Idle);

        // Terminal reset: the next run starts from a clean store.
        self.trace.reset();
        self.input.clear();
        Ok(())
    }
}
