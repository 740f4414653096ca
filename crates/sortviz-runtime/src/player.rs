#![forbid(unsafe_code)]

//! Trace player: sequential, exactly-once replay at a fixed cadence.
//!
//! The player visits events strictly in insertion order, pausing
//! [`STEP_DELAY`](crate::pacer::STEP_DELAY) before each step. Per event it
//! applies the recorded swap to the slot board, re-resolves the pivot and
//! pointer values to their (post-swap) slots for highlighting, and
//! recomputes the disabled mark for every slot against the event's
//! partition range. After the last event it signals completion, waits the
//! finale delay, and requests the terminal reset.
//!
//! # Invariants
//!
//! 1. No event is replayed twice and none is skipped.
//! 2. Suspension points occur only between events, never mid-event.
//! 3. The disabled pass is recomputed from scratch per event (idempotent).
//! 4. There is no cancellation: once started, playback runs through the
//!    finale before the state returns to `Idle`.

use sortviz_core::{SlotBoard, SortEvent, SwapKind, Trace};

use crate::commands::{FinaleHandler, Highlight, RenderSink};
use crate::pacer::{FINALE_DELAY, Pacer, STEP_DELAY};

/// Where the playback state machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No playback in progress; a new run may start.
    #[default]
    Idle,
    /// Events are being replayed.
    Running,
    /// The last event was replayed; the finale window is open.
    Complete,
}

/// Sequential trace player.
#[derive(Debug, Default)]
pub struct Player {
    state: PlaybackState,
}

impl Player {
    /// Create an idle player.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the playback state machine.
    #[must_use]
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether a new playback may start.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.state, PlaybackState::Idle)
    }

    /// Replay the whole trace, then run the finale.
    ///
    /// An empty trace produces no effect at all, not even a completion
    /// signal; callers gate on a non-empty trace via input validation.
    pub fn play(
        &mut self,
        trace: &Trace,
        board: &mut SlotBoard,
        sink: &mut dyn RenderSink,
        finale: &mut dyn FinaleHandler,
        pacer: &mut dyn Pacer,
    ) {
        if trace.is_empty() {
            return;
        }

        let _span = tracing::debug_span!("playback", events = trace.len()).entered();
        self.state = PlaybackState::Running;

        for event in trace {
            pacer.pause(STEP_DELAY);
            apply_event(event, board, sink);
        }

        sink.signal_complete();
        finale.on_complete();
        self.state = PlaybackState::Complete;
        tracing::debug!("playback complete, finale window open");

        pacer.pause(FINALE_DELAY);
        finale.on_reset_requested();
        self.state = PlaybackState::Idle;
    }
}

/// Apply one event's visible effect: swap, highlights, disabled marks.
///
/// Exposed so tests can step a trace without a pacer.
pub fn apply_event(event: &SortEvent, board: &mut SlotBoard, sink: &mut dyn RenderSink) {
    // Swap first: highlights attach to values, and values move to their
    // post-swap slots.
    match event.swap {
        SwapKind::None => {}
        SwapKind::LeftRight => {
            let left = event.left.and_then(|v| board.locate(v));
            let right = event.right.and_then(|v| board.locate(v));
            if let (Some(a), Some(b)) = (left, right) {
                board.swap(a, b);
                sink.apply_swap(a, b);
            }
        }
        SwapKind::RightPivot => {
            let right = event.right.and_then(|v| board.locate(v));
            let pivot = board.locate(event.pivot);
            if let (Some(a), Some(b)) = (right, pivot) {
                board.swap(a, b);
                sink.apply_swap(a, b);
            }
        }
    }

    // Each category is exclusive: clear it, then mark the slot now holding
    // the value. An absent pointer leaves the category cleared.
    let marks = [
        (Highlight::Pivot, Some(event.pivot)),
        (Highlight::Left, event.left),
        (Highlight::Right, event.right),
    ];
    for (category, value) in marks {
        sink.clear_highlight(category);
        if let Some(slot) = value.and_then(|v| board.locate(v)) {
            sink.set_highlight(slot, category);
        }
    }

    emit_disabled(board.len(), event.range_start, event.range_end, sink);
}

/// Mark every slot outside `[start, end]` disabled and every slot inside
/// enabled. Full recomputation, independent of previous state.
fn emit_disabled(slot_count: usize, start: usize, end: usize, sink: &mut dyn RenderSink) {
    for slot in 0..slot_count {
        sink.set_disabled(slot, slot < start || slot > end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::RenderCommand;
    use crate::harness::{FinaleSignal, ManualPacer, RecordingFinale, RecordingSink};
    use sortviz_core::sort_traced;

    fn traced(values: &[i32]) -> (Trace, SlotBoard) {
        let mut working = values.to_vec();
        let mut trace = Trace::new();
        sort_traced(&mut working, &mut trace);
        (trace, SlotBoard::from_insertion_order(values))
    }

    #[test]
    fn pointer_move_event_mutates_no_slots() {
        let mut board = SlotBoard::from_insertion_order(&[5, 3, 8, 1, 9]);
        let mut sink = RecordingSink::new();
        let event = SortEvent {
            pivot: 5,
            range_start: 0,
            range_end: 4,
            left: Some(3),
            right: Some(9),
            swap: SwapKind::None,
        };

        apply_event(&event, &mut board, &mut sink);

        assert_eq!(board.values(), &[5, 3, 8, 1, 9]);
        assert!(
            sink.commands
                .iter()
                .all(|c| !matches!(c, RenderCommand::ApplySwap { .. }))
        );
        assert!(sink.commands.contains(&RenderCommand::SetHighlight {
            slot: 0,
            category: Highlight::Pivot
        }));
    }

    #[test]
    fn left_right_swap_moves_values_and_highlights_follow() {
        // Mirrors the first swap of [5,3,8,1,9]: array swap put 1 at index
        // 2 and 8 at index 3, so the event records left=1, right=8.
        let mut board = SlotBoard::from_insertion_order(&[5, 3, 8, 1, 9]);
        let mut sink = RecordingSink::new();
        let event = SortEvent {
            pivot: 5,
            range_start: 0,
            range_end: 4,
            left: Some(1),
            right: Some(8),
            swap: SwapKind::LeftRight,
        };

        apply_event(&event, &mut board, &mut sink);

        assert_eq!(board.values(), &[5, 3, 1, 8, 9]);
        assert!(sink.commands.contains(&RenderCommand::ApplySwap {
            slot_a: 3,
            slot_b: 2
        }));
        // Highlights resolve after the swap: 1 now sits in slot 2.
        assert!(sink.commands.contains(&RenderCommand::SetHighlight {
            slot: 2,
            category: Highlight::Left
        }));
        assert!(sink.commands.contains(&RenderCommand::SetHighlight {
            slot: 3,
            category: Highlight::Right
        }));
    }

    #[test]
    fn absent_left_pointer_clears_without_setting() {
        let mut board = SlotBoard::from_insertion_order(&[20, 1, 2, 3, 4]);
        let mut sink = RecordingSink::new();
        let event = SortEvent {
            pivot: 20,
            range_start: 0,
            range_end: 4,
            left: None,
            right: Some(4),
            swap: SwapKind::None,
        };

        apply_event(&event, &mut board, &mut sink);

        assert!(sink.commands.contains(&RenderCommand::ClearHighlight {
            category: Highlight::Left
        }));
        assert!(
            sink.commands
                .iter()
                .all(|c| !matches!(
                    c,
                    RenderCommand::SetHighlight {
                        category: Highlight::Left,
                        ..
                    }
                ))
        );
    }

    #[test]
    fn disabled_pass_is_recomputed_and_idempotent() {
        let mut first = RecordingSink::new();
        let mut second = RecordingSink::new();
        emit_disabled(5, 1, 3, &mut first);
        emit_disabled(5, 1, 3, &mut second);

        assert_eq!(first.commands, second.commands);
        assert_eq!(
            first.commands,
            vec![
                RenderCommand::SetDisabled { slot: 0, disabled: true },
                RenderCommand::SetDisabled { slot: 1, disabled: false },
                RenderCommand::SetDisabled { slot: 2, disabled: false },
                RenderCommand::SetDisabled { slot: 3, disabled: false },
                RenderCommand::SetDisabled { slot: 4, disabled: true },
            ]
        );
    }

    #[test]
    fn playback_sorts_the_board_and_signals_completion() {
        let input = [5, 3, 8, 1, 9];
        let (trace, mut board) = traced(&input);
        let mut player = Player::new();
        let mut sink = RecordingSink::new();
        let mut finale = RecordingFinale::new();
        let mut pacer = ManualPacer::new();

        player.play(&trace, &mut board, &mut sink, &mut finale, &mut pacer);

        assert_eq!(board.values(), &[1, 3, 5, 8, 9]);
        assert_eq!(sink.commands.last(), Some(&RenderCommand::SignalComplete));
        assert_eq!(
            finale.signals,
            vec![FinaleSignal::Complete, FinaleSignal::ResetRequested]
        );
        assert!(player.is_idle());
    }

    #[test]
    fn pacing_is_one_step_delay_per_event_plus_the_finale() {
        let (trace, mut board) = traced(&[5, 3, 8, 1, 9]);
        let mut player = Player::new();
        let mut sink = RecordingSink::new();
        let mut finale = RecordingFinale::new();
        let mut pacer = ManualPacer::new();

        player.play(&trace, &mut board, &mut sink, &mut finale, &mut pacer);

        assert_eq!(pacer.pauses.len(), trace.len() + 1);
        assert!(pacer.pauses[..trace.len()].iter().all(|&d| d == STEP_DELAY));
        assert_eq!(pacer.pauses.last(), Some(&FINALE_DELAY));
    }

    #[test]
    fn empty_trace_produces_no_effect() {
        let trace = Trace::new();
        let mut board = SlotBoard::from_insertion_order(&[]);
        let mut player = Player::new();
        let mut sink = RecordingSink::new();
        let mut finale = RecordingFinale::new();
        let mut pacer = ManualPacer::new();

        player.play(&trace, &mut board, &mut sink, &mut finale, &mut pacer);

        assert!(sink.commands.is_empty());
        assert!(finale.signals.is_empty());
        assert!(pacer.pauses.is_empty());
        assert!(player.is_idle());
    }
}
