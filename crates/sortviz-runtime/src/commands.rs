#![forbid(unsafe_code)]

//! Render command boundary between playback and the external renderer.
//!
//! The player emits abstract, ordered commands through [`RenderSink`];
//! how a slot is drawn, highlighted, or greyed out is entirely the
//! renderer's concern. Completion and the post-finale reset request go
//! through [`FinaleHandler`].

/// Highlight categories a slot can carry during playback.
///
/// Each category is exclusive: at most one slot holds it at a time. The
/// player clears a category before re-assigning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// The slot holding the current partition's pivot value.
    Pivot,
    /// The slot under the left scan pointer.
    Left,
    /// The slot under the right scan pointer.
    Right,
}

/// Receiver for the player's per-step visual state changes.
///
/// Commands arrive in a fixed order per event: swap (if any), then
/// highlights per category, then the disabled mark for every slot. The
/// disabled pass is recomputed from scratch on every event and is
/// idempotent.
pub trait RenderSink {
    /// Mark `slot` with `category`, displacing any previous holder.
    fn set_highlight(&mut self, slot: usize, category: Highlight);

    /// Remove `category` from whichever slot holds it.
    fn clear_highlight(&mut self, category: Highlight);

    /// Mark or unmark `slot` as outside the active partition.
    fn set_disabled(&mut self, slot: usize, disabled: bool);

    /// Exchange the rendered positions of two slots.
    fn apply_swap(&mut self, slot_a: usize, slot_b: usize);

    /// Terminal indicator: every slot complete, transient marks cleared.
    fn signal_complete(&mut self);
}

/// Receiver for the run's completion boundary.
///
/// [`on_complete`](Self::on_complete) fires once after the last event is
/// replayed; [`on_reset_requested`](Self::on_reset_requested) fires once
/// after the finale delay elapses, and is expected to result in the run's
/// working state being cleared before the next input cycle.
pub trait FinaleHandler {
    /// Called once, immediately after the last event's effect is applied.
    fn on_complete(&mut self) {}

    /// Called once, after the finale delay.
    fn on_reset_requested(&mut self) {}
}

/// One recorded render command, for sinks that capture the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderCommand {
    SetHighlight { slot: usize, category: Highlight },
    ClearHighlight { category: Highlight },
    SetDisabled { slot: usize, disabled: bool },
    ApplySwap { slot_a: usize, slot_b: usize },
    SignalComplete,
}
