#![forbid(unsafe_code)]

//! Sort events: the immutable record of one instant of the sorter.
//!
//! Events carry *values*, not slot indices. The array being sorted and the
//! visual slots mutate independently, so playback resolves each recorded
//! value back to whichever slot currently holds it. `left`/`right` are
//! `None` when the corresponding scan pointer has run off the array.

/// Which swap, if any, a [`SortEvent`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwapKind {
    /// Pointer movement only; no elements exchanged.
    #[default]
    None,
    /// The left and right scan pointers exchanged their elements.
    LeftRight,
    /// The right pointer's element exchanged with the pivot, ending the
    /// partition call.
    RightPivot,
}

/// One recorded instant of the instrumented sorter's execution.
///
/// Created only by the sorter, never mutated after being stored. Swap
/// events record the **post-swap** values under each pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortEvent {
    /// Value chosen as pivot for the current partition.
    pub pivot: i32,
    /// Inclusive lower index bound of the partition being processed.
    pub range_start: usize,
    /// Inclusive upper index bound of the partition being processed.
    pub range_end: usize,
    /// Value under the left scan pointer, `None` once it runs off the array.
    pub left: Option<i32>,
    /// Value under the right scan pointer.
    pub right: Option<i32>,
    /// Which swap, if any, this event represents.
    pub swap: SwapKind,
}

impl SortEvent {
    /// Whether this event mutated the array (and so mutates slots on replay).
    #[must_use]
    pub const fn is_swap(&self) -> bool {
        !matches!(self.swap, SwapKind::None)
    }
}
