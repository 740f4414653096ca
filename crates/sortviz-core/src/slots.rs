#![forbid(unsafe_code)]

//! Visual slot board: where each value currently appears.
//!
//! A slot is a positional attribute decoupled from array index. Slot *i*
//! initially holds the *i*-th value in insertion order, not sorted order,
//! and playback mutates slots independently of the already-sorted working
//! array. Because events carry values rather than indices, replay resolves
//! each value through [`SlotBoard::locate`].
//!
//! # Invariants
//!
//! 1. [`SlotBoard::swap`] is the only mutation; the multiset of values
//!    across slots always equals the input multiset.
//! 2. Two slots never hold the same value (inputs are distinct).
//!
//! Lookup is a deliberate linear scan per value: with at most
//! [`MAX_INPUTS`](crate::bounds::MAX_INPUTS) slots it is trivially cheap,
//! and it keeps the board free of an index map that would have to be
//! mutated in lockstep with every swap.

/// Assignment of values to visual slots for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotBoard {
    slots: Vec<i32>,
}

impl SlotBoard {
    /// Seed the board from insertion order: slot *i* holds `values[i]`.
    #[must_use]
    pub fn from_insertion_order(values: &[i32]) -> Self {
        Self {
            slots: values.to_vec(),
        }
    }

    /// Number of slots (fixed for the run).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the board has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current value of every slot, in slot order.
    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.slots
    }

    /// Which slot currently holds `value`, if any.
    #[must_use]
    pub fn locate(&self, value: i32) -> Option<usize> {
        self.slots.iter().position(|&v| v == value)
    }

    /// Exchange the values of two slots.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }
}
