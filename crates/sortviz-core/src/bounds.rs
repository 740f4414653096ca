#![forbid(unsafe_code)]

//! Input bounds shared by collection and the sorter's preconditions.
//!
//! These are fixed constants, not per-run configuration: the whole system
//! is sized for a small bounded input set, which is what makes linear
//! value-to-slot scans and full per-event disable recomputation cheap.

/// Smallest value a participant may enter.
pub const MIN_RANGE: i32 = 1;

/// Largest value a participant may enter.
pub const MAX_RANGE: i32 = 20;

/// Fewest values a run may sort.
pub const MIN_INPUT: usize = 5;

/// Most values a run may sort.
pub const MAX_INPUTS: usize = 10;
