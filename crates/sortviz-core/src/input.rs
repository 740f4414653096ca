#![forbid(unsafe_code)]

//! Bounded input collection with per-value validation.
//!
//! The sorter itself is total over valid input and has no recovery path,
//! so every precondition is enforced here, before the core algorithm ever
//! sees the values: uniqueness, the `[MIN_RANGE, MAX_RANGE]` value bound,
//! and the `[MIN_INPUT, MAX_INPUTS]` count bound. Rejections carry a
//! descriptive message; the set is left unchanged on rejection.
//!
//! Insertion order is preserved: slot *i* of the visual board initially
//! holds the *i*-th accepted value, not the *i*-th value in sorted order.

use thiserror::Error;

use crate::bounds::{MAX_INPUTS, MAX_RANGE, MIN_INPUT, MIN_RANGE};

/// Why a value (or a whole set) was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The value is already in the set.
    #[error("duplicate values are not allowed ({0} was already entered)")]
    Duplicate(i32),
    /// The set already holds [`MAX_INPUTS`] values.
    #[error("no more than {} inputs may be entered", MAX_INPUTS)]
    TooMany,
    /// The value lies outside `[MIN_RANGE, MAX_RANGE]`.
    #[error("input {0} is outside the allowed range {min}..={max}", min = MIN_RANGE, max = MAX_RANGE)]
    OutOfRange(i32),
    /// Fewer than [`MIN_INPUT`] values were collected before starting.
    #[error("at least {min} inputs are required, got {0}", min = MIN_INPUT)]
    TooFew(usize),
}

/// Ordered set of distinct, range-bounded integers awaiting a sort run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSet {
    values: Vec<i32>,
}

impl InputSet {
    /// Create an empty input set.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Accept one value, or reject it with a descriptive error.
    ///
    /// Checks run in a fixed order: duplicate, then capacity, then range.
    pub fn push(&mut self, value: i32) -> Result<(), InputError> {
        if self.values.contains(&value) {
            return Err(InputError::Duplicate(value));
        }
        if self.values.len() >= MAX_INPUTS {
            return Err(InputError::TooMany);
        }
        if !(MIN_RANGE..=MAX_RANGE).contains(&value) {
            return Err(InputError::OutOfRange(value));
        }
        self.values.push(value);
        Ok(())
    }

    /// Values accepted so far, in insertion order.
    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Number of values accepted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values have been accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check that enough values were collected to start a run.
    pub fn require_ready(&self) -> Result<(), InputError> {
        if self.values.len() < MIN_INPUT {
            return Err(InputError::TooFew(self.values.len()));
        }
        Ok(())
    }

    /// Consume the set, yielding the working array for a run.
    pub fn into_values(self) -> Result<Vec<i32>, InputError> {
        self.require_ready()?;
        Ok(self.values)
    }

    /// Drop all collected values (reset path).
    pub fn clear(&mut self) {
        self.values.clear();
    }
}
