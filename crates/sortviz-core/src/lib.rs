#![forbid(unsafe_code)]

//! Core: input collection, sort events, trace recording, and slot mapping.
//!
//! # Role in sortviz
//! `sortviz-core` is the pure layer. It owns the bounded input set, the
//! instrumented quicksort that records one [`SortEvent`] per pointer move
//! and per swap into a [`Trace`], and the [`SlotBoard`] that resolves a
//! value to the visual slot currently showing it. No timing and no side
//! effects live here; playback belongs to `sortviz-runtime`.
//!
//! # Primary responsibilities
//! - **InputSet**: validated, bounded collection of distinct integers.
//! - **SortEvent / Trace**: append-only recording of the sorter's steps.
//! - **sort_traced**: Hoare-partition quicksort with full instrumentation.
//! - **SlotBoard**: value-to-slot resolution and slot swaps for replay.
//!
//! # How it fits in the system
//! The runtime consumes a fully built [`Trace`] and a [`SlotBoard`] seeded
//! from insertion order, and replays events at a fixed cadence into an
//! abstract render sink. The trace is built synchronously to completion
//! before any playback starts; the two phases never interleave.

pub mod bounds;
pub mod event;
pub mod input;
pub mod slots;
pub mod sorter;
pub mod trace;

pub use event::{SortEvent, SwapKind};
pub use input::{InputError, InputSet};
pub use slots::SlotBoard;
pub use sorter::sort_traced;
pub use trace::Trace;
