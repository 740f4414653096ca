#![forbid(unsafe_code)]

//! Runtime: fixed-cadence playback of a recorded sort trace.
//!
//! # Role in sortviz
//! `sortviz-runtime` owns everything that happens after the trace is
//! built: the render command boundary, the pacer that suspends between
//! steps, the player that turns each event into slot mutations and
//! highlight/disable commands, and the run lifecycle state machine that
//! ties input collection, sorting, playback, and the terminal reset
//! together.
//!
//! # Primary responsibilities
//! - **RenderSink / FinaleHandler**: abstract command boundaries; the
//!   runtime never touches presentation.
//! - **Pacer**: fixed inter-event delay as a trait seam, so tests drive
//!   playback without sleeping.
//! - **Player**: strictly ordered, exactly-once replay with completion
//!   and finale signaling.
//! - **Run**: the `Idle -> Running -> Complete -> Idle` lifecycle with a
//!   single-flight guarantee.

pub mod commands;
pub mod harness;
pub mod pacer;
pub mod player;
pub mod run;

pub use commands::{FinaleHandler, Highlight, RenderCommand, RenderSink};
pub use harness::{FinaleSignal, ManualPacer, RecordingFinale, RecordingSink};
pub use pacer::{FINALE_DELAY, Pacer, STEP_DELAY, SleepPacer};
pub use player::{PlaybackState, Player, apply_event};
pub use run::{Run, RunError};
