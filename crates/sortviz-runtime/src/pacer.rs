#![forbid(unsafe_code)]

//! Fixed-cadence suspension between playback steps.
//!
//! Playback is a single sequential cooperative process: each event's
//! visible effect is applied, then the process suspends for a fixed delay
//! before the next step. The suspension itself sits behind [`Pacer`] so
//! tests replay a full trace without sleeping; production uses
//! [`SleepPacer`].
//!
//! Delays are fixed constants, not per-run configuration. A missed tick
//! is not a recognized failure mode at this layer.

use web_time::Duration;

/// Delay between two consecutive event replays.
pub const STEP_DELAY: Duration = Duration::from_millis(100);

/// Delay between the completion signal and the reset request.
pub const FINALE_DELAY: Duration = Duration::from_millis(4300);

/// Suspension point between playback steps.
pub trait Pacer {
    /// Suspend the playback timeline for `duration`.
    fn pause(&mut self, duration: Duration);
}

/// Production pacer: blocks the playback thread for the full duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
