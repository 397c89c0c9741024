// motion/progress.rs
//
// Turns elapsed time into a [0, 1] segment fraction.
// Two pacing strategies share one driver so movers never care which clock feeds them:
//
//   FrameTick  progress += dt / duration on every host frame
//   Polling    progress  = (now - started_at) / duration on a self-rescheduled timer
//
// Polling recomputes from absolute time, so late or missed callbacks never accumulate drift.

use serde::{Deserialize, Serialize};

/// Nominal polling interval in seconds (~60 Hz).
pub const DEFAULT_POLL_INTERVAL: f32 = 0.016;

fn default_poll_interval() -> f32 {
    DEFAULT_POLL_INTERVAL
}

/// How a driver is paced.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Pacing {
    /// Advanced by the host's per-frame delta.
    #[default]
    FrameTick,
    /// Advanced by a self-scheduled timer reading the wall clock.
    Polling {
        /// Seconds between polls.
        #[serde(default = "default_poll_interval")]
        interval: f32,
    },
}

impl Pacing {
    /// Polling at the default interval.
    pub fn polling() -> Self {
        Pacing::Polling { interval: DEFAULT_POLL_INTERVAL }
    }

    /// Seconds until the next poll, or `None` for frame-tick pacing.
    pub fn poll_interval(&self) -> Option<f32> {
        match *self {
            Pacing::FrameTick => None,
            Pacing::Polling { interval } => Some(interval),
        }
    }
}

/// A timing input delivered to a driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// A host frame with seconds elapsed since the previous frame.
    Frame { dt: f32 },
    /// A polling callback at absolute clock time `now` (seconds).
    Poll { now: f64 },
}

/// Duration of a segment covering `distance` at `speed` units per second.
///
/// Non-positive or non-finite speeds collapse to zero, which drivers treat as
/// instant completion instead of stalling or dividing by zero.
pub fn segment_duration(distance: f32, speed: f32) -> f32 {
    if !(speed > 0.0) || !speed.is_finite() {
        return 0.0;
    }
    distance / speed
}

/// Computes segment progress for one pacing strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressDriver {
    pacing: Pacing,
    /// Segment length in seconds. Zero or less completes on the first consumed tick.
    duration: f32,
    /// Clock time the segment began (only read by polling).
    started_at: f64,
}

impl ProgressDriver {
    pub fn new(pacing: Pacing, duration: f32, started_at: f64) -> Self {
        Self {
            pacing,
            duration,
            started_at,
        }
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn started_at(&self) -> f64 {
        self.started_at
    }

    /// Whether the segment completes as soon as it is ticked.
    pub fn is_instant(&self) -> bool {
        !(self.duration > 0.0)
    }

    /// Next progress value after `tick`, or `None` if this pacing does not consume it.
    ///
    /// The result never drops below `progress` and never exceeds 1.0.
    pub fn advance(&self, progress: f32, tick: Tick) -> Option<f32> {
        let next = match (self.pacing, tick) {
            (Pacing::FrameTick, Tick::Frame { dt }) => {
                if self.is_instant() {
                    1.0
                } else {
                    progress + dt.max(0.0) / self.duration
                }
            }
            (Pacing::Polling { .. }, Tick::Poll { now }) => {
                if self.is_instant() {
                    1.0
                } else {
                    ((now - self.started_at) / self.duration as f64) as f32
                }
            }
            _ => return None,
        };
        Some(next.max(progress).min(1.0))
    }
}
