// motion/mod.rs
//
// Entity motion engine: interpolation, progress pacing, one-shot trigger
// latches, and the movers built from them.
// Pure state machines: they return positions/rotations and never touch the Scene.

pub mod interpolate;
pub mod progress;
pub mod session;
pub mod latch;
pub mod sequencer;
pub mod dual_trigger;
pub mod rotator;

pub use interpolate::{lerp_vec3, spin};
pub use progress::{Pacing, ProgressDriver, Tick, segment_duration, DEFAULT_POLL_INTERVAL};
pub use session::{AnimationSession, SessionStep};
pub use latch::TriggerLatch;
pub use sequencer::{WaypointSequencer, SequencerPhase, SequencerStep};
pub use dual_trigger::{DualTriggerSession, TriggerSource, SessionFrame};
pub use rotator::{ContinuousRotator, RotationState};
