pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod motion;
pub mod scripts;

// Re-export key types at crate root for convenience
pub use api::script::{Script, WorldConfig, WorldContext};
pub use api::types::{EntityId, PlayerId, WorldEvent};
pub use components::entity::Entity;
pub use core::scene::Scene;
pub use core::scheduler::{Scheduler, Timer, TimerId};
pub use core::time::{Clock, ManualClock};
#[cfg(not(target_arch = "wasm32"))]
pub use core::time::SystemClock;
pub use core::world::World;
pub use input::queue::{TriggerEvent, TriggerPhase, TriggerQueue};
pub use assets::manifest::{WorldManifest, EntityDescriptor, ScriptConfig};
pub use bridge::instance::{TransformInstance, TransformBuffer};
pub use bridge::protocol::ProtocolLayout;
pub use systems::sync::build_transform_buffer;

// Motion engine and the scripts built on it
pub use motion::{
    lerp_vec3, spin,
    Pacing, ProgressDriver, Tick, AnimationSession, TriggerLatch,
    WaypointSequencer, SequencerStep, DualTriggerSession, TriggerSource, ContinuousRotator,
};
pub use scripts::{
    WaypointMover, WaypointMoverConfig, ArenaCloser, ArenaCloserConfig,
    Spinner, SpinnerConfig, RotationLock,
};
