pub mod arena_closer;
pub mod rotation_lock;
pub mod spinner;
pub mod waypoint_mover;

pub use arena_closer::{ArenaCloser, ArenaCloserConfig};
pub use rotation_lock::RotationLock;
pub use spinner::{Spinner, SpinnerConfig};
pub use waypoint_mover::{WaypointMover, WaypointMoverConfig};
