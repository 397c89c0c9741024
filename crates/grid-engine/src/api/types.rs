use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Unique identifier for an entity in the scene.
/// Trigger volumes are entities too, so triggers are referenced by `EntityId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

/// Identifier of the player that crossed a trigger volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct PlayerId(pub u32);

/// A world event communicated from Rust to the host.
/// Generic container: `kind` identifies the event, `entity` the emitter, `a/b` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct WorldEvent {
    pub kind: f32,
    pub entity: f32,
    pub a: f32,
    pub b: f32,
}

impl WorldEvent {
    pub const FLOATS: usize = 4;

    /// A session was started by a trigger source. `a` = source index.
    pub const SESSION_STARTED: f32 = 1.0;
    /// A waypoint segment reached its end point. `a` = segment index.
    pub const SEGMENT_FINISHED: f32 = 2.0;
    /// A mover reached its final point and will not move again.
    pub const ANIMATION_FINISHED: f32 = 3.0;
    /// A rotator was halted and reset to identity.
    pub const ROTATION_STOPPED: f32 = 4.0;

    pub fn new(kind: f32, entity: EntityId) -> Self {
        Self {
            kind,
            entity: entity.0 as f32,
            a: 0.0,
            b: 0.0,
        }
    }

    pub fn with_payload(mut self, a: f32, b: f32) -> Self {
        self.a = a;
        self.b = b;
        self
    }
}
