use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use crate::api::script::Script;
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::core::world::World;
use crate::scripts::{
    ArenaCloser, ArenaCloserConfig, RotationLock, Spinner, SpinnerConfig, WaypointMover,
    WaypointMoverConfig,
};

/// World manifest describing every scripted entity in a level.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldManifest {
    pub entities: Vec<EntityDescriptor>,
}

/// Describes a single entity and the scripts attached to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDescriptor {
    pub id: EntityId,
    /// Human-readable name (e.g., "north_wall").
    #[serde(default)]
    pub tag: String,
    /// `[x, y, z]`.
    #[serde(default)]
    pub position: Vec3,
    /// `[x, y, z, w]` (default: identity).
    #[serde(default = "default_rotation")]
    pub rotation: Quat,
    #[serde(default = "default_scale")]
    pub scale: Vec3,
    #[serde(default)]
    pub scripts: Vec<ScriptConfig>,
}

/// One script attached to an entity, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptConfig {
    WaypointMover(WaypointMoverConfig),
    ArenaCloser(ArenaCloserConfig),
    Spinner(SpinnerConfig),
    RotationLock,
}

fn default_rotation() -> Quat {
    Quat::IDENTITY
}

fn default_scale() -> Vec3 {
    Vec3::ONE
}

impl ScriptConfig {
    /// Instantiate the script this entry describes.
    pub fn build(&self) -> Box<dyn Script> {
        match self {
            ScriptConfig::WaypointMover(config) => Box::new(WaypointMover::new(config.clone())),
            ScriptConfig::ArenaCloser(config) => Box::new(ArenaCloser::new(config.clone())),
            ScriptConfig::Spinner(config) => Box::new(Spinner::new(config.clone())),
            ScriptConfig::RotationLock => Box::new(RotationLock::new()),
        }
    }
}

impl EntityDescriptor {
    pub fn to_entity(&self) -> Entity {
        Entity::new(self.id)
            .with_tag(self.tag.clone())
            .with_position(self.position)
            .with_rotation(self.rotation)
            .with_scale(self.scale)
    }
}

impl WorldManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Total number of scripts across all entities.
    pub fn script_count(&self) -> usize {
        self.entities.iter().map(|e| e.scripts.len()).sum()
    }

    /// Spawn every entity into `world` and attach its scripts in listed order.
    pub fn populate(&self, world: &mut World) {
        for desc in &self.entities {
            let id = world.spawn(desc.to_entity());
            for script in &desc.scripts {
                world.attach_boxed(id, script.build());
            }
        }
        log::info!(
            "manifest loaded: {} entities, {} scripts",
            self.entities.len(),
            self.script_count()
        );
    }
}
