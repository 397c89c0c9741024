// scripts/rotation_lock.rs
//
// Holds an entity at the rotation it had when the world started.

use glam::Quat;
use crate::api::script::{Script, WorldContext};
use crate::api::types::EntityId;

#[derive(Debug, Default)]
pub struct RotationLock {
    locked: Option<Quat>,
}

impl RotationLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The captured rotation, once started.
    pub fn locked(&self) -> Option<Quat> {
        self.locked
    }
}

impl Script for RotationLock {
    fn start(&mut self, me: EntityId, ctx: &mut WorldContext) {
        self.locked = ctx.scene.rotation(me);
    }

    fn update(&mut self, me: EntityId, ctx: &mut WorldContext, _dt: f32) {
        if let Some(rotation) = self.locked {
            ctx.scene.set_rotation(me, rotation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use crate::api::script::WorldConfig;
    use crate::components::entity::Entity;
    use crate::core::time::ManualClock;
    use crate::core::world::World;
    use crate::scripts::spinner::{Spinner, SpinnerConfig};

    #[test]
    fn undoes_rotation_from_earlier_scripts() {
        let tilt = Quat::from_axis_angle(Vec3::X, 0.4);
        let id = EntityId(1);
        let mut world = World::new(WorldConfig::default(), ManualClock::new());
        world.spawn(Entity::new(id).with_rotation(tilt));
        world.attach(id, Spinner::new(SpinnerConfig::default()));
        world.attach(id, RotationLock::new());

        for _ in 0..5 {
            world.tick(0.1);
        }
        assert_eq!(world.context().scene.rotation(id), Some(tilt));
    }

    #[test]
    fn missing_entity_is_ignored() {
        let mut world = World::new(WorldConfig::default(), ManualClock::new());
        world.attach(EntityId(5), RotationLock::new());
        world.tick(0.1);
        assert!(world.context().scene.get(EntityId(5)).is_none());
    }
}
