use glam::{Quat, Vec3};
use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Entity storage keyed by id, backed by a flat Vec.
/// Worlds hold tens of entities, so lookups are linear scans.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(256),
        }
    }

    /// Add an entity. An entity already stored under the same id is replaced,
    /// so ids stay unique and transform writes always reach one entity.
    pub fn spawn(&mut self, entity: Entity) {
        match self.get_mut(entity.id) {
            Some(existing) => {
                log::warn!("entity {} spawned twice; replacing the earlier one", entity.id.0);
                *existing = entity;
            }
            None => self.entities.push(entity),
        }
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Current position of an entity, or `None` if it does not exist.
    pub fn position(&self, id: EntityId) -> Option<Vec3> {
        self.get(id).map(|e| e.position)
    }

    /// Current rotation of an entity, or `None` if it does not exist.
    pub fn rotation(&self, id: EntityId) -> Option<Quat> {
        self.get(id).map(|e| e.rotation)
    }

    /// Write an entity's position. Missing entities are ignored.
    pub fn set_position(&mut self, id: EntityId, position: Vec3) {
        if let Some(entity) = self.get_mut(id) {
            entity.position = position;
        }
    }

    /// Write an entity's rotation. Missing entities are ignored.
    pub fn set_rotation(&mut self, id: EntityId, rotation: Quat) {
        if let Some(entity) = self.get_mut(id) {
            entity.rotation = rotation;
        }
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_position(Vec3::new(10.0, 20.0, 30.0)));
        let e = scene.get(id).unwrap();
        assert_eq!(e.position, Vec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn duplicate_spawn_replaces_entity() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("lift"));
        scene.spawn(Entity::new(EntityId(2)));
        scene.spawn(Entity::new(EntityId(1)).with_tag("shuttle").with_position(Vec3::X));
        assert_eq!(scene.len(), 2);
        let lift = scene.get(EntityId(1)).unwrap();
        assert_eq!(lift.tag, "shuttle");

        scene.set_position(EntityId(1), Vec3::Y);
        let ids: Vec<_> = scene.iter().filter(|e| e.position == Vec3::Y).map(|e| e.id).collect();
        assert_eq!(ids, vec![EntityId(1)]);
    }

    #[test]
    fn writes_to_missing_entity_are_ignored() {
        let mut scene = Scene::new();
        scene.set_position(EntityId(9), Vec3::ONE);
        scene.set_rotation(EntityId(9), Quat::from_rotation_y(1.0));
        assert!(scene.is_empty());
        assert_eq!(scene.position(EntityId(9)), None);
    }
}
