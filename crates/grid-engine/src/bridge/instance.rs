use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec3};
use crate::components::entity::Entity;

/// Per-entity transform written to the shared buffer for the host.
/// Must match the host protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct TransformInstance {
    /// Entity ID, as a float.
    pub entity: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Rotation quaternion.
    pub qx: f32,
    pub qy: f32,
    pub qz: f32,
    pub qw: f32,
}

impl TransformInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_entity(entity: &Entity) -> Self {
        let Vec3 { x, y, z } = entity.position;
        let q = entity.rotation;
        Self {
            entity: entity.id.0 as f32,
            x,
            y,
            z,
            qx: q.x,
            qy: q.y,
            qz: q.z,
            qw: q.w,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_xyzw(self.qx, self.qy, self.qz, self.qw)
    }
}

/// Transform buffer containing one instance per synced entity.
pub struct TransformBuffer {
    pub instances: Vec<TransformInstance>,
}

impl TransformBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: TransformInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instance data as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for host-side reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for TransformBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;

    #[test]
    fn transform_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<TransformInstance>(), 32);
        assert_eq!(TransformInstance::STRIDE_BYTES, 32);
    }

    #[test]
    fn floats_follow_field_order() {
        let rotation = Quat::from_rotation_y(0.5);
        let entity = Entity::new(EntityId(7))
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_rotation(rotation);
        let mut buf = TransformBuffer::new();
        buf.push(TransformInstance::from_entity(&entity));

        let floats = buf.as_floats();
        assert_eq!(&floats[..4], &[7.0, 1.0, 2.0, 3.0]);
        assert_eq!(&floats[4..], &[rotation.x, rotation.y, rotation.z, rotation.w]);
        assert_eq!(buf.instances[0].rotation(), rotation);
        assert_eq!(buf.instance_count(), 1);
    }
}
