use crate::bridge::instance::{TransformBuffer, TransformInstance};
use crate::components::entity::Entity;

/// Build the transform buffer from a set of entities.
/// Inactive entities are skipped; anything past `max_instances` is dropped with a warning.
pub fn build_transform_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut TransformBuffer,
    max_instances: usize,
) {
    buffer.clear();

    let mut dropped = 0usize;
    for entity in entities.filter(|e| e.active) {
        if buffer.instances.len() >= max_instances {
            dropped += 1;
            continue;
        }
        buffer.push(TransformInstance::from_entity(entity));
    }

    if dropped > 0 {
        log::warn!("transform buffer full ({}), {} entities not synced", max_instances, dropped);
    }
}
