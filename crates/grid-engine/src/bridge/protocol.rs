//! Shared buffer layout.
//! Must stay in sync with the host's protocol reader.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 8 floats]
//! [Instances: max_instances × 8 floats]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Capacities are written once into the header at init.
//! The host reads them from the header to compute offsets dynamically.

use crate::api::script::WorldConfig;
use crate::api::types::WorldEvent;
use crate::bridge::instance::TransformInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_EVENTS: usize = 4;
pub const HEADER_EVENT_COUNT: usize = 5;
pub const HEADER_PROTOCOL_VERSION: usize = 6;
pub const HEADER_SCRIPT_COUNT: usize = 7;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per transform instance: entity, x, y, z, qx, qy, qz, qw (wire format, never changes).
pub const INSTANCE_FLOATS: usize = TransformInstance::FLOATS;

/// Floats per world event: kind, entity, a, b (wire format, never changes).
pub const EVENT_FLOATS: usize = WorldEvent::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum transform instances.
    pub max_instances: usize,
    /// Maximum world events per frame.
    pub max_events: usize,

    /// Size of instance data section in floats.
    pub instance_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_events: usize) -> Self {
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let instance_data_offset = HEADER_FLOATS;
        let event_data_offset = instance_data_offset + instance_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_instances,
            max_events,
            instance_data_floats,
            event_data_floats,
            instance_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a WorldConfig.
    pub fn from_config(config: &WorldConfig) -> Self {
        Self::new(config.max_instances, config.max_events)
    }

    /// A fresh header with the capacity fields filled in and all counters zeroed.
    pub fn header(&self) -> [f32; HEADER_FLOATS] {
        let mut header = [0.0; HEADER_FLOATS];
        header[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        header[HEADER_MAX_EVENTS] = self.max_events as f32;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&WorldConfig::default());

        assert_eq!(layout.max_instances, 512);
        assert_eq!(layout.max_events, 32);
        assert_eq!(layout.instance_data_floats, 512 * 8);
        assert_eq!(layout.event_data_floats, 32 * 4);
        assert_eq!(layout.instance_data_offset, 8);
        assert_eq!(layout.event_data_offset, 8 + 512 * 8);
        assert_eq!(layout.buffer_total_floats, 8 + 512 * 8 + 32 * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 20);

        assert_eq!(layout.instance_data_offset, HEADER_FLOATS);
        assert_eq!(layout.event_data_offset, layout.instance_data_offset + layout.instance_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn header_carries_capacities() {
        let layout = ProtocolLayout::new(4, 2);
        let buffer = layout.header();
        assert_eq!(buffer[HEADER_MAX_INSTANCES], 4.0);
        assert_eq!(buffer[HEADER_MAX_EVENTS], 2.0);
        assert_eq!(buffer[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(buffer[HEADER_INSTANCE_COUNT], 0.0);
    }
}
