use grid_engine::{
    Clock, PlayerId, ProtocolLayout, TransformBuffer, TriggerEvent, World, WorldConfig,
    WorldManifest, EntityId,
};
use grid_engine::bridge::protocol::{
    HEADER_EVENT_COUNT, HEADER_FLOATS, HEADER_FRAME_COUNTER, HEADER_INSTANCE_COUNT,
    HEADER_SCRIPT_COUNT,
};
use grid_engine::systems::sync::build_transform_buffer;

/// Browser wall clock, in seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> f64 {
        js_sys::Date::now() / 1000.0
    }
}

/// World runner that wires a scripted world up to the host frame loop.
///
/// Each concrete world (e.g., `the-grid`) creates a `thread_local!` WorldRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct WorldRunner<C: Clock + Clone + 'static> {
    world: World,
    clock: C,
    config: WorldConfig,
    layout: ProtocolLayout,
    transforms: TransformBuffer,
    header: [f32; HEADER_FLOATS],
}

impl<C: Clock + Clone + 'static> WorldRunner<C> {
    pub fn new(config: WorldConfig, clock: C) -> Self {
        let layout = ProtocolLayout::from_config(&config);
        Self {
            world: World::new(config.clone(), clock.clone()),
            clock,
            transforms: TransformBuffer::with_capacity(config.max_instances),
            header: layout.header(),
            layout,
            config,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Replace the world with the one described by `json`.
    /// On a parse error the current world is kept and the error is logged.
    pub fn load_manifest(&mut self, json: &str) {
        match WorldManifest::from_json(json) {
            Ok(manifest) => {
                let mut world = World::new(self.config.clone(), self.clock.clone());
                manifest.populate(&mut world);
                self.world = world;
                self.sync();
            }
            Err(e) => {
                log::error!("Failed to parse world manifest: {}", e);
            }
        }
    }

    /// Start every script. Ticking also starts the world if this was skipped.
    pub fn start(&mut self) {
        self.world.start();
        self.sync();
    }

    /// Queue a player entering `trigger`.
    pub fn trigger_enter(&mut self, trigger: u32, player: u32) {
        self.world.push_trigger(TriggerEvent::enter(EntityId(trigger), PlayerId(player)));
    }

    /// Queue a player leaving `trigger`.
    pub fn trigger_exit(&mut self, trigger: u32, player: u32) {
        self.world.push_trigger(TriggerEvent::exit(EntityId(trigger), PlayerId(player)));
    }

    /// Run one frame tick: deliver triggers, timers and updates, then rebuild the transform buffer.
    pub fn tick(&mut self, dt: f32) {
        self.world.tick(dt);
        self.sync();
    }

    fn sync(&mut self) {
        build_transform_buffer(
            self.world.context().scene.iter(),
            &mut self.transforms,
            self.layout.max_instances,
        );
        self.header[HEADER_FRAME_COUNTER] = self.world.frame() as f32;
        self.header[HEADER_INSTANCE_COUNT] = self.transforms.instance_count() as f32;
        self.header[HEADER_EVENT_COUNT] = self.world.context().events.len() as f32;
        self.header[HEADER_SCRIPT_COUNT] = self.world.script_count() as f32;
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.transforms.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.transforms.instance_count()
    }

    pub fn world_events_ptr(&self) -> *const f32 {
        self.world.context().events.as_ptr() as *const f32
    }

    pub fn world_events_len(&self) -> u32 {
        self.world.context().events.len() as u32
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_engine::ManualClock;
    use grid_engine::bridge::protocol::HEADER_MAX_INSTANCES;

    const MANIFEST: &str = r#"{
        "entities": [
            { "id": 1, "position": [0.0, 0.0, 0.0],
              "scripts": [ { "type": "waypoint_mover", "positions": [[0,0,0],[0,2,0]],
                             "speed": 2.0, "trigger": 9, "pacing": { "mode": "frame_tick" } } ] },
            { "id": 9 }
        ]
    }"#;

    fn runner() -> (WorldRunner<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let mut runner = WorldRunner::new(WorldConfig::default(), clock.clone());
        runner.load_manifest(MANIFEST);
        runner.start();
        (runner, clock)
    }

    #[test]
    fn load_manifest_syncs_transforms() {
        let (runner, _clock) = runner();
        assert_eq!(runner.instance_count(), 2);
        assert_eq!(runner.header[HEADER_INSTANCE_COUNT], 2.0);
        assert_eq!(runner.header[HEADER_MAX_INSTANCES], 512.0);
        assert_eq!(runner.header[HEADER_SCRIPT_COUNT], 1.0);
    }

    #[test]
    fn bad_manifest_keeps_previous_world() {
        let (mut runner, _clock) = runner();
        runner.load_manifest("{ not json");
        assert_eq!(runner.world().context().scene.len(), 2);
    }

    #[test]
    fn trigger_then_ticks_move_entity() {
        let (mut runner, clock) = runner();
        runner.trigger_enter(9, 1);
        for _ in 0..8 {
            clock.advance(0.125);
            runner.tick(0.125);
        }
        let moved = runner.transforms.instances.iter().find(|i| i.entity == 1.0).unwrap();
        assert_eq!((moved.x, moved.y, moved.z), (0.0, 2.0, 0.0));
        assert_eq!(runner.header[HEADER_FRAME_COUNTER], 8.0);
    }
}
