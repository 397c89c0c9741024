use crate::core::scene::Scene;
use crate::core::scheduler::{Scheduler, Timer, TimerId};
use crate::api::types::{EntityId, WorldEvent};
use crate::input::queue::TriggerEvent;

/// Configuration for the world runtime, provided by the host.
#[derive(Debug, Clone)]
pub struct WorldConfig {
    /// Maximum number of transform instances synced to the host (default: 512).
    pub max_instances: usize,
    /// Maximum number of world events per frame (default: 32).
    pub max_events: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            max_instances: 512,
            max_events: 32,
        }
    }
}

/// The contract every entity script fulfills.
///
/// Scripts are owned by one entity and called sequentially by the world, so
/// they keep their own state without locking. There is no unsubscribe: a
/// script that is done simply ignores further callbacks.
pub trait Script {
    /// Called once when the world starts (or on attach, if it already started).
    fn start(&mut self, me: EntityId, ctx: &mut WorldContext);

    /// Called every frame with seconds since the previous frame.
    fn update(&mut self, _me: EntityId, _ctx: &mut WorldContext, _dt: f32) {}

    /// Called for every trigger-volume crossing in the world.
    /// Scripts filter for the triggers they were configured with.
    fn on_trigger(&mut self, _me: EntityId, _ctx: &mut WorldContext, _event: &TriggerEvent) {}

    /// Called when a timer scheduled for `me` comes due.
    fn on_timer(&mut self, _me: EntityId, _ctx: &mut WorldContext, _timer: TimerId) {}
}

/// Mutable access to world state, passed to every script callback.
pub struct WorldContext {
    pub scene: Scene,
    pub events: Vec<WorldEvent>,
    scheduler: Scheduler,
    now: f64,
}

impl WorldContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            events: Vec::new(),
            scheduler: Scheduler::new(),
            now: 0.0,
        }
    }

    /// Clock time (seconds) sampled at the start of the current tick.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Schedule `on_timer` for `owner` after `delay` seconds.
    /// Timers never fire within the tick that scheduled them.
    pub fn set_timeout(&mut self, owner: EntityId, delay: f32) -> TimerId {
        self.scheduler.set_timeout(owner, self.now, delay)
    }

    /// Number of timers waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }

    /// Emit a world event to be forwarded to the host.
    pub fn emit_event(&mut self, event: WorldEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (events).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    pub(crate) fn set_now(&mut self, now: f64) {
        self.now = now;
    }

    pub(crate) fn take_due_timers(&mut self) -> Vec<Timer> {
        self.scheduler.take_due(self.now)
    }
}

impl Default for WorldContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_are_relative_to_tick_time() {
        let mut ctx = WorldContext::new();
        ctx.set_now(10.0);
        let id = ctx.set_timeout(EntityId(1), 0.5);
        assert_eq!(ctx.pending_timers(), 1);

        ctx.set_now(10.25);
        assert!(ctx.take_due_timers().is_empty());

        ctx.set_now(10.5);
        let due = ctx.take_due_timers();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, id);
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = WorldContext::new();
        ctx.emit_event(WorldEvent::new(WorldEvent::ANIMATION_FINISHED, EntityId(2)));
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }
}
