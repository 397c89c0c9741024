use crate::api::script::{Script, WorldConfig, WorldContext};
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::core::time::Clock;
use crate::input::queue::{TriggerEvent, TriggerQueue};

/// A script bound to the entity it drives.
struct Attached {
    entity: EntityId,
    script: Box<dyn Script>,
}

/// Hosts entities and their scripts, and delivers host callbacks to them.
///
/// Each `tick` runs in a fixed order: pending trigger events, then timers that
/// came due, then the per-frame update. Everything is sequential; no two
/// callbacks ever run at once.
///
/// A script that restarts motion from a timer sees `update` in the same tick.
/// Frame-paced movers skip that update, so a resumed segment starts counting
/// from the next frame instead of absorbing the whole current `dt`.
pub struct World {
    ctx: WorldContext,
    scripts: Vec<Attached>,
    triggers: TriggerQueue,
    clock: Box<dyn Clock>,
    config: WorldConfig,
    started: bool,
    frame: u64,
}

impl World {
    pub fn new(config: WorldConfig, clock: impl Clock + 'static) -> Self {
        Self {
            ctx: WorldContext::new(),
            scripts: Vec::new(),
            triggers: TriggerQueue::new(),
            clock: Box::new(clock),
            config,
            started: false,
            frame: 0,
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn context(&self) -> &WorldContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut WorldContext {
        &mut self.ctx
    }

    /// Number of frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.ctx.scene.spawn(entity);
        id
    }

    /// Attach a script to an entity. Scripts attached after `start` start immediately.
    pub fn attach(&mut self, entity: EntityId, script: impl Script + 'static) {
        self.attach_boxed(entity, Box::new(script));
    }

    pub fn attach_boxed(&mut self, entity: EntityId, mut script: Box<dyn Script>) {
        if self.started {
            self.ctx.set_now(self.clock.now());
            script.start(entity, &mut self.ctx);
        }
        self.scripts.push(Attached { entity, script });
    }

    /// Number of attached scripts.
    pub fn script_count(&self) -> usize {
        self.scripts.len()
    }

    /// Start every attached script. Runs once; later calls are ignored.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.ctx.set_now(self.clock.now());
        for attached in self.scripts.iter_mut() {
            attached.script.start(attached.entity, &mut self.ctx);
        }
        log::info!(
            "world started: {} entities, {} scripts",
            self.ctx.scene.len(),
            self.scripts.len()
        );
    }

    /// Queue a trigger-volume crossing for the next tick.
    pub fn push_trigger(&mut self, event: TriggerEvent) {
        self.triggers.push(event);
    }

    /// Run one host frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if !self.started {
            self.start();
        }
        self.frame += 1;
        self.ctx.clear_frame_data();
        self.ctx.set_now(self.clock.now());

        for event in self.triggers.drain() {
            for attached in self.scripts.iter_mut() {
                attached.script.on_trigger(attached.entity, &mut self.ctx, &event);
            }
        }

        for timer in self.ctx.take_due_timers() {
            for attached in self.scripts.iter_mut().filter(|a| a.entity == timer.owner) {
                attached.script.on_timer(attached.entity, &mut self.ctx, timer.id);
            }
        }

        for attached in self.scripts.iter_mut() {
            attached.script.update(attached.entity, &mut self.ctx, dt);
        }

        if self.ctx.events.len() > self.config.max_events {
            log::warn!(
                "frame {}: {} world events exceed capacity {}, dropping the rest",
                self.frame,
                self.ctx.events.len(),
                self.config.max_events
            );
            self.ctx.events.truncate(self.config.max_events);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::api::types::PlayerId;
    use crate::core::scheduler::TimerId;
    use crate::core::time::ManualClock;

    /// Records every callback it receives.
    struct Recorder {
        log: Rc<RefCell<Vec<String>>>,
        timer: Option<TimerId>,
    }

    impl Script for Recorder {
        fn start(&mut self, me: EntityId, ctx: &mut WorldContext) {
            self.log.borrow_mut().push(format!("start {}", me.0));
            self.timer = Some(ctx.set_timeout(me, 0.5));
        }

        fn update(&mut self, _me: EntityId, _ctx: &mut WorldContext, _dt: f32) {
            self.log.borrow_mut().push("update".into());
        }

        fn on_trigger(&mut self, _me: EntityId, _ctx: &mut WorldContext, event: &TriggerEvent) {
            self.log.borrow_mut().push(format!("trigger {}", event.trigger.0));
        }

        fn on_timer(&mut self, _me: EntityId, _ctx: &mut WorldContext, timer: TimerId) {
            assert_eq!(Some(timer), self.timer);
            self.log.borrow_mut().push("timer".into());
        }
    }

    fn world_with_recorder() -> (World, ManualClock, Rc<RefCell<Vec<String>>>) {
        let clock = ManualClock::new();
        let mut world = World::new(WorldConfig::default(), clock.clone());
        let log = Rc::new(RefCell::new(Vec::new()));
        let id = world.spawn(Entity::new(EntityId(7)));
        world.attach(id, Recorder { log: log.clone(), timer: None });
        (world, clock, log)
    }

    #[test]
    fn first_tick_starts_scripts() {
        let (mut world, _clock, log) = world_with_recorder();
        assert!(!world.is_started());
        world.tick(0.016);
        assert!(world.is_started());
        assert_eq!(*log.borrow(), vec!["start 7", "update"]);
    }

    #[test]
    fn tick_order_is_triggers_timers_update() {
        let (mut world, clock, log) = world_with_recorder();
        world.start();
        clock.advance(0.5);
        world.push_trigger(TriggerEvent::enter(EntityId(3), PlayerId(1)));
        world.tick(0.5);
        assert_eq!(*log.borrow(), vec!["start 7", "trigger 3", "timer", "update"]);
    }

    #[test]
    fn timers_wait_for_their_due_time() {
        let (mut world, clock, log) = world_with_recorder();
        world.start();
        clock.advance(0.25);
        world.tick(0.25);
        assert!(!log.borrow().contains(&"timer".to_string()));
        clock.advance(0.25);
        world.tick(0.25);
        assert!(log.borrow().contains(&"timer".to_string()));
        assert_eq!(world.context().pending_timers(), 0);
    }

    #[test]
    fn late_attach_starts_immediately() {
        let (mut world, _clock, log) = world_with_recorder();
        world.start();
        world.attach(EntityId(7), Recorder { log: log.clone(), timer: None });
        assert_eq!(world.script_count(), 2);
        assert_eq!(log.borrow().iter().filter(|l| l.starts_with("start")).count(), 2);
    }
}
