// scripts/waypoint_mover.rs
//
// Moves its entity through a list of waypoints at constant speed, pausing
// between segments. Starts on world start or on the first crossing of its
// trigger, runs once, and never restarts.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use crate::api::script::{Script, WorldContext};
use crate::api::types::{EntityId, WorldEvent};
use crate::core::scheduler::TimerId;
use crate::input::queue::{TriggerEvent, TriggerPhase};
use crate::motion::latch::TriggerLatch;
use crate::motion::progress::{Pacing, Tick};
use crate::motion::sequencer::{SequencerStep, WaypointSequencer};

/// Manifest settings for a waypoint mover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaypointMoverConfig {
    /// Points visited in order. At least two are needed for any motion.
    #[serde(default = "default_positions")]
    pub positions: Vec<Vec3>,
    /// Units per second.
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Seconds between segments.
    #[serde(default = "default_delay")]
    pub delay: f32,
    /// Trigger volume that starts the run when `play_on_start` is off.
    #[serde(default)]
    pub trigger: Option<EntityId>,
    #[serde(default)]
    pub trigger_phase: TriggerPhase,
    /// Start as soon as the world starts.
    #[serde(default)]
    pub play_on_start: bool,
    #[serde(default = "Pacing::polling")]
    pub pacing: Pacing,
}

fn default_positions() -> Vec<Vec3> {
    vec![Vec3::new(48.46, -16.0, -3.2), Vec3::new(48.46, 44.0, -3.2)]
}

fn default_speed() -> f32 {
    1.0
}

fn default_delay() -> f32 {
    1.0
}

impl Default for WaypointMoverConfig {
    fn default() -> Self {
        Self {
            positions: default_positions(),
            speed: default_speed(),
            delay: default_delay(),
            trigger: None,
            trigger_phase: TriggerPhase::Enter,
            play_on_start: false,
            pacing: Pacing::polling(),
        }
    }
}

pub struct WaypointMover {
    trigger: Option<EntityId>,
    trigger_phase: TriggerPhase,
    play_on_start: bool,
    speed: f32,
    sequencer: WaypointSequencer,
    latch: TriggerLatch,
    /// Set when the mover is waiting on its trigger.
    listening: bool,
    poll_timer: Option<TimerId>,
    delay_timer: Option<TimerId>,
    /// The delay timer restarted motion this tick. Frame pacing starts
    /// counting the new segment on the following frame.
    resumed: bool,
}

impl WaypointMover {
    pub fn new(config: WaypointMoverConfig) -> Self {
        Self {
            trigger: config.trigger,
            trigger_phase: config.trigger_phase,
            play_on_start: config.play_on_start,
            speed: config.speed,
            sequencer: WaypointSequencer::new(config.positions, config.speed, config.delay, config.pacing),
            latch: TriggerLatch::new(),
            listening: false,
            poll_timer: None,
            delay_timer: None,
            resumed: false,
        }
    }

    pub fn sequencer(&self) -> &WaypointSequencer {
        &self.sequencer
    }

    fn begin(&mut self, me: EntityId, ctx: &mut WorldContext) {
        let step = self.sequencer.start(ctx.now());
        self.apply(me, ctx, step);
    }

    fn apply(&mut self, me: EntityId, ctx: &mut WorldContext, step: SequencerStep) {
        if let Some(position) = step.position() {
            ctx.scene.set_position(me, position);
        }
        match step {
            SequencerStep::Unchanged => {}
            SequencerStep::Moved(_) => {
                if let Some(interval) = self.sequencer.pacing().poll_interval() {
                    self.poll_timer = Some(ctx.set_timeout(me, interval));
                }
            }
            SequencerStep::SegmentFinished { segment, delay, .. } => {
                self.poll_timer = None;
                ctx.emit_event(
                    WorldEvent::new(WorldEvent::SEGMENT_FINISHED, me).with_payload(segment as f32, 0.0),
                );
                self.delay_timer = Some(ctx.set_timeout(me, delay));
            }
            SequencerStep::Finished { segment, position } => {
                self.poll_timer = None;
                ctx.emit_event(
                    WorldEvent::new(WorldEvent::SEGMENT_FINISHED, me).with_payload(segment as f32, 0.0),
                );
                ctx.emit_event(WorldEvent::new(WorldEvent::ANIMATION_FINISHED, me));
                log::info!("entity {}: waypoint run finished at {}", me.0, position);
            }
        }
    }
}

impl Script for WaypointMover {
    fn start(&mut self, me: EntityId, ctx: &mut WorldContext) {
        if !self.sequencer.can_move() {
            log::warn!(
                "entity {}: waypoint mover has {} point(s), needs at least 2; staying put",
                me.0,
                self.sequencer.waypoints().len()
            );
            return;
        }
        if self.speed <= 0.0 || !self.speed.is_finite() {
            log::warn!("entity {}: waypoint speed {} is not positive; segments complete instantly", me.0, self.speed);
        }
        if self.play_on_start {
            self.begin(me, ctx);
        } else if self.trigger.is_some() {
            self.listening = true;
        } else {
            log::warn!("entity {}: waypoint mover has no trigger and play_on_start is off; staying idle", me.0);
        }
    }

    fn update(&mut self, me: EntityId, ctx: &mut WorldContext, dt: f32) {
        if std::mem::take(&mut self.resumed) {
            return;
        }
        if self.sequencer.pacing() == Pacing::FrameTick {
            let step = self.sequencer.advance(Tick::Frame { dt });
            self.apply(me, ctx, step);
        }
    }

    fn on_trigger(&mut self, me: EntityId, ctx: &mut WorldContext, event: &TriggerEvent) {
        let Some(trigger) = self.trigger else {
            return;
        };
        if !self.listening || !event.matches(trigger, self.trigger_phase) {
            return;
        }
        if self.latch.try_fire(self.sequencer.is_animating()) {
            log::info!("entity {}: trigger {} started waypoint run", me.0, trigger.0);
            ctx.emit_event(WorldEvent::new(WorldEvent::SESSION_STARTED, me));
            self.begin(me, ctx);
        }
    }

    fn on_timer(&mut self, me: EntityId, ctx: &mut WorldContext, timer: TimerId) {
        if self.poll_timer == Some(timer) {
            self.poll_timer = None;
            let step = self.sequencer.advance(Tick::Poll { now: ctx.now() });
            self.apply(me, ctx, step);
        } else if self.delay_timer == Some(timer) {
            self.delay_timer = None;
            let step = self.sequencer.resume(ctx.now());
            self.resumed = step != SequencerStep::Unchanged;
            self.apply(me, ctx, step);
        }
    }
}
