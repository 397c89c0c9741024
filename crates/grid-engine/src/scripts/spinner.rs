// scripts/spinner.rs
//
// Spins its entity about the vertical axis until a trigger fires, then snaps
// it back to identity for good.

use serde::{Deserialize, Serialize};
use crate::api::script::{Script, WorldContext};
use crate::api::types::{EntityId, WorldEvent};
use crate::input::queue::{TriggerEvent, TriggerPhase};
use crate::motion::rotator::ContinuousRotator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinnerConfig {
    /// Degrees per second.
    #[serde(default = "default_rotation_speed")]
    pub rotation_speed: f32,
    /// Trigger that stops the spin. Without one the entity spins forever.
    #[serde(default)]
    pub trigger: Option<EntityId>,
    #[serde(default)]
    pub trigger_phase: TriggerPhase,
}

fn default_rotation_speed() -> f32 {
    30.0
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            rotation_speed: default_rotation_speed(),
            trigger: None,
            trigger_phase: TriggerPhase::Enter,
        }
    }
}

pub struct Spinner {
    trigger: Option<EntityId>,
    trigger_phase: TriggerPhase,
    rotator: ContinuousRotator,
}

impl Spinner {
    pub fn new(config: SpinnerConfig) -> Self {
        Self {
            trigger: config.trigger,
            trigger_phase: config.trigger_phase,
            rotator: ContinuousRotator::from_degrees(config.rotation_speed),
        }
    }

    pub fn rotator(&self) -> &ContinuousRotator {
        &self.rotator
    }
}

impl Script for Spinner {
    fn start(&mut self, me: EntityId, _ctx: &mut WorldContext) {
        log::debug!(
            "entity {}: spinning at {:.1} deg/s",
            me.0,
            self.rotator.angular_speed().to_degrees()
        );
    }

    fn update(&mut self, me: EntityId, ctx: &mut WorldContext, dt: f32) {
        if let Some(rotation) = self.rotator.frame(dt) {
            ctx.scene.set_rotation(me, rotation);
        }
    }

    fn on_trigger(&mut self, me: EntityId, ctx: &mut WorldContext, event: &TriggerEvent) {
        if !self.trigger.is_some_and(|t| event.matches(t, self.trigger_phase)) {
            return;
        }
        if let Some(rotation) = self.rotator.stop() {
            ctx.scene.set_rotation(me, rotation);
            ctx.emit_event(WorldEvent::new(WorldEvent::ROTATION_STOPPED, me));
            log::info!("entity {}: rotation stopped by trigger {}", me.0, event.trigger.0);
        }
    }
}
