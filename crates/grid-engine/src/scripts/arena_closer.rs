// scripts/arena_closer.rs
//
// Slides an arena wall from where it stands to a fixed offset when a player
// crosses either of two trigger volumes. Each trigger fires at most once.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use crate::api::script::{Script, WorldContext};
use crate::api::types::{EntityId, WorldEvent};
use crate::input::queue::{TriggerEvent, TriggerPhase};
use crate::motion::dual_trigger::{DualTriggerSession, SessionFrame, TriggerSource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaCloserConfig {
    /// Per-axis offset from the start position to the closed position.
    #[serde(default = "default_distance")]
    pub distance: Vec3,
    /// Seconds to travel from open to closed.
    #[serde(default = "default_duration")]
    pub duration: f32,
    #[serde(default)]
    pub trigger: Option<EntityId>,
    #[serde(default)]
    pub trigger2: Option<EntityId>,
    /// Arena walls close behind the player, so they listen for exits.
    #[serde(default = "default_phase")]
    pub trigger_phase: TriggerPhase,
}

fn default_distance() -> Vec3 {
    Vec3::splat(5.0)
}

fn default_duration() -> f32 {
    5.0
}

fn default_phase() -> TriggerPhase {
    TriggerPhase::Exit
}

impl Default for ArenaCloserConfig {
    fn default() -> Self {
        Self {
            distance: default_distance(),
            duration: default_duration(),
            trigger: None,
            trigger2: None,
            trigger_phase: default_phase(),
        }
    }
}

pub struct ArenaCloser {
    config: ArenaCloserConfig,
    /// Built at start, once the entity's resting position is known.
    session: Option<DualTriggerSession>,
}

impl ArenaCloser {
    pub fn new(config: ArenaCloserConfig) -> Self {
        Self { config, session: None }
    }

    pub fn session(&self) -> Option<&DualTriggerSession> {
        self.session.as_ref()
    }

    /// Every source the event belongs to, primary first.
    /// Both sources may name the same volume; each keeps its own latch.
    fn sources_for(&self, event: &TriggerEvent) -> impl Iterator<Item = TriggerSource> {
        let phase = self.config.trigger_phase;
        let primary = self.config.trigger.is_some_and(|t| event.matches(t, phase));
        let secondary = self.config.trigger2.is_some_and(|t| event.matches(t, phase));
        [(TriggerSource::Primary, primary), (TriggerSource::Secondary, secondary)]
            .into_iter()
            .filter_map(|(source, hit)| hit.then_some(source))
    }
}

impl Script for ArenaCloser {
    fn start(&mut self, me: EntityId, ctx: &mut WorldContext) {
        let Some(start) = ctx.scene.position(me) else {
            log::warn!("entity {}: arena closer attached to a missing entity", me.0);
            return;
        };
        let session = DualTriggerSession::new(start, self.config.distance, self.config.duration);
        log::info!("entity {}: arena wall start {} end {}", me.0, session.start(), session.end());
        if self.config.trigger.is_none() && self.config.trigger2.is_none() {
            log::warn!("entity {}: arena closer has no triggers; it will never close", me.0);
        }
        if self.config.duration <= 0.0 || !self.config.duration.is_finite() {
            log::warn!("entity {}: arena duration {} is not positive; it closes instantly", me.0, self.config.duration);
        }
        self.session = Some(session);
    }

    fn update(&mut self, me: EntityId, ctx: &mut WorldContext, dt: f32) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.frame(dt) {
            SessionFrame::Idle => {}
            SessionFrame::Moved(position) => ctx.scene.set_position(me, position),
            SessionFrame::Arrived(position) => {
                ctx.scene.set_position(me, position);
                ctx.emit_event(WorldEvent::new(WorldEvent::ANIMATION_FINISHED, me));
                log::info!("entity {}: arena wall closed at {}", me.0, position);
            }
        }
    }

    fn on_trigger(&mut self, me: EntityId, ctx: &mut WorldContext, event: &TriggerEvent) {
        let sources: Vec<TriggerSource> = self.sources_for(event).collect();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        for source in sources {
            if session.accept(source) {
                log::info!("entity {}: arena closing, {:?} trigger {}", me.0, source, event.trigger.0);
                ctx.emit_event(
                    WorldEvent::new(WorldEvent::SESSION_STARTED, me).with_payload(source.index() as f32, 0.0),
                );
            }
        }
    }
}
