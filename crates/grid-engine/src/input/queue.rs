use serde::{Deserialize, Serialize};
use crate::api::types::{EntityId, PlayerId};

/// Which side of a trigger volume boundary a player crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerPhase {
    /// The player walked into the volume.
    #[default]
    Enter,
    /// The player walked out of the volume.
    Exit,
}

/// A trigger-volume notification from the host.
/// Delivered at most once per physical crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerEvent {
    /// The trigger volume entity.
    pub trigger: EntityId,
    pub phase: TriggerPhase,
    pub player: PlayerId,
}

impl TriggerEvent {
    pub fn enter(trigger: EntityId, player: PlayerId) -> Self {
        Self { trigger, phase: TriggerPhase::Enter, player }
    }

    pub fn exit(trigger: EntityId, player: PlayerId) -> Self {
        Self { trigger, phase: TriggerPhase::Exit, player }
    }

    /// Whether this event is the given phase on the given trigger.
    pub fn matches(&self, trigger: EntityId, phase: TriggerPhase) -> bool {
        self.trigger == trigger && self.phase == phase
    }
}

/// A queue of trigger events.
/// The host writes events into the queue; the world drains them each frame.
pub struct TriggerQueue {
    events: Vec<TriggerEvent>,
}

impl TriggerQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    /// Push a new trigger event (called from the host bridge).
    pub fn push(&mut self, event: TriggerEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<TriggerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for TriggerQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = TriggerQueue::new();
        q.push(TriggerEvent::enter(EntityId(10), PlayerId(1)));
        q.push(TriggerEvent::exit(EntityId(10), PlayerId(1)));
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].phase, TriggerPhase::Exit);
        assert!(q.is_empty());
    }

    #[test]
    fn matches_checks_trigger_and_phase() {
        let ev = TriggerEvent::exit(EntityId(4), PlayerId(2));
        assert!(ev.matches(EntityId(4), TriggerPhase::Exit));
        assert!(!ev.matches(EntityId(4), TriggerPhase::Enter));
        assert!(!ev.matches(EntityId(5), TriggerPhase::Exit));
    }
}
