// core/scheduler.rs
//
// One-shot timers keyed by owning entity, the world's equivalent of `setTimeout`.
// Scripts schedule; the world pumps due timers once per frame and routes them back.

use crate::api::types::EntityId;

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u32);

/// A pending one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    pub id: TimerId,
    /// Entity whose scripts receive the callback.
    pub owner: EntityId,
    /// Absolute clock time (seconds) at which the timer fires.
    pub due: f64,
}

/// Pending timers, fired in due order.
#[derive(Debug, Default)]
pub struct Scheduler {
    timers: Vec<Timer>,
    next_id: u32,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a callback for `owner` after `delay` seconds from `now`.
    /// Negative delays fire on the next pump.
    pub fn set_timeout(&mut self, owner: EntityId, now: f64, delay: f32) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.timers.push(Timer {
            id,
            owner,
            due: now + delay.max(0.0) as f64,
        });
        id
    }

    /// Remove and return every timer due at `now`, earliest first.
    /// Ties keep scheduling order.
    pub fn take_due(&mut self, now: f64) -> Vec<Timer> {
        let mut due: Vec<Timer> = Vec::new();
        self.timers.retain(|t| {
            if t.due <= now {
                due.push(*t);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.id.cmp(&b.id)));
        due
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Whether no timers are pending.
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
