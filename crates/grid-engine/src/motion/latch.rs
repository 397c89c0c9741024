// motion/latch.rs
//
// One-shot trigger gate. A latch lets exactly one start through per trigger
// source for the lifetime of its owner and is never re-armed.

use super::session::AnimationSession;

/// Per-source one-shot gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerLatch {
    fired: bool,
}

impl TriggerLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Fire the latch unless it already fired or the target is `busy`.
    /// Returns whether the caller may start.
    pub fn try_fire(&mut self, busy: bool) -> bool {
        if self.fired || busy {
            return false;
        }
        self.fired = true;
        true
    }

    /// Fire into a session: on success the session restarts from progress 0.
    ///
    /// Both checks matter. The running check stops a second source from
    /// restarting a run in flight; the latch stops this source from restarting
    /// a run that already finished.
    pub fn accept(&mut self, session: &mut AnimationSession) -> bool {
        if !self.try_fire(session.is_running()) {
            return false;
        }
        session.restart();
        true
    }
}
