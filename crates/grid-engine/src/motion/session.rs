// motion/session.rs
//
// Mutable progress state shared by everything that can start or advance one animation.

use super::progress::{ProgressDriver, Tick};

/// Outcome of feeding one tick to a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionStep {
    /// Not running, or the tick belongs to the other pacing strategy.
    Ignored,
    /// Still moving; carries the new progress.
    Moving(f32),
    /// Progress reached 1.0 on this tick. Reported once per run.
    Completed,
}

/// Progress through the current segment of an animation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationSession {
    current_index: usize,
    progress: f32,
    running: bool,
}

impl AnimationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the active (or next) segment.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Fraction of the current segment covered, in [0, 1].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Rewind progress to 0 and start running the current segment.
    pub fn restart(&mut self) {
        self.progress = 0.0;
        self.running = true;
    }

    /// Jump to segment `index` and start it from 0.
    pub fn begin_segment(&mut self, index: usize) {
        self.current_index = index;
        self.restart();
    }

    /// Point at the following segment without starting it.
    pub(crate) fn step_index(&mut self) {
        self.current_index += 1;
    }

    /// Advance progress with `driver`.
    pub fn advance(&mut self, driver: &ProgressDriver, tick: Tick) -> SessionStep {
        if !self.running {
            return SessionStep::Ignored;
        }
        let Some(next) = driver.advance(self.progress, tick) else {
            return SessionStep::Ignored;
        };
        self.progress = next;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.running = false;
            SessionStep::Completed
        } else {
            SessionStep::Moving(self.progress)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::progress::Pacing;

    #[test]
    fn starts_idle_at_zero() {
        let s = AnimationSession::new();
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.progress(), 0.0);
        assert!(!s.is_running());
    }

    #[test]
    fn idle_session_ignores_ticks() {
        let mut s = AnimationSession::new();
        let driver = ProgressDriver::new(Pacing::FrameTick, 1.0, 0.0);
        assert_eq!(s.advance(&driver, Tick::Frame { dt: 0.5 }), SessionStep::Ignored);
        assert_eq!(s.progress(), 0.0);
    }

    #[test]
    fn completes_exactly_once() {
        let mut s = AnimationSession::new();
        let driver = ProgressDriver::new(Pacing::FrameTick, 1.0, 0.0);
        s.restart();
        assert_eq!(s.advance(&driver, Tick::Frame { dt: 0.5 }), SessionStep::Moving(0.5));
        assert_eq!(s.advance(&driver, Tick::Frame { dt: 0.75 }), SessionStep::Completed);
        assert_eq!(s.progress(), 1.0);
        assert!(!s.is_running());
        assert_eq!(s.advance(&driver, Tick::Frame { dt: 0.5 }), SessionStep::Ignored);
    }

    #[test]
    fn begin_segment_resets_progress() {
        let mut s = AnimationSession::new();
        let driver = ProgressDriver::new(Pacing::FrameTick, 1.0, 0.0);
        s.restart();
        s.advance(&driver, Tick::Frame { dt: 2.0 });
        s.begin_segment(3);
        assert_eq!(s.current_index(), 3);
        assert_eq!(s.progress(), 0.0);
        assert!(s.is_running());
    }
}
