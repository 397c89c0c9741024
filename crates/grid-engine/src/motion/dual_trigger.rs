// motion/dual_trigger.rs
//
// One start→end run shared by two independent trigger sources.
//
// Each source owns a one-shot latch, but the session itself is not latched:
// once a run finishes, a source that has not fired yet can replay it from the
// start. Only a source that already fired is ignored forever.

use glam::Vec3;
use super::interpolate::lerp_vec3;
use super::latch::TriggerLatch;
use super::progress::{Pacing, ProgressDriver, Tick};
use super::session::{AnimationSession, SessionStep};

/// Which of the two trigger sources fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSource {
    Primary,
    Secondary,
}

impl TriggerSource {
    pub fn index(self) -> usize {
        match self {
            TriggerSource::Primary => 0,
            TriggerSource::Secondary => 1,
        }
    }
}

/// Outcome of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionFrame {
    /// Not running.
    Idle,
    Moved(Vec3),
    /// Reached the end point on this frame.
    Arrived(Vec3),
}

/// Frame-paced start→end mover with two one-shot trigger sources.
#[derive(Debug, Clone)]
pub struct DualTriggerSession {
    start: Vec3,
    end: Vec3,
    driver: ProgressDriver,
    session: AnimationSession,
    latches: [TriggerLatch; 2],
}

impl DualTriggerSession {
    /// Move from `start` to `start + offset` over `duration` seconds.
    pub fn new(start: Vec3, offset: Vec3, duration: f32) -> Self {
        Self {
            start,
            end: start + offset,
            driver: ProgressDriver::new(Pacing::FrameTick, duration, 0.0),
            session: AnimationSession::new(),
            latches: [TriggerLatch::new(); 2],
        }
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn end(&self) -> Vec3 {
        self.end
    }

    pub fn session(&self) -> &AnimationSession {
        &self.session
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn has_fired(&self, source: TriggerSource) -> bool {
        self.latches[source.index()].has_fired()
    }

    /// Offer a trigger from `source`. Returns whether a run started.
    pub fn accept(&mut self, source: TriggerSource) -> bool {
        self.latches[source.index()].accept(&mut self.session)
    }

    /// Advance by one host frame.
    pub fn frame(&mut self, dt: f32) -> SessionFrame {
        match self.session.advance(&self.driver, Tick::Frame { dt }) {
            SessionStep::Ignored => SessionFrame::Idle,
            SessionStep::Moving(t) => SessionFrame::Moved(lerp_vec3(self.start, self.end, t)),
            SessionStep::Completed => SessionFrame::Arrived(self.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 5/16 s keeps every progress increment exact in binary.
    const DT: f32 = 0.3125;

    /// Run frames until `seconds` of frame time have passed. Returns the last frame.
    fn run(session: &mut DualTriggerSession, seconds: f32) -> SessionFrame {
        let mut last = SessionFrame::Idle;
        let frames = (seconds / DT).round() as usize;
        for _ in 0..frames {
            last = session.frame(DT);
        }
        last
    }

    fn arena() -> DualTriggerSession {
        DualTriggerSession::new(Vec3::ZERO, Vec3::splat(5.0), 5.0)
    }

    #[test]
    fn replays_when_second_source_fires_after_completion() {
        let mut s = arena();

        // A at t=0, arrives at t=5.
        assert!(s.accept(TriggerSource::Primary));
        assert_eq!(run(&mut s, 5.0), SessionFrame::Arrived(Vec3::splat(5.0)));
        assert!(!s.is_running());

        // Idle until t=10.
        assert_eq!(run(&mut s, 5.0), SessionFrame::Idle);

        // B at t=10 replays from the start and arrives again at t=15.
        assert!(s.accept(TriggerSource::Secondary));
        assert_eq!(s.session().progress(), 0.0);
        let first = s.frame(DT);
        match first {
            SessionFrame::Moved(p) => assert!(p.x < 1.0, "replay should restart near the start, got {}", p),
            other => panic!("expected motion, got {:?}", other),
        }
        assert_eq!(run(&mut s, 5.0 - DT), SessionFrame::Arrived(Vec3::splat(5.0)));
    }

    #[test]
    fn second_source_ignored_mid_run() {
        let mut s = arena();
        assert!(s.accept(TriggerSource::Primary));
        run(&mut s, 2.0);
        let progress = s.session().progress();

        assert!(!s.accept(TriggerSource::Secondary));
        assert_eq!(s.session().progress(), progress);
        assert!(!s.has_fired(TriggerSource::Secondary));
    }

    #[test]
    fn fired_source_never_restarts() {
        let mut s = arena();
        assert!(s.accept(TriggerSource::Primary));
        run(&mut s, 6.0);
        assert!(!s.accept(TriggerSource::Primary));
        assert!(s.accept(TriggerSource::Secondary));
        run(&mut s, 6.0);
        // Third and later firings from either source are ignored.
        assert!(!s.accept(TriggerSource::Primary));
        assert!(!s.accept(TriggerSource::Secondary));
        assert_eq!(s.frame(DT), SessionFrame::Idle);
    }

    #[test]
    fn untriggered_session_stays_put() {
        let mut s = arena();
        assert_eq!(run(&mut s, 10.0), SessionFrame::Idle);
        assert_eq!(s.session().progress(), 0.0);
    }
}
