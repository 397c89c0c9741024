// motion/sequencer.rs
//
// Walks an ordered point list one segment at a time.
//
//   Idle ──start──▶ Running(0) ──▶ Waiting(1) ──resume──▶ Running(1) ──▶ … ──▶ Complete
//
// The sequencer never reads a clock itself. Callers feed it ticks and own the
// inter-segment delay timer, so it runs the same under either pacing strategy.

use glam::Vec3;
use super::interpolate::lerp_vec3;
use super::progress::{segment_duration, Pacing, ProgressDriver, Tick};
use super::session::{AnimationSession, SessionStep};

/// Where the sequencer is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerPhase {
    /// Not started yet.
    Idle,
    /// Interpolating the segment at `session.current_index()`.
    Running,
    /// Between segments; `session.current_index()` is the next segment.
    Waiting,
    /// Final point reached. Terminal.
    Complete,
}

/// What a call to the sequencer did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SequencerStep {
    /// Nothing to write.
    Unchanged,
    /// The entity should move to this point.
    Moved(Vec3),
    /// A non-final segment arrived. Call `resume` after `delay` seconds.
    SegmentFinished { position: Vec3, segment: usize, delay: f32 },
    /// The final segment arrived. No further motion.
    Finished { position: Vec3, segment: usize },
}

impl SequencerStep {
    /// Position to write to the entity, if any.
    pub fn position(&self) -> Option<Vec3> {
        match *self {
            SequencerStep::Unchanged => None,
            SequencerStep::Moved(position)
            | SequencerStep::SegmentFinished { position, .. }
            | SequencerStep::Finished { position, .. } => Some(position),
        }
    }
}

/// Drives an entity through a list of waypoints at constant speed.
#[derive(Debug, Clone)]
pub struct WaypointSequencer {
    waypoints: Vec<Vec3>,
    /// Units per second.
    speed: f32,
    /// Seconds to wait between segments.
    delay: f32,
    pacing: Pacing,
    session: AnimationSession,
    driver: Option<ProgressDriver>,
    phase: SequencerPhase,
}

impl WaypointSequencer {
    pub fn new(waypoints: Vec<Vec3>, speed: f32, delay: f32, pacing: Pacing) -> Self {
        Self {
            waypoints,
            speed,
            delay,
            pacing,
            session: AnimationSession::new(),
            driver: None,
            phase: SequencerPhase::Idle,
        }
    }

    /// Whether there are enough points for any motion.
    pub fn can_move(&self) -> bool {
        self.waypoints.len() >= 2
    }

    /// Re-entrancy guard: true from the first start onwards, including after completion.
    pub fn is_animating(&self) -> bool {
        self.phase != SequencerPhase::Idle
    }

    pub fn phase(&self) -> SequencerPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SequencerPhase::Complete
    }

    pub fn session(&self) -> &AnimationSession {
        &self.session
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    /// Endpoints of segment `index`.
    pub fn segment(&self, index: usize) -> Option<(Vec3, Vec3)> {
        let start = *self.waypoints.get(index)?;
        let end = *self.waypoints.get(index + 1)?;
        Some((start, end))
    }

    /// Duration of the active segment in seconds.
    pub fn segment_duration(&self) -> Option<f32> {
        self.driver.map(|d| d.duration())
    }

    /// Start from the first waypoint. Ignored once started, or with fewer than two points.
    pub fn start(&mut self, now: f64) -> SequencerStep {
        if self.is_animating() || !self.can_move() {
            return SequencerStep::Unchanged;
        }
        log::debug!("waypoint sequence started ({} points)", self.waypoints.len());
        self.begin_segment(0, now)
    }

    /// Begin the next segment after the inter-segment delay.
    pub fn resume(&mut self, now: f64) -> SequencerStep {
        if self.phase != SequencerPhase::Waiting {
            return SequencerStep::Unchanged;
        }
        self.begin_segment(self.session.current_index(), now)
    }

    /// Feed a tick to the active segment.
    pub fn advance(&mut self, tick: Tick) -> SequencerStep {
        if self.phase != SequencerPhase::Running {
            return SequencerStep::Unchanged;
        }
        let (Some(driver), Some((start, end))) = (self.driver, self.segment(self.session.current_index())) else {
            return SequencerStep::Unchanged;
        };
        match self.session.advance(&driver, tick) {
            SessionStep::Ignored => SequencerStep::Unchanged,
            SessionStep::Moving(t) => SequencerStep::Moved(lerp_vec3(start, end, t)),
            SessionStep::Completed => self.finish_segment(end),
        }
    }

    fn begin_segment(&mut self, index: usize, now: f64) -> SequencerStep {
        let Some((start, end)) = self.segment(index) else {
            self.phase = SequencerPhase::Complete;
            return SequencerStep::Unchanged;
        };
        let duration = segment_duration(start.distance(end), self.speed);
        log::debug!("segment {} begins: {} -> {} over {:.3}s", index, start, end, duration);

        self.driver = Some(ProgressDriver::new(self.pacing, duration, now));
        self.session.begin_segment(index);
        self.phase = SequencerPhase::Running;

        match self.pacing {
            // The first poll runs synchronously at segment start.
            Pacing::Polling { .. } => self.advance(Tick::Poll { now }),
            Pacing::FrameTick => SequencerStep::Moved(start),
        }
    }

    fn finish_segment(&mut self, end: Vec3) -> SequencerStep {
        let segment = self.session.current_index();
        if segment + 2 >= self.waypoints.len() {
            self.phase = SequencerPhase::Complete;
            self.driver = None;
            SequencerStep::Finished { position: end, segment }
        } else {
            self.session.step_index();
            self.phase = SequencerPhase::Waiting;
            SequencerStep::SegmentFinished { position: end, segment, delay: self.delay }
        }
    }
}
