// motion/rotator.rs
//
// Spins about the vertical axis every frame until its
// trigger fires, then snaps back to identity and stays there.

use glam::{Quat, Vec3};
use super::interpolate::spin;

/// Orientation accumulator plus the one-way running flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub orientation: Quat,
    /// Starts true; cleared exactly once.
    pub active: bool,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            orientation: Quat::IDENTITY,
            active: true,
        }
    }
}

/// Running → Stopped, terminal.
#[derive(Debug, Clone)]
pub struct ContinuousRotator {
    axis: Vec3,
    /// Radians per second.
    angular_speed: f32,
    state: RotationState,
}

impl ContinuousRotator {
    /// Spin about +Y at `angular_speed` radians per second.
    pub fn new(angular_speed: f32) -> Self {
        Self {
            axis: Vec3::Y,
            angular_speed,
            state: RotationState::default(),
        }
    }

    /// Spin about +Y at `degrees` per second.
    pub fn from_degrees(degrees: f32) -> Self {
        Self::new(degrees.to_radians())
    }

    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn orientation(&self) -> Quat {
        self.state.orientation
    }

    /// Accumulate one frame of rotation. Returns the orientation to write, or `None` once stopped.
    pub fn frame(&mut self, dt: f32) -> Option<Quat> {
        if !self.state.active {
            return None;
        }
        self.state.orientation = spin(self.state.orientation, self.axis, self.angular_speed * dt);
        Some(self.state.orientation)
    }

    /// Halt permanently. Returns the identity rotation to write the first time only.
    pub fn stop(&mut self) -> Option<Quat> {
        if !self.state.active {
            return None;
        }
        self.state.active = false;
        self.state.orientation = Quat::IDENTITY;
        Some(Quat::IDENTITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaw(q: Quat) -> f32 {
        let (axis, angle) = q.to_axis_angle();
        angle * axis.y.signum()
    }

    #[test]
    fn accumulates_yaw_monotonically() {
        let mut r = ContinuousRotator::from_degrees(30.0);
        let mut last = 0.0;
        for _ in 0..30 {
            let q = r.frame(0.1).unwrap();
            let angle = yaw(q);
            assert!(angle > last, "yaw went from {} to {}", last, angle);
            last = angle;
        }
        // 30 deg/s for 3 s = 90 deg.
        assert!((last - 90f32.to_radians()).abs() < 1e-3, "yaw = {}", last);
    }

    #[test]
    fn stop_resets_to_identity_once() {
        let mut r = ContinuousRotator::from_degrees(30.0);
        r.frame(1.0);
        assert_eq!(r.stop(), Some(Quat::IDENTITY));
        assert!(!r.is_active());
        assert_eq!(r.orientation(), Quat::IDENTITY);

        assert_eq!(r.stop(), None);
        assert_eq!(r.frame(1.0), None);
        assert_eq!(r.orientation(), Quat::IDENTITY);
    }
}
