// motion/interpolate.rs
//
// Pure interpolation helpers for movers and rotators.
// No dependencies on Entity or Scene, just math.

use glam::{Quat, Vec3};

/// Linearly interpolate between two points.
///
/// The endpoints are returned exactly at `t <= 0` and `t >= 1`, so a segment
/// that completes lands on its end point without rounding error.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    if t <= 0.0 {
        a
    } else if t >= 1.0 {
        b
    } else {
        a + (b - a) * t
    }
}

/// Compose a small rotation of `angle` radians about `axis` onto `orientation`.
///
/// Accumulates multiplicatively (`orientation * delta`) rather than blending
/// endpoints, and renormalizes so long-running spins do not drift off unit length.
#[inline]
pub fn spin(orientation: Quat, axis: Vec3, angle: f32) -> Quat {
    (orientation * Quat::from_axis_angle(axis, angle)).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = Vec3::new(48.46, -16.0, -3.2);
        let b = Vec3::new(48.46, 44.0, -3.2);
        assert_eq!(lerp_vec3(a, b, 0.0), a);
        assert_eq!(lerp_vec3(a, b, 1.0), b);
    }

    #[test]
    fn lerp_is_affine() {
        let a = Vec3::ZERO;
        let b = Vec3::new(0.0, 10.0, 0.0);
        let mid = lerp_vec3(a, b, 0.5);
        assert!((mid - Vec3::new(0.0, 5.0, 0.0)).length() < 1e-6);
        let quarter = lerp_vec3(a, b, 0.25);
        assert!((quarter.y - 2.5).abs() < 1e-6);
    }

    #[test]
    fn spin_accumulates_about_axis() {
        let quarter = std::f32::consts::FRAC_PI_4;
        let q = spin(spin(Quat::IDENTITY, Vec3::Y, quarter), Vec3::Y, quarter);
        let expected = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        // Component-wise; angle_between goes through acos and loses f32 precision near zero.
        assert!(q.abs_diff_eq(expected, 1e-6), "got {}", q);
    }
}
