//! Small vector helpers used by the force and body code

use glam::{DQuat, DVec3};
use std::f64::consts::FRAC_PI_2;

/// Unit vector pointing from `from` to `to`, or zero if the points coincide
pub fn direction_between(from: DVec3, to: DVec3) -> DVec3 {
    (to - from).normalize_or_zero()
}

/// Angle between two vectors in radians.
///
/// A zero-length operand yields a right angle instead of NaN, so composing
/// with a zero force stays well defined.
pub fn angle_to(a: DVec3, b: DVec3) -> f64 {
    let denominator = (a.length_squared() * b.length_squared()).sqrt();
    if denominator == 0.0 {
        return FRAC_PI_2;
    }
    (a.dot(b) / denominator).clamp(-1.0, 1.0).acos()
}

/// Unit normal of the triangle `(a, b, c)`, zero when the triangle is degenerate
pub fn triangle_normal(a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
    let normal = (c - b).cross(a - b);
    let length_sq = normal.length_squared();
    if length_sq > 0.0 {
        normal / length_sq.sqrt()
    } else {
        DVec3::ZERO
    }
}

/// Unit direction for the spherical angles `(omega, gamma)`.
///
/// `omega` is measured from +Z, `gamma` around Z starting at +X.
pub fn spherical_direction(omega: f64, gamma: f64) -> DVec3 {
    DVec3::new(
        omega.sin() * gamma.cos(),
        omega.sin() * gamma.sin(),
        omega.cos(),
    )
    .normalize_or_zero()
}

/// Rotate `rotation` about a world-space axis by `angle` radians.
///
/// A zero axis or zero angle leaves the rotation untouched.
pub fn rotate_on_world_axis(rotation: DQuat, axis: DVec3, angle: f64) -> DQuat {
    let axis = axis.normalize_or_zero();
    if axis == DVec3::ZERO || angle == 0.0 || !angle.is_finite() {
        return rotation;
    }
    (DQuat::from_axis_angle(axis, angle) * rotation).normalize()
}
