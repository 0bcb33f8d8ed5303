use crate::error::SimError;
use crate::math::{angle_to, direction_between};
use glam::DVec3;

/// Class tags of the forces the engine produces
pub mod class {
    pub const PRIMARY_COLLISION: &str = "primary-collision";
    pub const SATELLITE_COLLISION: &str = "satellite-collision";
    pub const SATELLITE_COLLISION_TORQUE: &str = "satellite-collision-torque";
    pub const INTERACTION_SPEED: &str = "satellite-satellite-interaction-speed";
    pub const INTERACTION_TORQUE: &str = "satellite-satellite-torque";
}

/// An identity-tagged, class-tagged directed magnitude.
///
/// A negative magnitude points against `direction` (repulsion where a positive
/// value would attract).
#[derive(Debug, Clone, PartialEq)]
pub struct Force {
    pub id: String,
    pub class: String,
    pub direction: DVec3,
    pub magnitude: f64,
}

impl Force {
    /// Build a force, rejecting a zero-length or non-finite direction
    pub fn new(
        id: impl Into<String>,
        class: impl Into<String>,
        direction: DVec3,
        magnitude: f64,
    ) -> Result<Self, SimError> {
        if !direction.is_finite() || direction.length_squared() == 0.0 {
            return Err(SimError::InvalidDirection(direction));
        }
        Ok(Self::from_parts(id, class, direction, magnitude))
    }

    /// A force with no direction and zero magnitude
    pub fn zero(id: impl Into<String>, class: impl Into<String>) -> Self {
        Self::from_parts(id, class, DVec3::ZERO, 0.0)
    }

    /// Unchecked constructor for producers that derive the direction from
    /// geometry and accept a zero vector for coincident points.
    pub(crate) fn from_parts(
        id: impl Into<String>,
        class: impl Into<String>,
        direction: DVec3,
        magnitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            class: class.into(),
            direction,
            magnitude,
        }
    }

    /// Copy direction and magnitude from `other`, keeping this force's id and class
    pub fn copy_from(&mut self, other: &Force) {
        self.direction = other.direction;
        self.magnitude = other.magnitude;
    }

    /// True when the magnitude is exactly zero
    pub fn is_zero(&self) -> bool {
        self.magnitude.abs() == 0.0
    }

    /// The force as a plain vector
    pub fn vector(&self) -> DVec3 {
        self.direction * self.magnitude
    }

    /// Parallelogram composition of `a` and `b`.
    ///
    /// The direction comes from the signed vector sum while the magnitude uses
    /// the law of cosines on the unsigned directions, so the two can disagree
    /// for negative magnitudes. A non-positive radicand yields zero.
    pub fn resultant(a: &Force, b: &Force) -> Force {
        let direction = direction_between(DVec3::ZERO, a.vector() + b.vector());
        let cos = angle_to(a.direction, b.direction).cos();
        let radicand =
            a.magnitude.powi(2) + b.magnitude.powi(2) + 2.0 * a.magnitude * b.magnitude * cos;
        let magnitude = if radicand <= 0.0 { 0.0 } else { radicand.sqrt() };

        Force::from_parts("", "", direction, magnitude)
    }
}
