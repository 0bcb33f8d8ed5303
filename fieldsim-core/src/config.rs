//! Tuning constants for the simulation
//!
//! Every value has a default matching the reference scene, so a scenario file
//! only needs to name what it overrides:
//!
//! ```json
//! {
//!   "config": {
//!     "max_field_energy": 0.02,
//!     "pivot_policy": "break-on-separation",
//!     "damping": { "primary_collision": 0.95 }
//!   }
//! }
//! ```
//!
//! The magnitudes are ad hoc approximations standing in for mass and inertia,
//! which the simulation does not model.

use crate::error::SimError;
use serde::{Deserialize, Serialize};

/// What happens to a pivot once its satellites separate past `max_pivot_distance`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PivotPolicy {
    /// The bond is never cleared; separation only triggers the rollback and
    /// field recomputation.
    #[default]
    Sticky,
    /// Separation clears the bond on both satellites.
    BreakOnSeparation,
}

/// Whether satellite charge affects the field force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldPolarity {
    /// Every pair attracts regardless of charge.
    #[default]
    Ignore,
    /// Unlike charges attract, like charges repel.
    Signed,
}

/// Per-class multiplicative decay applied after integration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DampingConfig {
    pub primary_collision: f64,
    pub satellite_collision: f64,
    pub satellite_collision_torque: f64,
}

impl Default for DampingConfig {
    fn default() -> Self {
        Self {
            primary_collision: 0.98,
            satellite_collision: 0.9,
            satellite_collision_torque: 0.9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub primary_radius: f64,
    pub satellite_radius: f64,
    pub satellite_field_radius: f64,
    /// Orbit radius used by slot placement
    pub satellite_distance: f64,
    pub min_pivot_distance: f64,
    pub max_pivot_distance: f64,
    pub max_field_energy: f64,
    /// Transient scale applied to the net velocity before each translation
    pub velocity_scale: f64,
    pub primary_collision_magnitude: f64,
    pub satellite_collision_magnitude: f64,
    pub damping: DampingConfig,
    pub pivot_policy: PivotPolicy,
    pub field_polarity: FieldPolarity,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            primary_radius: 0.5,
            satellite_radius: 0.1,
            satellite_field_radius: 3.0,
            satellite_distance: 1.0,
            min_pivot_distance: 0.01,
            max_pivot_distance: 0.05,
            max_field_energy: 0.01,
            velocity_scale: 0.2,
            primary_collision_magnitude: 0.1,
            satellite_collision_magnitude: 0.05,
            damping: DampingConfig::default(),
            pivot_policy: PivotPolicy::default(),
            field_polarity: FieldPolarity::default(),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        let positive = [
            ("primary_radius", self.primary_radius),
            ("satellite_radius", self.satellite_radius),
            ("satellite_field_radius", self.satellite_field_radius),
            ("satellite_distance", self.satellite_distance),
            ("min_pivot_distance", self.min_pivot_distance),
            ("max_pivot_distance", self.max_pivot_distance),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if self.min_pivot_distance >= self.max_pivot_distance {
            return Err(SimError::config(format!(
                "min_pivot_distance ({}) must be below max_pivot_distance ({})",
                self.min_pivot_distance, self.max_pivot_distance
            )));
        }

        let finite = [
            ("max_field_energy", self.max_field_energy),
            ("velocity_scale", self.velocity_scale),
            ("primary_collision_magnitude", self.primary_collision_magnitude),
            ("satellite_collision_magnitude", self.satellite_collision_magnitude),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SimError::config(format!("{} must be finite", name)));
            }
        }

        let damping = [
            ("damping.primary_collision", self.damping.primary_collision),
            ("damping.satellite_collision", self.damping.satellite_collision),
            (
                "damping.satellite_collision_torque",
                self.damping.satellite_collision_torque,
            ),
        ];
        for (name, value) in damping {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::config(format!(
                    "{} must lie in [0, 1], got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
