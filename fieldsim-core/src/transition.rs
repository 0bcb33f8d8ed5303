//! Two-phase easing from one force to another through zero
//!
//! Phase A fades the origin force down to zero keeping its direction. At the
//! A/B boundary the direction switches to the target's, and phase B grows the
//! magnitude from zero up to the target magnitude.

use crate::error::SimError;
use crate::force::Force;
use std::f64::consts::FRAC_PI_2;

/// Default number of steps per phase
pub const DEFAULT_DURATION: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    A,
    B,
    Ended,
}

/// Easing curve used for both phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    InSine,
}

impl Easing {
    /// Value at `step` of a `duration`-step ease starting at `initial`.
    ///
    /// A `target` of exactly zero is replaced by `-initial` so that easing
    /// towards zero keeps a non-degenerate slope.
    pub fn ease(self, step: u32, initial: f64, target: f64, duration: u32) -> f64 {
        let target = if target == 0.0 { -initial } else { target };
        let t = f64::from(step);
        let d = f64::from(duration);
        match self {
            Easing::Linear => initial + (target / d) * t,
            Easing::InSine => -target * ((t / d) * FRAC_PI_2).cos() + target + initial,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ForceTransition {
    id: String,
    origin: Force,
    target: Force,
    origin_end: Force,
    target_start: Force,
    current: Force,
    phase: Phase,
    step: u32,
    duration_a: u32,
    duration_b: u32,
    easing: Easing,
}

impl ForceTransition {
    pub fn new(
        id: impl Into<String>,
        origin: Force,
        target: Force,
        duration_a: u32,
        duration_b: u32,
    ) -> Result<Self, SimError> {
        let id = id.into();
        if duration_a == 0 || duration_b == 0 {
            return Err(SimError::InvalidDuration { id });
        }

        let mut origin_end = origin.clone();
        origin_end.magnitude = 0.0;
        let mut target_start = target.clone();
        target_start.magnitude = 0.0;
        let mut current = origin.clone();
        current.id = id.clone();

        Ok(Self {
            id,
            origin,
            target,
            origin_end,
            target_start,
            current,
            phase: Phase::A,
            step: 0,
            duration_a,
            duration_b,
            easing: Easing::Linear,
        })
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn status(&self) -> Phase {
        self.phase
    }

    /// The most recently produced force
    pub fn current(&self) -> &Force {
        &self.current
    }

    /// Advance one step and return the interpolated force.
    ///
    /// Once ended, the final force is returned unchanged.
    pub fn step(&mut self) -> &Force {
        match self.phase {
            Phase::A => {
                self.step += 1;
                self.current.magnitude = self.easing.ease(
                    self.step,
                    self.origin.magnitude,
                    self.origin_end.magnitude,
                    self.duration_a,
                );
                if self.step == self.duration_a {
                    self.step = 0;
                    self.current.direction = self.target.direction;
                    self.phase = Phase::B;
                }
            }
            Phase::B => {
                self.step += 1;
                self.current.magnitude = self.easing.ease(
                    self.step,
                    self.target_start.magnitude,
                    self.target.magnitude,
                    self.duration_b,
                );
                if self.step == self.duration_b {
                    self.phase = Phase::Ended;
                }
            }
            Phase::Ended => {}
        }
        &self.current
    }
}
