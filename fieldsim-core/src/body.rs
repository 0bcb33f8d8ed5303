//! Primary and satellite bodies
//!
//! Bodies live in the [`World`](crate::engine::World) arenas and refer to each
//! other through the copyable handles defined here, never through owning
//! pointers.

use crate::accumulator::ForceAccumulator;
use crate::config::SimConfig;
use crate::force::class;
use crate::math::{rotate_on_world_axis, spherical_direction};
use crate::pivot::Pivot;
use crate::transition::{ForceTransition, Phase};
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Handle to a primary body in a world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimaryId(usize);

/// Handle to a satellite body in a world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SatelliteId(usize);

impl PrimaryId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl SatelliteId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Any body the engine can pair up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyHandle {
    Primary(PrimaryId),
    Satellite(SatelliteId),
}

/// Position and orientation snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: DVec3,
    pub rotation: DQuat,
}

impl Pose {
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            rotation: DQuat::IDENTITY,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::at(DVec3::ZERO)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charge {
    #[default]
    Positive,
    Negative,
}

impl Charge {
    pub fn sign(self) -> f64 {
        match self {
            Charge::Positive => 1.0,
            Charge::Negative => -1.0,
        }
    }
}

/// Fixed spherical offset of a satellite from its owner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub omega: f64,
    pub gamma: f64,
    pub distance: f64,
}

impl Orbit {
    /// Offset from the owner before the owner's rotation is applied
    pub fn local_offset(&self) -> DVec3 {
        spherical_direction(self.omega, self.gamma) * self.distance
    }
}

/// Capabilities shared by every body the engine iterates over
pub trait Body {
    fn id(&self) -> &str;
    fn pose(&self) -> &Pose;
    /// Only interactive bodies take part in interaction and collision passes
    fn is_body(&self) -> bool;

    fn field_radius(&self) -> f64 {
        0.0
    }

    fn position(&self) -> DVec3 {
        self.pose().position
    }
}

/// Which accumulator of a primary body a force feeds into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Velocity,
    Torque,
}

#[derive(Debug, Clone)]
struct ActiveTransition {
    channel: Channel,
    transition: ForceTransition,
}

/// The larger body that translates and rotates under its net forces
#[derive(Debug, Clone)]
pub struct PrimaryBody {
    id: String,
    pose: Pose,
    previous: Pose,
    latest: Pose,
    velocities: ForceAccumulator,
    torques: ForceAccumulator,
    transitions: Vec<ActiveTransition>,
    interactive: bool,
}

impl PrimaryBody {
    pub fn new(id: impl Into<String>, position: DVec3) -> Self {
        let pose = Pose::at(position);
        Self {
            id: id.into(),
            pose,
            previous: pose,
            latest: pose,
            velocities: ForceAccumulator::new(),
            torques: ForceAccumulator::new(),
            transitions: Vec::new(),
            interactive: true,
        }
    }

    /// Pose before the most recent integration
    pub fn previous(&self) -> &Pose {
        &self.previous
    }

    /// Pose right after the most recent integration
    pub fn latest(&self) -> &Pose {
        &self.latest
    }

    pub fn rotation(&self) -> DQuat {
        self.pose.rotation
    }

    pub fn velocities(&self) -> &ForceAccumulator {
        &self.velocities
    }

    pub fn velocities_mut(&mut self) -> &mut ForceAccumulator {
        &mut self.velocities
    }

    pub fn torques(&self) -> &ForceAccumulator {
        &self.torques
    }

    pub fn torques_mut(&mut self) -> &mut ForceAccumulator {
        &mut self.torques
    }

    pub fn set_position(&mut self, position: DVec3) {
        self.pose.position = position;
    }

    pub fn set_rotation(&mut self, rotation: DQuat) {
        self.pose.rotation = rotation;
    }

    pub(crate) fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Restore position only, leaving the orientation as is
    pub(crate) fn restore_position(&mut self, snapshot: Pose) {
        self.pose.position = snapshot.position;
    }

    pub(crate) fn restore_pose(&mut self, snapshot: Pose) {
        self.pose = snapshot;
    }

    /// Feed `transition` into one of the accumulators, one step per update,
    /// until it ends.
    pub fn start_transition(&mut self, channel: Channel, transition: ForceTransition) {
        self.transitions.push(ActiveTransition {
            channel,
            transition,
        });
    }

    pub fn active_transitions(&self) -> usize {
        self.transitions.len()
    }

    fn step_transitions(&mut self) {
        for active in self.transitions.iter_mut() {
            let force = active.transition.step().clone();
            match active.channel {
                Channel::Velocity => {
                    self.velocities.upsert(force);
                }
                Channel::Torque => {
                    self.torques.upsert(force);
                }
            }
        }
        self.transitions
            .retain(|active| active.transition.status() != Phase::Ended);
    }

    /// Integrate one tick from the net velocity and torque.
    ///
    /// Collision impulses are damped after integration, so the impulse added
    /// during a tick acts at full strength on the next one.
    pub fn update(&mut self, config: &SimConfig) {
        self.step_transitions();

        self.velocities.prune();
        self.torques.prune();

        let torque = self.torques.net_force();
        let mut velocity = self.velocities.net_force();
        velocity.magnitude *= config.velocity_scale;

        self.previous = self.pose;
        self.pose.rotation =
            rotate_on_world_axis(self.pose.rotation, torque.direction, torque.magnitude);
        self.pose.position += velocity.direction * velocity.magnitude;
        self.latest = self.pose;

        let damping = &config.damping;
        self.velocities
            .apply_damping(damping.primary_collision, Some(class::PRIMARY_COLLISION));
        self.velocities
            .apply_damping(damping.satellite_collision, Some(class::SATELLITE_COLLISION));
        self.torques.apply_damping(
            damping.satellite_collision_torque,
            Some(class::SATELLITE_COLLISION_TORQUE),
        );
    }
}

impl Body for PrimaryBody {
    fn id(&self) -> &str {
        &self.id
    }

    fn pose(&self) -> &Pose {
        &self.pose
    }

    fn is_body(&self) -> bool {
        self.interactive
    }
}

/// A charged point rigidly offset from its owning primary body
#[derive(Debug, Clone)]
pub struct SatelliteBody {
    id: String,
    owner: PrimaryId,
    charge: Charge,
    orbit: Orbit,
    field_radius: f64,
    pub(crate) pivot: Option<Pivot>,
    pose: Pose,
    interactive: bool,
}

impl SatelliteBody {
    pub fn new(
        id: impl Into<String>,
        owner: PrimaryId,
        charge: Charge,
        orbit: Orbit,
        field_radius: f64,
    ) -> Self {
        Self {
            id: id.into(),
            owner,
            charge,
            orbit,
            field_radius,
            pivot: None,
            pose: Pose::default(),
            interactive: true,
        }
    }

    pub fn owner(&self) -> PrimaryId {
        self.owner
    }

    pub fn charge(&self) -> Charge {
        self.charge
    }

    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    pub fn pivot(&self) -> Option<&Pivot> {
        self.pivot.as_ref()
    }

    pub(crate) fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Re-anchor to the owner: same orientation, offset rotated with it
    pub fn update(&mut self, owner: &Pose) {
        self.pose.rotation = owner.rotation;
        self.pose.position = owner.position + owner.rotation * self.orbit.local_offset();
    }
}

impl Body for SatelliteBody {
    fn id(&self) -> &str {
        &self.id
    }

    fn pose(&self) -> &Pose {
        &self.pose
    }

    fn is_body(&self) -> bool {
        self.interactive
    }

    fn field_radius(&self) -> f64 {
        self.field_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::force::Force;
    use crate::transition::{Easing, ForceTransition};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn update_translates_by_scaled_net_velocity() {
        let mut body = PrimaryBody::new("p", DVec3::ZERO);
        body.velocities_mut()
            .upsert(Force::new("push", "constant", DVec3::X, 0.5).unwrap());
        body.update(&SimConfig::default());

        assert!((body.position() - DVec3::new(0.1, 0.0, 0.0)).length() < 1e-12);
        assert_eq!(body.previous().position, DVec3::ZERO);
        assert_eq!(body.latest().position, body.position());
        // the velocity scale is transient
        assert_eq!(body.velocities().get("push").unwrap().magnitude, 0.5);
    }

    #[test]
    fn update_rotates_about_net_torque_axis() {
        let mut body = PrimaryBody::new("p", DVec3::ZERO);
        body.torques_mut()
            .upsert(Force::new("spin", "constant", DVec3::Z, FRAC_PI_2).unwrap());
        body.update(&SimConfig::default());

        assert!((body.rotation() * DVec3::X - DVec3::Y).length() < 1e-12);
        assert_eq!(body.previous().rotation, DQuat::IDENTITY);
    }

    #[test]
    fn update_damps_collision_classes_after_integration() {
        let mut body = PrimaryBody::new("p", DVec3::ZERO);
        body.velocities_mut().upsert(
            Force::new("pc", class::PRIMARY_COLLISION, DVec3::X, 1.0).unwrap(),
        );
        body.velocities_mut().upsert(
            Force::new("sc", class::SATELLITE_COLLISION, DVec3::X, 1.0).unwrap(),
        );
        body.velocities_mut()
            .upsert(Force::new("other", "constant", DVec3::X, 1.0).unwrap());
        body.torques_mut().upsert(
            Force::new("t", class::SATELLITE_COLLISION_TORQUE, DVec3::Z, 1.0).unwrap(),
        );
        body.update(&SimConfig::default());

        assert!((body.velocities().get("pc").unwrap().magnitude - 0.98).abs() < 1e-12);
        assert!((body.velocities().get("sc").unwrap().magnitude - 0.9).abs() < 1e-12);
        assert_eq!(body.velocities().get("other").unwrap().magnitude, 1.0);
        assert!((body.torques().get("t").unwrap().magnitude - 0.9).abs() < 1e-12);
    }

    #[test]
    fn update_prunes_zero_forces() {
        let mut body = PrimaryBody::new("p", DVec3::ZERO);
        body.velocities_mut()
            .upsert(Force::new("dead", "constant", DVec3::X, 0.0).unwrap());
        body.update(&SimConfig::default());
        assert!(body.velocities().is_empty());
        assert_eq!(body.position(), DVec3::ZERO);
    }

    #[test]
    fn transitions_feed_accumulator_until_ended() {
        let mut body = PrimaryBody::new("p", DVec3::ZERO);
        let origin = Force::new("o", "drive", DVec3::X, 1.0).unwrap();
        let target = Force::new("t", "drive", DVec3::Y, 2.0).unwrap();
        let transition = ForceTransition::new("drive", origin, target, 1, 2).unwrap();
        body.start_transition(Channel::Velocity, transition);

        let config = SimConfig::default();
        // phase A ends at zero, so the output is pruned this tick
        body.update(&config);
        assert!(body.velocities().get("drive").is_none());
        assert_eq!(body.active_transitions(), 1);

        body.update(&config);
        assert_eq!(body.velocities().get("drive").unwrap().magnitude, 1.0);

        body.update(&config);
        let force = body.velocities().get("drive").unwrap();
        assert_eq!(force.magnitude, 2.0);
        assert_eq!(force.direction, DVec3::Y);
        assert_eq!(body.active_transitions(), 0);
    }

    #[test]
    fn in_sine_transition_drives_accumulator() {
        let mut body = PrimaryBody::new("p", DVec3::ZERO);
        let origin = Force::new("o", "drive", DVec3::X, 4.0).unwrap();
        let target = Force::new("t", "drive", DVec3::Y, 6.0).unwrap();
        let transition = ForceTransition::new("drive", origin, target, 2, 2)
            .unwrap()
            .with_easing(Easing::InSine);
        body.start_transition(Channel::Torque, transition);

        let config = SimConfig::default();
        // an exact zero at the A/B boundary is pruned, so read it as 0
        let magnitude = |body: &PrimaryBody| {
            body.torques().get("drive").map_or(0.0, |f| f.magnitude)
        };

        body.update(&config);
        assert!((magnitude(&body) - 4.0 * FRAC_PI_4.cos()).abs() < 1e-12);
        assert!(body.velocities().is_empty());

        body.update(&config);
        assert!(magnitude(&body).abs() < 1e-12);

        body.update(&config);
        assert!((magnitude(&body) - (6.0 - 6.0 * FRAC_PI_4.cos())).abs() < 1e-12);
        assert_eq!(body.torques().get("drive").unwrap().direction, DVec3::Y);

        body.update(&config);
        assert!((magnitude(&body) - 6.0).abs() < 1e-12);
        assert_eq!(body.active_transitions(), 0);
    }

    #[test]
    fn satellite_follows_owner_rotation() {
        let orbit = Orbit {
            omega: FRAC_PI_2,
            gamma: 0.0,
            distance: 2.0,
        };
        let mut sat = SatelliteBody::new(
            "p::east",
            PrimaryId::from_index(0),
            Charge::Positive,
            orbit,
            3.0,
        );
        let owner = Pose {
            position: DVec3::new(1.0, 0.0, 0.0),
            rotation: DQuat::from_rotation_z(FRAC_PI_2),
        };
        sat.update(&owner);

        assert!((sat.position() - DVec3::new(1.0, 2.0, 0.0)).length() < 1e-12);
        assert_eq!(sat.pose().rotation, owner.rotation);
        assert!(((sat.position() - owner.position).length() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn charge_sign() {
        assert_eq!(Charge::Positive.sign(), 1.0);
        assert_eq!(Charge::Negative.sign(), -1.0);
    }
}
