use crate::body::{
    Body, BodyHandle, Charge, Orbit, PrimaryBody, PrimaryId, SatelliteBody, SatelliteId,
};
use crate::config::{FieldPolarity, PivotPolicy, SimConfig};
use crate::error::SimError;
use crate::force::{class, Force};
use crate::math::{angle_to, direction_between, triangle_normal};
use crate::pivot::Pivot;
use glam::DVec3;
use log::{debug, info, trace};

/// The simulation: arenas of primary and satellite bodies plus the per-tick
/// driver that integrates them and evaluates interactions and collisions.
#[derive(Debug)]
pub struct World {
    config: SimConfig,
    primaries: Vec<PrimaryBody>,
    satellites: Vec<SatelliteBody>,
    tick_count: u64,
}

impl Default for World {
    fn default() -> Self {
        Self {
            config: SimConfig::default(),
            primaries: Vec::new(),
            satellites: Vec::new(),
            tick_count: 0,
        }
    }
}

impl World {
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        info!(
            "world created (primary radius {}, satellite radius {}, pivot window {}..{})",
            config.primary_radius,
            config.satellite_radius,
            config.min_pivot_distance,
            config.max_pivot_distance
        );
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    fn id_taken(&self, id: &str) -> bool {
        self.primaries.iter().any(|p| p.id() == id)
            || self.satellites.iter().any(|s| s.id() == id)
    }

    /// Register a primary body. An empty id is replaced by a generated one.
    pub fn add_primary(
        &mut self,
        id: impl Into<String>,
        position: DVec3,
    ) -> Result<PrimaryId, SimError> {
        let mut id = id.into();
        if id.is_empty() {
            id = format!("primary-{}", self.primaries.len());
        }
        if self.id_taken(&id) {
            return Err(SimError::DuplicateBody(id));
        }
        if !position.is_finite() {
            return Err(SimError::config(format!(
                "primary '{}' has a non-finite position",
                id
            )));
        }

        debug!("registered primary '{}' at {:?}", id, position);
        let handle = PrimaryId::from_index(self.primaries.len());
        self.primaries.push(PrimaryBody::new(id, position));
        Ok(handle)
    }

    /// Register a satellite of `owner`, anchored immediately to the owner's pose.
    /// An empty id is derived from the owner's.
    pub fn add_satellite(
        &mut self,
        id: impl Into<String>,
        owner: PrimaryId,
        charge: Charge,
        orbit: Orbit,
    ) -> Result<SatelliteId, SimError> {
        let mut id = id.into();
        let owner_body = self
            .primaries
            .get(owner.index())
            .ok_or(SimError::UnknownPrimary(owner))?;
        let owner_pose = *owner_body.pose();
        if id.is_empty() {
            id = format!("{}::satellite-{}", owner_body.id(), self.satellites.len());
        }
        if self.id_taken(&id) {
            return Err(SimError::DuplicateBody(id));
        }
        if !(orbit.omega.is_finite() && orbit.gamma.is_finite() && orbit.distance.is_finite()) {
            return Err(SimError::config(format!(
                "satellite '{}' has a non-finite orbit",
                id
            )));
        }

        debug!(
            "registered satellite '{}' ({:?}) omega={:.4} gamma={:.4} r={}",
            id, charge, orbit.omega, orbit.gamma, orbit.distance
        );
        let handle = SatelliteId::from_index(self.satellites.len());
        let mut satellite =
            SatelliteBody::new(id, owner, charge, orbit, self.config.satellite_field_radius);
        satellite.update(&owner_pose);
        self.satellites.push(satellite);
        Ok(handle)
    }

    /// Include or exclude a body from the interaction and collision passes
    pub fn set_interactive(&mut self, handle: BodyHandle, interactive: bool) -> Result<(), SimError> {
        match handle {
            BodyHandle::Primary(id) => self
                .primaries
                .get_mut(id.index())
                .ok_or(SimError::UnknownPrimary(id))?
                .set_interactive(interactive),
            BodyHandle::Satellite(id) => self
                .satellites
                .get_mut(id.index())
                .ok_or(SimError::UnknownSatellite(id))?
                .set_interactive(interactive),
        }
        Ok(())
    }

    pub fn primary(&self, id: PrimaryId) -> Option<&PrimaryBody> {
        self.primaries.get(id.index())
    }

    pub fn primary_mut(&mut self, id: PrimaryId) -> Option<&mut PrimaryBody> {
        self.primaries.get_mut(id.index())
    }

    pub fn satellite(&self, id: SatelliteId) -> Option<&SatelliteBody> {
        self.satellites.get(id.index())
    }

    pub fn primaries(&self) -> impl Iterator<Item = (PrimaryId, &PrimaryBody)> {
        self.primaries
            .iter()
            .enumerate()
            .map(|(i, p)| (PrimaryId::from_index(i), p))
    }

    pub fn satellites(&self) -> impl Iterator<Item = (SatelliteId, &SatelliteBody)> {
        self.satellites
            .iter()
            .enumerate()
            .map(|(i, s)| (SatelliteId::from_index(i), s))
    }

    pub fn find_primary(&self, id: &str) -> Option<PrimaryId> {
        self.primaries
            .iter()
            .position(|p| p.id() == id)
            .map(PrimaryId::from_index)
    }

    pub fn find_satellite(&self, id: &str) -> Option<SatelliteId> {
        self.satellites
            .iter()
            .position(|s| s.id() == id)
            .map(SatelliteId::from_index)
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&dyn Body> {
        match handle {
            BodyHandle::Primary(id) => self.primary(id).map(|p| p as &dyn Body),
            BodyHandle::Satellite(id) => self.satellite(id).map(|s| s as &dyn Body),
        }
    }

    /// Every live pivot, once per bonded pair
    pub fn pivots(&self) -> Vec<Pivot> {
        self.satellites()
            .filter_map(|(id, s)| s.pivot.filter(|p| p.item_a == id))
            .collect()
    }

    /// Advance the simulation by one tick.
    ///
    /// Integration always precedes the interaction pass, which precedes the
    /// satellite-primary and then the primary-primary collision pass.
    pub fn tick(&mut self) {
        self.tick_count += 1;
        trace!("tick {}", self.tick_count);

        let config = &self.config;
        for primary in self.primaries.iter_mut() {
            primary.update(config);
        }
        self.anchor_satellites();

        let satellites: Vec<BodyHandle> = (0..self.satellites.len())
            .map(|i| BodyHandle::Satellite(SatelliteId::from_index(i)))
            .collect();
        let primaries: Vec<BodyHandle> = (0..self.primaries.len())
            .map(|i| BodyHandle::Primary(PrimaryId::from_index(i)))
            .collect();

        self.traverse_interactions(&satellites);
        self.traverse_collisions(
            &satellites,
            &primaries,
            self.config.satellite_radius + self.config.primary_radius,
        );
        self.traverse_collisions(&primaries, &primaries, self.config.primary_radius * 2.0);

        // rollbacks above may have moved owners
        self.anchor_satellites();
    }

    fn anchor_satellites(&mut self) {
        for satellite in self.satellites.iter_mut() {
            if let Some(owner) = self.primaries.get(satellite.owner().index()) {
                satellite.update(owner.pose());
            }
        }
    }

    fn is_body(&self, handle: BodyHandle) -> bool {
        self.body(handle).map_or(false, |b| b.is_body())
    }

    fn distance(&self, a: BodyHandle, b: BodyHandle) -> Option<f64> {
        let a = self.body(a)?.position();
        let b = self.body(b)?.position();
        Some(a.distance(b))
    }

    /// Distances are measured live, so a rollback made for one pair is seen
    /// by the pairs evaluated after it.
    fn traverse_collisions(&mut self, list_a: &[BodyHandle], list_b: &[BodyHandle], threshold: f64) {
        for &item in list_a {
            if !self.is_body(item) {
                continue;
            }
            for &other in list_b {
                if other == item || !self.is_body(other) {
                    continue;
                }
                if let Some(distance) = self.distance(item, other) {
                    if distance < threshold {
                        self.on_collision(item, other);
                    }
                }
            }
        }
    }

    fn traverse_interactions(&mut self, list: &[BodyHandle]) {
        for &item in list {
            if !self.is_body(item) {
                continue;
            }
            for &other in list {
                if other == item || !self.is_body(other) {
                    continue;
                }
                let Some(distance) = self.distance(item, other) else {
                    continue;
                };
                let field_radius = self.body(other).map_or(0.0, |b| b.field_radius());
                if distance < field_radius {
                    self.on_interaction(item, other, distance);
                }
            }
        }
    }

    /// Handlers live on `World` rather than on `Body` because they mutate
    /// both sides of the pair. Pairs without a handler, such as a primary
    /// striking a satellite, fall through to the no-op arm.
    fn on_collision(&mut self, this: BodyHandle, other: BodyHandle) {
        match (this, other) {
            (BodyHandle::Primary(a), BodyHandle::Primary(b)) => self.primary_collision(a, b),
            (BodyHandle::Satellite(s), BodyHandle::Primary(p)) => self.satellite_collision(s, p),
            _ => {}
        }
    }

    /// Only satellite pairs interact; every other pair is a no-op.
    fn on_interaction(&mut self, this: BodyHandle, other: BodyHandle, distance: f64) {
        if let (BodyHandle::Satellite(a), BodyHandle::Satellite(b)) = (this, other) {
            self.satellite_interaction(a, b, distance);
        }
    }

    /// Cancel this tick's translation of both bodies and push `this` away from `other`
    fn primary_collision(&mut self, this: PrimaryId, other: PrimaryId) {
        if this == other {
            return;
        }
        let (Some(a), Some(b)) = (self.primary(this), self.primary(other)) else {
            return;
        };
        let (prev_a, prev_b) = (*a.previous(), *b.previous());
        let id = format!("primary-collision={}<=>{}", a.id(), b.id());
        debug!("collision between primaries '{}' and '{}'", a.id(), b.id());

        let magnitude = -self.config.primary_collision_magnitude;
        if let Some(b) = self.primary_mut(other) {
            b.restore_position(prev_b);
        }
        let Some(a) = self.primary_mut(this) else {
            return;
        };
        a.restore_position(prev_a);

        let direction = direction_between(prev_a.position, prev_b.position);
        let force = Force::from_parts(id, class::PRIMARY_COLLISION, direction, magnitude);
        a.velocities_mut().upsert(force);
    }

    /// Undo the just-integrated movement of the satellite's owner and of the
    /// struck primary, then bounce the owner back with a velocity and torque impulse.
    fn satellite_collision(&mut self, satellite: SatelliteId, other: PrimaryId) {
        let Some(sat) = self.satellite(satellite) else {
            return;
        };
        let owner = sat.owner();
        if owner == other {
            return;
        }
        let sat_position = sat.position();
        let arm = sat.orbit().distance;
        let sat_name = sat.id().to_string();

        let Some(other_body) = self.primary_mut(other) else {
            return;
        };
        let latest = *other_body.latest();
        other_body.restore_pose(latest);
        let other_position = other_body.position();
        let other_name = other_body.id().to_string();

        let magnitude = self.config.satellite_collision_magnitude;
        let Some(owner_body) = self.primary_mut(owner) else {
            return;
        };
        let latest = *owner_body.latest();
        owner_body.restore_pose(latest);
        let owner_position = owner_body.position();

        debug!(
            "satellite '{}' collided with primary '{}'",
            sat_name, other_name
        );

        let speed_direction = direction_between(other_position, sat_position);
        let speed = Force::from_parts(
            format!("satellite-primary-collision={}<=>{}", sat_name, other_name),
            class::SATELLITE_COLLISION,
            speed_direction,
            magnitude,
        );

        let arm_direction = direction_between(owner_position, sat_position);
        let torque = Force::from_parts(
            format!("satellite-primary-collision-torque={}<=>{}", sat_name, other_name),
            class::SATELLITE_COLLISION_TORQUE,
            triangle_normal(sat_position, owner_position, other_position),
            arm * magnitude * angle_to(speed_direction, arm_direction).sin(),
        );

        owner_body.velocities_mut().upsert(speed);
        owner_body.torques_mut().upsert(torque);
    }

    /// Field interaction of `this` with `other`, forming and holding pivots
    /// between satellites of different owners.
    fn satellite_interaction(&mut self, this: SatelliteId, other: SatelliteId, distance: f64) {
        let (Some(a), Some(b)) = (self.satellite(this), self.satellite(other)) else {
            return;
        };
        let pivoted = a.pivot.map_or(false, |p| p.binds(this, other));
        if !pivoted && (a.pivot.is_some() || b.pivot.is_some()) {
            return;
        }
        if a.owner() == b.owner() {
            return;
        }

        let owner = a.owner();
        let other_owner = b.owner();
        let a_position = a.position();
        let b_position = b.position();
        let arm = a.orbit().distance;
        let charges = (a.charge(), b.charge());
        let other_field_radius = b.field_radius();
        let speed_id = format!("satellite-satellite-speed={}<=>{}", a.id(), b.id());
        let torque_id = format!("satellite-satellite-torque={}<=>{}", a.id(), b.id());

        if !pivoted && distance <= self.config.min_pivot_distance {
            let other_speed_id = format!("satellite-satellite-speed={}<=>{}", b.id(), a.id());
            let other_torque_id = format!("satellite-satellite-torque={}<=>{}", b.id(), a.id());
            debug!(
                "pivot formed between '{}' and '{}' at distance {:.5}",
                a.id(),
                b.id(),
                distance
            );

            let pivot = Pivot::new(this, other);
            self.satellites[this.index()].pivot = Some(pivot);
            self.satellites[other.index()].pivot = Some(pivot);

            if let Some(p) = self.primary_mut(owner) {
                p.velocities_mut().remove(&speed_id);
                p.torques_mut().remove(&torque_id);
            }
            if let Some(p) = self.primary_mut(other_owner) {
                p.velocities_mut().remove(&other_speed_id);
                p.torques_mut().remove(&other_torque_id);
            }
            return;
        }

        if pivoted {
            if distance <= self.config.max_pivot_distance {
                return;
            }
            // separating: step the owner back to where it started this tick
            if let Some(p) = self.primary_mut(owner) {
                let previous = *p.previous();
                p.restore_pose(previous);
            }
            if self.config.pivot_policy == PivotPolicy::BreakOnSeparation {
                debug!("pivot {:?} <=> {:?} broken at distance {:.5}", this, other, distance);
                self.satellites[this.index()].pivot = None;
                self.satellites[other.index()].pivot = None;
            }
        }

        let max_energy = self.config.max_field_energy;
        let mut magnitude = max_energy - (max_energy / other_field_radius) * distance;
        if self.config.field_polarity == FieldPolarity::Signed {
            magnitude *= -(charges.0.sign() * charges.1.sign());
        }
        let direction = direction_between(a_position, b_position);

        let Some(owner_body) = self.primary_mut(owner) else {
            return;
        };
        let owner_position = owner_body.position();
        let arm_direction = direction_between(owner_position, a_position);

        let speed = Force::from_parts(speed_id, class::INTERACTION_SPEED, direction, magnitude);
        let torque = Force::from_parts(
            torque_id,
            class::INTERACTION_TORQUE,
            triangle_normal(a_position, owner_position, b_position),
            -(arm * magnitude * angle_to(direction, arm_direction).sin()),
        );

        owner_body.velocities_mut().upsert(speed);
        owner_body.torques_mut().upsert(torque);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DQuat;
    use std::f64::consts::FRAC_PI_2;

    const EAST: Orbit = Orbit {
        omega: FRAC_PI_2,
        gamma: 0.0,
        distance: 1.0,
    };

    #[test]
    fn duplicate_ids_rejected() {
        let mut world = World::default();
        let a = world.add_primary("a", DVec3::ZERO).unwrap();
        assert!(matches!(
            world.add_primary("a", DVec3::X),
            Err(SimError::DuplicateBody(_))
        ));
        assert!(matches!(
            world.add_satellite("a", a, Charge::Positive, EAST),
            Err(SimError::DuplicateBody(_))
        ));
    }

    #[test]
    fn empty_primary_id_is_generated() {
        let mut world = World::default();
        let id = world.add_primary("", DVec3::ZERO).unwrap();
        assert_eq!(world.primary(id).unwrap().id(), "primary-0");
    }

    #[test]
    fn unknown_owner_rejected() {
        let mut world = World::default();
        let ghost = PrimaryId::from_index(3);
        assert!(matches!(
            world.add_satellite("s", ghost, Charge::Positive, EAST),
            Err(SimError::UnknownPrimary(_))
        ));
    }

    #[test]
    fn satellite_anchored_on_registration() {
        let mut world = World::default();
        let p = world.add_primary("p", DVec3::new(0.0, 2.0, 0.0)).unwrap();
        let s = world.add_satellite("p::east", p, Charge::Positive, EAST).unwrap();
        let pos = world.satellite(s).unwrap().position();
        assert!((pos - DVec3::new(1.0, 2.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn primary_collision_rolls_back_and_repels() {
        let mut world = World::default();
        let a = world.add_primary("a", DVec3::ZERO).unwrap();
        let b = world.add_primary("b", DVec3::new(1.05, 0.0, 0.0)).unwrap();
        world
            .primary_mut(a)
            .unwrap()
            .velocities_mut()
            .upsert(Force::new("push", "constant", DVec3::X, 0.5).unwrap());

        world.tick();

        let pa = world.primary(a).unwrap();
        let pb = world.primary(b).unwrap();
        assert_eq!(pa.position(), DVec3::ZERO);
        assert_eq!(pb.position(), DVec3::new(1.05, 0.0, 0.0));

        let bounce = pa.velocities().get("primary-collision=a<=>b").unwrap();
        assert_eq!(bounce.class, class::PRIMARY_COLLISION);
        assert_eq!(bounce.magnitude, -0.1);
        assert!((bounce.direction - DVec3::X).length() < 1e-12);
        // after rollback the pair is apart again, so b sees no collision
        assert!(pb.velocities().is_empty());
    }

    #[test]
    fn satellite_collision_adds_impulse_to_owner() {
        let mut world = World::default();
        let a = world.add_primary("a", DVec3::ZERO).unwrap();
        world.add_satellite("a::east", a, Charge::Positive, EAST).unwrap();
        let b = world.add_primary("b", DVec3::new(1.2, 0.4, 0.0)).unwrap();

        world.tick();

        let owner = world.primary(a).unwrap();
        let speed = owner
            .velocities()
            .get("satellite-primary-collision=a::east<=>b")
            .unwrap();
        assert_eq!(speed.class, class::SATELLITE_COLLISION);
        assert_eq!(speed.magnitude, 0.05);
        let expected = DVec3::new(-0.2, -0.4, 0.0).normalize();
        assert!((speed.direction - expected).length() < 1e-9);

        let torque = owner
            .torques()
            .get("satellite-primary-collision-torque=a::east<=>b")
            .unwrap();
        assert_eq!(torque.class, class::SATELLITE_COLLISION_TORQUE);
        assert!((torque.magnitude - 0.05 * 0.4 / 0.2f64.sqrt()).abs() < 1e-9);
        assert!((torque.direction - DVec3::NEG_Z).length() < 1e-9);

        // the struck primary only gets its pose restored
        assert!(world.primary(b).unwrap().velocities().is_empty());
    }

    #[test]
    fn satellites_of_same_owner_do_not_interact() {
        let mut world = World::default();
        let a = world.add_primary("a", DVec3::ZERO).unwrap();
        world.add_satellite("a::east", a, Charge::Positive, EAST).unwrap();
        let west = Orbit {
            omega: 3.0 * FRAC_PI_2,
            ..EAST
        };
        world.add_satellite("a::west", a, Charge::Negative, west).unwrap();

        world.tick();

        let p = world.primary(a).unwrap();
        assert!(p.velocities().is_empty());
        assert!(p.torques().is_empty());
        assert!(world.pivots().is_empty());
    }

    #[test]
    fn non_interactive_bodies_are_skipped() {
        let mut world = World::default();
        let a = world.add_primary("a", DVec3::ZERO).unwrap();
        let b = world.add_primary("b", DVec3::new(0.5, 0.0, 0.0)).unwrap();
        world.set_interactive(BodyHandle::Primary(b), false).unwrap();

        world.tick();

        assert!(world.primary(a).unwrap().velocities().is_empty());
        assert!(!world.body(BodyHandle::Primary(b)).unwrap().is_body());
    }

    #[test]
    fn field_force_ramps_down_with_distance() {
        let mut world = World::default();
        let a = world.add_primary("a", DVec3::new(-2.0, 0.0, 0.0)).unwrap();
        let b = world.add_primary("b", DVec3::new(2.0, 0.0, 0.0)).unwrap();
        world.add_satellite("a::east", a, Charge::Positive, EAST).unwrap();
        let west = Orbit {
            omega: 3.0 * FRAC_PI_2,
            ..EAST
        };
        world.add_satellite("b::west", b, Charge::Negative, west).unwrap();

        world.tick();

        let speed = world
            .primary(a)
            .unwrap()
            .velocities()
            .get("satellite-satellite-speed=a::east<=>b::west")
            .cloned()
            .unwrap();
        assert_eq!(speed.class, class::INTERACTION_SPEED);
        assert!((speed.magnitude - (0.01 - 0.01 / 3.0 * 2.0)).abs() < 1e-12);
        assert!((speed.direction - DVec3::X).length() < 1e-9);

        let mirrored = world
            .primary(b)
            .unwrap()
            .velocities()
            .get("satellite-satellite-speed=b::west<=>a::east")
            .cloned()
            .unwrap();
        assert!((mirrored.direction + DVec3::X).length() < 1e-9);
    }

    #[test]
    fn off_axis_interaction_produces_counter_torque() {
        let mut world = World::default();
        let a = world.add_primary("a", DVec3::new(-2.0, 0.0, 0.0)).unwrap();
        let b = world.add_primary("b", DVec3::new(1.5, 1.0, 0.0)).unwrap();
        let up = Orbit {
            omega: FRAC_PI_2,
            gamma: FRAC_PI_2,
            ..EAST
        };
        world.add_satellite("a::up", a, Charge::Positive, up).unwrap();
        let west = Orbit {
            omega: 3.0 * FRAC_PI_2,
            ..EAST
        };
        world.add_satellite("b::west", b, Charge::Negative, west).unwrap();

        world.tick();

        // a::up at (-2, 1, 0) sees b::west at (0.5, 1, 0): 2.5 away, square to the arm
        let magnitude = 0.01 - 0.01 / 3.0 * 2.5;
        let owner = world.primary(a).unwrap();
        let torque = owner
            .torques()
            .get("satellite-satellite-torque=a::up<=>b::west")
            .unwrap();
        assert_eq!(torque.class, class::INTERACTION_TORQUE);
        assert!((torque.magnitude + magnitude).abs() < 1e-9);
        assert!((torque.direction - DVec3::Z).length() < 1e-9);

        let speed = owner
            .velocities()
            .get("satellite-satellite-speed=a::up<=>b::west")
            .unwrap();
        assert!((speed.magnitude - magnitude).abs() < 1e-9);
        assert!((speed.direction - DVec3::X).length() < 1e-9);
    }

    #[test]
    fn satellites_follow_a_rotated_owner() {
        let mut world = World::default();
        let a = world.add_primary("a", DVec3::ZERO).unwrap();
        let s = world.add_satellite("a::east", a, Charge::Positive, EAST).unwrap();

        world
            .primary_mut(a)
            .unwrap()
            .set_rotation(DQuat::from_rotation_z(FRAC_PI_2));
        world.tick();

        let satellite = world.satellite(s).unwrap();
        assert!((satellite.position() - DVec3::Y).length() < 1e-12);
        assert_eq!(satellite.pose().rotation, world.primary(a).unwrap().rotation());
    }

    #[test]
    fn signed_polarity_repels_like_charges() {
        let config = SimConfig {
            field_polarity: FieldPolarity::Signed,
            ..SimConfig::default()
        };
        let mut world = World::new(config).unwrap();
        let a = world.add_primary("a", DVec3::new(-2.0, 0.0, 0.0)).unwrap();
        let b = world.add_primary("b", DVec3::new(2.0, 0.0, 0.0)).unwrap();
        world.add_satellite("a::east", a, Charge::Positive, EAST).unwrap();
        let west = Orbit {
            omega: 3.0 * FRAC_PI_2,
            ..EAST
        };
        world.add_satellite("b::west", b, Charge::Positive, west).unwrap();

        world.tick();

        let speed = world
            .primary(a)
            .unwrap()
            .velocities()
            .get("satellite-satellite-speed=a::east<=>b::west")
            .cloned()
            .unwrap();
        assert!(speed.magnitude < 0.0);
    }

    #[test]
    fn invalid_config_rejected() {
        let config = SimConfig {
            satellite_radius: -1.0,
            ..SimConfig::default()
        };
        assert!(World::new(config).is_err());
    }
}
