use crate::body::{Body, Channel};
use crate::engine::World;
use crate::error::SimError;
use crate::force::Force;
use crate::placement::place_primary;
use crate::scenario::Scenario;
use glam::{DQuat, DVec3};
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Primary,
    Satellite,
}

/// Pose of one body as the presentation layer reads it
#[derive(Debug, Clone)]
pub struct BodyState {
    pub id: String,
    pub kind: BodyKind,
    pub position: DVec3,
    pub rotation: DQuat,
}

/// Final state of a scenario run
#[derive(Debug)]
pub struct SimulationResult {
    pub ticks: u64,
    pub states: Vec<BodyState>,
    /// Ids of bonded satellite pairs
    pub pivots: Vec<(String, String)>,
}

/// Build a World from a scenario: primaries, their slot satellites and any
/// initial forces
pub fn build_world(scenario: &Scenario) -> Result<World, SimError> {
    let mut world = World::new(scenario.config.clone())?;

    for entry in &scenario.primaries {
        let position = DVec3::from_array(entry.position);
        let primary = place_primary(&mut world, &entry.name, position, &entry.satellites)?;
        let body = world
            .primary_mut(primary)
            .ok_or(SimError::UnknownPrimary(primary))?;

        for (n, force_spec) in entry.forces.iter().enumerate() {
            let id = if force_spec.id.is_empty() {
                format!("{}::force-{}", body.id(), n)
            } else {
                force_spec.id.clone()
            };
            let direction = DVec3::from_array(force_spec.direction).normalize_or_zero();
            let force = Force::new(id, force_spec.class.clone(), direction, force_spec.magnitude)?;
            match force_spec.channel {
                Channel::Velocity => body.velocities_mut().upsert(force),
                Channel::Torque => body.torques_mut().upsert(force),
            };
        }
    }

    Ok(world)
}

/// Current pose of every body, primaries first
pub fn body_states(world: &World) -> Vec<BodyState> {
    let primaries = world.primaries().map(|(_, p)| BodyState {
        id: p.id().to_string(),
        kind: BodyKind::Primary,
        position: p.position(),
        rotation: p.pose().rotation,
    });
    let satellites = world.satellites().map(|(_, s)| BodyState {
        id: s.id().to_string(),
        kind: BodyKind::Satellite,
        position: s.position(),
        rotation: s.pose().rotation,
    });
    primaries.chain(satellites).collect()
}

/// Bonded pairs by satellite id
pub fn pivot_names(world: &World) -> Vec<(String, String)> {
    world
        .pivots()
        .into_iter()
        .filter_map(|p| {
            let a = world.satellite(p.item_a)?;
            let b = world.satellite(p.item_b)?;
            Some((a.id().to_string(), b.id().to_string()))
        })
        .collect()
}

/// Build the scenario's world and run it for `scenario.ticks` ticks
pub fn run_scenario(scenario: &Scenario) -> Result<SimulationResult, SimError> {
    let mut world = build_world(scenario)?;
    for _ in 0..scenario.ticks {
        world.tick();
    }
    info!(
        "ran {} ticks, {} pivot(s) formed",
        world.tick_count(),
        world.pivots().len()
    );

    Ok(SimulationResult {
        ticks: world.tick_count(),
        states: body_states(&world),
        pivots: pivot_names(&world),
    })
}
