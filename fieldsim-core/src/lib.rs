pub mod accumulator;
pub mod body;
pub mod config;
pub mod engine;
pub mod error;
pub mod force;
pub mod math;
pub mod pivot;
pub mod placement;
pub mod runtime;
pub mod scenario;
pub mod transition;

pub use accumulator::ForceAccumulator;
pub use body::{
    Body, BodyHandle, Channel, Charge, Orbit, Pose, PrimaryBody, PrimaryId, SatelliteBody,
    SatelliteId,
};
pub use config::{DampingConfig, FieldPolarity, PivotPolicy, SimConfig};
pub use engine::World;
pub use error::SimError;
pub use force::Force;
pub use pivot::Pivot;
pub use placement::{place_primary, Slot, SlotCharges};
pub use runtime::{
    body_states, build_world, pivot_names, run_scenario, BodyKind, BodyState, SimulationResult,
};
pub use scenario::{ForceSpec, PrimarySpec, Scenario};
pub use transition::{Easing, ForceTransition, Phase};
