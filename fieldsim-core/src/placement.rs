//! Placement of satellites on a fixed angular grid around a primary body
//!
//! The grid has 4 `gamma` rows (`j·π/4`) and 8 `omega` columns (`i·2π/8`).
//! Columns 0 and 4 of rows 1..3 repeat the poles of row 0 and are skipped,
//! leaving 26 named slots.

use crate::body::{Body, Charge, Orbit, PrimaryId};
use crate::engine::World;
use crate::error::SimError;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::f64::consts::PI;

/// Which slots to fill, and with which charge
pub type SlotCharges = BTreeMap<Slot, Charge>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Slot {
    South,
    SouthEast,
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    UpSouthEast,
    UpEast,
    UpNorthEast,
    DownNorthWest,
    DownWest,
    DownSouthWest,
    UpSouth,
    Up,
    UpNorth,
    DownNorth,
    Down,
    DownSouth,
    UpSouthWest,
    UpWest,
    UpNorthWest,
    DownNorthEast,
    DownEast,
    DownSouthEast,
}

impl Slot {
    /// All slots in grid order
    pub const ALL: [Slot; 26] = [
        Slot::South,
        Slot::SouthEast,
        Slot::East,
        Slot::NorthEast,
        Slot::North,
        Slot::NorthWest,
        Slot::West,
        Slot::SouthWest,
        Slot::UpSouthEast,
        Slot::UpEast,
        Slot::UpNorthEast,
        Slot::DownNorthWest,
        Slot::DownWest,
        Slot::DownSouthWest,
        Slot::UpSouth,
        Slot::Up,
        Slot::UpNorth,
        Slot::DownNorth,
        Slot::Down,
        Slot::DownSouth,
        Slot::UpSouthWest,
        Slot::UpWest,
        Slot::UpNorthWest,
        Slot::DownNorthEast,
        Slot::DownEast,
        Slot::DownSouthEast,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Slot::South => "south",
            Slot::SouthEast => "south-east",
            Slot::East => "east",
            Slot::NorthEast => "north-east",
            Slot::North => "north",
            Slot::NorthWest => "north-west",
            Slot::West => "west",
            Slot::SouthWest => "south-west",
            Slot::UpSouthEast => "up-south-east",
            Slot::UpEast => "up-east",
            Slot::UpNorthEast => "up-north-east",
            Slot::DownNorthWest => "down-north-west",
            Slot::DownWest => "down-west",
            Slot::DownSouthWest => "down-south-west",
            Slot::UpSouth => "up-south",
            Slot::Up => "up",
            Slot::UpNorth => "up-north",
            Slot::DownNorth => "down-north",
            Slot::Down => "down",
            Slot::DownSouth => "down-south",
            Slot::UpSouthWest => "up-south-west",
            Slot::UpWest => "up-west",
            Slot::UpNorthWest => "up-north-west",
            Slot::DownNorthEast => "down-north-east",
            Slot::DownEast => "down-east",
            Slot::DownSouthEast => "down-south-east",
        }
    }

    /// Grid cell `(row j, column i)` of this slot
    pub fn grid_cell(self) -> (u32, u32) {
        let index = self as usize;
        (0..4u32)
            .flat_map(|j| (0..8u32).map(move |i| (j, i)))
            .filter(|&(j, i)| j == 0 || (i != 0 && i != 4))
            .nth(index)
            .unwrap_or((0, 0))
    }

    /// `(omega, gamma)` angles of this slot
    pub fn angles(self) -> (f64, f64) {
        let (j, i) = self.grid_cell();
        (f64::from(i) * (2.0 * PI / 8.0), f64::from(j) * (PI / 4.0))
    }

    pub fn orbit(self, distance: f64) -> Orbit {
        let (omega, gamma) = self.angles();
        Orbit {
            omega,
            gamma,
            distance,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Register a primary at `position` with satellites on the listed slots.
///
/// An empty `charges` map fills every slot with a positive satellite.
/// Satellites are named `"{primary}::{slot}"`.
pub fn place_primary(
    world: &mut World,
    name: &str,
    position: DVec3,
    charges: &SlotCharges,
) -> Result<PrimaryId, SimError> {
    let primary = world.add_primary(name, position)?;
    let primary_name = world
        .primary(primary)
        .map(|p| p.id().to_string())
        .ok_or(SimError::UnknownPrimary(primary))?;
    let distance = world.config().satellite_distance;

    for slot in Slot::ALL {
        let charge = if charges.is_empty() {
            Charge::Positive
        } else {
            match charges.get(&slot) {
                Some(charge) => *charge,
                None => continue,
            }
        };
        world.add_satellite(
            format!("{}::{}", primary_name, slot),
            primary,
            charge,
            slot.orbit(distance),
        )?;
    }

    Ok(primary)
}
