//! Serializable description of a scene to simulate
//!
//! ```json
//! {
//!   "ticks": 600,
//!   "config": { "pivot_policy": "break-on-separation" },
//!   "primaries": [
//!     { "name": "left",  "position": [-2, 0, 0], "satellites": { "east": "positive", "up": "negative" } },
//!     { "name": "right", "position": [ 2, 0, 0], "satellites": { "west": "negative", "up": "positive" },
//!       "forces": [ { "class": "constant", "direction": [-1, 0, 0], "magnitude": 0.05 } ] }
//!   ]
//! }
//! ```

use crate::body::{Channel, Charge};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::placement::{Slot, SlotCharges};
use serde::{Deserialize, Serialize};

fn default_ticks() -> u64 {
    600
}

fn default_force_class() -> String {
    "constant".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: SimConfig,
    #[serde(default = "default_ticks")]
    pub ticks: u64,
    pub primaries: Vec<PrimarySpec>,
}

/// One primary body and the slots it carries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimarySpec {
    #[serde(default)]
    pub name: String,
    pub position: [f64; 3],
    /// Empty means every slot, positively charged
    #[serde(default)]
    pub satellites: SlotCharges,
    #[serde(default)]
    pub forces: Vec<ForceSpec>,
}

/// A force present on a primary from the first tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForceSpec {
    #[serde(default)]
    pub id: String,
    #[serde(default = "default_force_class")]
    pub class: String,
    #[serde(default)]
    pub channel: Channel,
    pub direction: [f64; 3],
    pub magnitude: f64,
}

impl Scenario {
    pub fn from_json(source: &str) -> Result<Self, SimError> {
        let scenario: Scenario = serde_json::from_str(source)?;
        scenario.config.validate()?;
        Ok(scenario)
    }

    /// Two primaries facing each other on the X axis, each with an east/west
    /// satellite of opposite charge and an up satellite.
    pub fn two_body_demo() -> Self {
        Self {
            config: SimConfig::default(),
            ticks: default_ticks(),
            primaries: vec![
                PrimarySpec {
                    name: "left".to_string(),
                    position: [-2.0, 0.0, 0.0],
                    satellites: SlotCharges::from([
                        (Slot::East, Charge::Positive),
                        (Slot::Up, Charge::Negative),
                    ]),
                    forces: Vec::new(),
                },
                PrimarySpec {
                    name: "right".to_string(),
                    position: [2.0, 0.0, 0.0],
                    satellites: SlotCharges::from([
                        (Slot::West, Charge::Negative),
                        (Slot::Up, Charge::Positive),
                    ]),
                    forces: Vec::new(),
                },
            ],
        }
    }
}
