//! Static game data: the three read-only catalogs loaded once at startup
//!
//! Catalogs are keyed by string id and treated as immutable for the session.
//! `GameData::validate` enforces the cross-reference invariants before the
//! engine will run on them.

pub mod actions;
pub mod locations;
pub mod resources;

pub use actions::{ActionDef, LocationConstraint, ResultValue, TimeOfDay};
pub use locations::{LocationDef, LocationKind, SafetyTier};
pub use resources::{Rarity, ResourceCategory, ResourceDef};

use ahash::AHashMap;
use std::path::Path;

use crate::character::NeedType;
use crate::core::error::{GameError, Result};

const BUILTIN_ACTIONS: &str = include_str!("../../data/actions.json");
const BUILTIN_RESOURCES: &str = include_str!("../../data/resources.json");
const BUILTIN_LOCATIONS: &str = include_str!("../../data/locations.json");

/// The three catalogs bundled together
#[derive(Debug, Clone)]
pub struct GameData {
    actions: AHashMap<String, ActionDef>,
    resources: AHashMap<String, ResourceDef>,
    locations: AHashMap<String, LocationDef>,
}

impl GameData {
    /// Parse catalogs from JSON text and validate cross-references
    pub fn from_json(actions: &str, resources: &str, locations: &str) -> Result<Self> {
        let data = Self {
            actions: serde_json::from_str(actions)?,
            resources: serde_json::from_str(resources)?,
            locations: serde_json::from_str(locations)?,
        };
        data.validate()?;
        Ok(data)
    }

    /// Load `actions.json`, `resources.json`, `locations.json` from a directory
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let actions = std::fs::read_to_string(dir.join("actions.json"))?;
        let resources = std::fs::read_to_string(dir.join("resources.json"))?;
        let locations = std::fs::read_to_string(dir.join("locations.json"))?;
        Self::from_json(&actions, &resources, &locations)
    }

    /// The catalogs compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_ACTIONS, BUILTIN_RESOURCES, BUILTIN_LOCATIONS)
    }

    pub fn action(&self, id: &str) -> Option<&ActionDef> {
        self.actions.get(id)
    }

    pub fn resource(&self, id: &str) -> Option<&ResourceDef> {
        self.resources.get(id)
    }

    pub fn location(&self, id: &str) -> Option<&LocationDef> {
        self.locations.get(id)
    }

    pub fn location_ids(&self) -> impl Iterator<Item = &str> {
        self.locations.keys().map(String::as_str)
    }

    /// Check that every id referenced anywhere resolves to a known entry
    ///
    /// Result keys must name either a need or a resource; requirement and
    /// consumption keys must name resources; location action/connection
    /// lists must point at real catalog entries.
    fn validate(&self) -> Result<()> {
        for (id, action) in &self.actions {
            if action.time_cost < 0.0 || action.energy_cost < 0.0 {
                return Err(GameError::InvalidCatalog(format!(
                    "action '{id}' has a negative cost"
                )));
            }
            if let Some(rate) = action.success_rate {
                if !(0.0..=1.0).contains(&rate) {
                    return Err(GameError::InvalidCatalog(format!(
                        "action '{id}' successRate {rate} outside [0, 1]"
                    )));
                }
            }
            for key in action.requirements.keys().chain(action.consumed_resources.keys()) {
                if !self.resources.contains_key(key) {
                    return Err(GameError::InvalidCatalog(format!(
                        "action '{id}' references unknown resource '{key}'"
                    )));
                }
            }
            for (key, value) in &action.results {
                let is_need = NeedType::from_key(key).is_some();
                if !is_need && !self.resources.contains_key(key) {
                    return Err(GameError::InvalidCatalog(format!(
                        "action '{id}' result key '{key}' is neither a need nor a resource"
                    )));
                }
                if let ResultValue::Range { min, max } = value {
                    if min > max {
                        return Err(GameError::InvalidCatalog(format!(
                            "action '{id}' result '{key}' has min > max"
                        )));
                    }
                }
            }
            if let Some(constraint) = &action.location {
                for loc in constraint.ids() {
                    if !self.locations.contains_key(loc) {
                        return Err(GameError::InvalidCatalog(format!(
                            "action '{id}' references unknown location '{loc}'"
                        )));
                    }
                }
            }
        }

        for (id, location) in &self.locations {
            for action_id in &location.actions {
                if !self.actions.contains_key(action_id) {
                    return Err(GameError::InvalidCatalog(format!(
                        "location '{id}' lists unknown action '{action_id}'"
                    )));
                }
            }
            for connection in &location.connections {
                if !self.locations.contains_key(connection) {
                    return Err(GameError::InvalidCatalog(format!(
                        "location '{id}' connects to unknown location '{connection}'"
                    )));
                }
            }
        }

        Ok(())
    }
}
