//! World map state: where the character is and what they have discovered
//!
//! The location graph itself lives in the catalog; this module tracks the
//! dynamic side — current position, the discovered set, and per-location
//! condition/visit stamps. Movement is one hop along authored connections,
//! never pathfinding.

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::catalog::{GameData, LocationDef};
use crate::core::error::{GameError, Result};
use crate::core::now_secs;

/// Physical upkeep of a location (everything starts run-down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationCondition {
    Good,
    Worn,
    Poor,
}

/// Dynamic per-location state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationState {
    pub condition: LocationCondition,
    pub discovered: bool,
    pub last_visited: Option<u64>,
}

impl LocationState {
    fn undiscovered() -> Self {
        Self {
            condition: LocationCondition::Poor,
            discovered: false,
            last_visited: None,
        }
    }
}

/// Snapshot wire shape for the world aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldState {
    pub current_location: String,
    pub discovered_locations: Vec<String>,
    pub location_states: AHashMap<String, LocationState>,
}

/// A discovered exit, paired with display data for the host
#[derive(Debug, Clone, Serialize)]
pub struct Connection {
    pub id: String,
    pub name: String,
    pub state: LocationState,
}

#[derive(Debug, Clone)]
pub struct WorldMap {
    current: String,
    discovered: AHashSet<String>,
    states: AHashMap<String, LocationState>,
}

impl WorldMap {
    /// Build fresh world state over a catalog, starting at `start_location`
    pub fn new(data: &GameData, start_location: &str) -> Result<Self> {
        if data.location(start_location).is_none() {
            return Err(GameError::UnknownLocation(start_location.to_string()));
        }

        let mut world = Self {
            current: start_location.to_string(),
            discovered: AHashSet::new(),
            states: data
                .location_ids()
                .map(|id| (id.to_string(), LocationState::undiscovered()))
                .collect(),
        };
        world.discover(start_location);
        world.stamp_visit(start_location);
        Ok(world)
    }

    pub fn current_id(&self) -> &str {
        &self.current
    }

    pub fn current_def<'a>(&self, data: &'a GameData) -> Option<&'a LocationDef> {
        data.location(&self.current)
    }

    /// Move the character, discovering the destination and stamping the visit
    pub fn set_current(&mut self, data: &GameData, location_id: &str) -> Result<()> {
        if data.location(location_id).is_none() {
            tracing::warn!(location_id, "refusing to move to unknown location");
            return Err(GameError::UnknownLocation(location_id.to_string()));
        }
        self.current = location_id.to_string();
        self.discover(location_id);
        self.stamp_visit(location_id);
        Ok(())
    }

    /// One-hop reachability from the current location
    pub fn can_move_to(&self, data: &GameData, location_id: &str) -> bool {
        if data.location(location_id).is_none() {
            return false;
        }
        self.current_def(data)
            .is_some_and(|def| def.connects_to(location_id))
    }

    /// First-time discovery returns true; repeats are no-ops
    pub fn discover(&mut self, location_id: &str) -> bool {
        let state = self
            .states
            .entry(location_id.to_string())
            .or_insert_with(LocationState::undiscovered);
        if state.discovered {
            return false;
        }
        state.discovered = true;
        self.discovered.insert(location_id.to_string());
        true
    }

    pub fn is_discovered(&self, location_id: &str) -> bool {
        self.discovered.contains(location_id)
    }

    pub fn state_of(&self, location_id: &str) -> Option<&LocationState> {
        self.states.get(location_id)
    }

    /// Exits from the current location that the player has already seen
    ///
    /// A structurally connected but undiscovered location is not offered.
    pub fn available_connections(&self, data: &GameData) -> Vec<Connection> {
        let Some(def) = self.current_def(data) else {
            return Vec::new();
        };
        def.connections
            .iter()
            .filter(|id| self.discovered.contains(*id))
            .filter_map(|id| {
                let name = data.location(id)?.name.clone();
                let state = self.states.get(id)?.clone();
                Some(Connection {
                    id: id.clone(),
                    name,
                    state,
                })
            })
            .collect()
    }

    fn stamp_visit(&mut self, location_id: &str) {
        if let Some(state) = self.states.get_mut(location_id) {
            state.last_visited = Some(now_secs());
        }
    }

    pub fn state(&self) -> WorldState {
        WorldState {
            current_location: self.current.clone(),
            discovered_locations: {
                let mut ids: Vec<String> = self.discovered.iter().cloned().collect();
                ids.sort();
                ids
            },
            location_states: self.states.clone(),
        }
    }

    pub fn restore(&mut self, data: &GameData, state: &WorldState) {
        if data.location(&state.current_location).is_some() {
            self.current = state.current_location.clone();
        }
        self.discovered = state.discovered_locations.iter().cloned().collect();
        for (id, location_state) in &state.location_states {
            self.states.insert(id.clone(), location_state.clone());
        }
        // Keep the two discovery views consistent
        for id in &self.discovered {
            if let Some(entry) = self.states.get_mut(id) {
                entry.discovered = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> (GameData, WorldMap) {
        let data = GameData::builtin().unwrap();
        let world = WorldMap::new(&data, "main_room").unwrap();
        (data, world)
    }

    #[test]
    fn starts_with_only_start_discovered() {
        let (_, world) = world();
        assert_eq!(world.current_id(), "main_room");
        assert!(world.is_discovered("main_room"));
        assert!(!world.is_discovered("front_yard"));
        assert!(world.state_of("main_room").unwrap().last_visited.is_some());
        assert!(world.state_of("kitchen").unwrap().last_visited.is_none());
    }

    #[test]
    fn movement_is_one_hop_only() {
        let (data, world) = world();
        assert!(world.can_move_to(&data, "front_yard"));
        assert!(world.can_move_to(&data, "kitchen"));
        // back_yard is reachable transitively but not adjacent to main_room
        assert!(!world.can_move_to(&data, "back_yard"));
        assert!(!world.can_move_to(&data, "forest_edge"));
        assert!(!world.can_move_to(&data, "atlantis"));
    }

    #[test]
    fn moving_discovers_and_stamps() {
        let (data, mut world) = world();
        world.set_current(&data, "front_yard").unwrap();
        assert_eq!(world.current_id(), "front_yard");
        assert!(world.is_discovered("front_yard"));
        assert!(world.state_of("front_yard").unwrap().last_visited.is_some());
    }

    #[test]
    fn unknown_location_is_an_error() {
        let (data, mut world) = world();
        assert!(matches!(
            world.set_current(&data, "atlantis"),
            Err(GameError::UnknownLocation(_))
        ));
        assert_eq!(world.current_id(), "main_room");
    }

    #[test]
    fn discover_is_idempotent() {
        let (_, mut world) = world();
        assert!(world.discover("kitchen"));
        assert!(!world.discover("kitchen"));
    }

    #[test]
    fn undiscovered_connections_are_hidden() {
        let (data, mut world) = world();
        // main_room connects to front_yard and kitchen, neither seen yet
        assert!(world.available_connections(&data).is_empty());

        world.discover("kitchen");
        let connections = world.available_connections(&data);
        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].id, "kitchen");
        assert_eq!(connections[0].name, "Kitchen");
    }

    #[test]
    fn restore_round_trip() {
        let (data, mut world) = world();
        world.set_current(&data, "front_yard").unwrap();
        world.set_current(&data, "back_yard").unwrap();
        let saved = world.state();

        let mut restored = WorldMap::new(&data, "main_room").unwrap();
        restored.restore(&data, &saved);
        assert_eq!(restored.current_id(), "back_yard");
        assert!(restored.is_discovered("front_yard"));
        assert!(!restored.is_discovered("forest_edge"));
    }
}
