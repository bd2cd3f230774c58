//! Location definitions: the nodes of the world graph

use serde::{Deserialize, Serialize};

use crate::catalog::actions::TimeOfDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Indoor,
    Outdoor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyTier {
    Safe,
    Moderate,
    Dangerous,
}

/// A catalog location with its locally available actions and exits
///
/// `connections` are directed edges; a reverse edge exists only where the
/// catalog authors one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Ordered list of action ids offered here
    #[serde(default)]
    pub actions: Vec<String>,
    /// Locations reachable in one hop
    #[serde(default)]
    pub connections: Vec<String>,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub safety: SafetyTier,
    /// Authored visiting-hours restriction (reserved, like action danger)
    #[serde(default)]
    pub time_of_day_restriction: Option<TimeOfDay>,
}

impl LocationDef {
    pub fn connects_to(&self, location_id: &str) -> bool {
        self.connections.iter().any(|id| id == location_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_location() {
        let json = r#"{
            "id": "forest_edge",
            "name": "Forest edge",
            "actions": ["collect_wood", "gather_berries"],
            "connections": ["front_yard"],
            "type": "outdoor",
            "safety": "dangerous",
            "timeOfDayRestriction": "day"
        }"#;
        let location: LocationDef = serde_json::from_str(json).unwrap();
        assert_eq!(location.kind, LocationKind::Outdoor);
        assert_eq!(location.safety, SafetyTier::Dangerous);
        assert!(location.connects_to("front_yard"));
        assert!(!location.connects_to("kitchen"));
    }
}
