//! Action definitions: what the player can do, at what cost, with what result

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Day/night gate on an action or location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Day,
    Night,
}

/// Where an action may be performed, as authored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationConstraint {
    One(String),
    Many(Vec<String>),
}

impl LocationConstraint {
    pub fn allows(&self, location_id: &str) -> bool {
        match self {
            LocationConstraint::One(id) => id == location_id,
            LocationConstraint::Many(ids) => ids.iter().any(|id| id == location_id),
        }
    }

    pub fn ids(&self) -> Vec<&str> {
        match self {
            LocationConstraint::One(id) => vec![id.as_str()],
            LocationConstraint::Many(ids) => ids.iter().map(String::as_str).collect(),
        }
    }
}

/// One entry of an action's `results` map
///
/// Need keys carry a signed delta; resource keys carry either a literal
/// amount or an inclusive integer range rolled at execution time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    Range { min: u32, max: u32 },
    Amount(f32),
}

/// A catalog action: costs, preconditions, and outcomes
///
/// `success_rate`, `one_time`, and `danger_chance` are authored data the
/// execution path does not consult; they are carried for catalog fidelity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// In-game hours consumed by the action
    #[serde(default)]
    pub time_cost: f32,
    /// Energy deducted on execution; also a precondition (must be affordable)
    #[serde(default)]
    pub energy_cost: f32,
    /// Resources that must be held, and are consumed, on execution
    #[serde(default)]
    pub requirements: BTreeMap<String, u32>,
    /// Need deltas and resource yields
    #[serde(default)]
    pub results: BTreeMap<String, ResultValue>,
    /// Additional resources consumed on execution
    #[serde(default)]
    pub consumed_resources: BTreeMap<String, u32>,
    /// Eligible locations; `None` plus `any_location` = performable anywhere
    #[serde(default)]
    pub location: Option<LocationConstraint>,
    /// Bypasses the location constraint entirely
    #[serde(default)]
    pub any_location: bool,
    #[serde(default)]
    pub time_of_day: Option<TimeOfDay>,
    #[serde(default)]
    pub success_rate: Option<f32>,
    #[serde(default)]
    pub one_time: bool,
    #[serde(default)]
    pub danger_chance: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_action() {
        let json = r#"{
            "id": "collect_wood",
            "name": "Collect firewood",
            "description": "Pick up fallen branches",
            "timeCost": 2,
            "energyCost": 10,
            "location": ["front_yard", "forest_edge"],
            "timeOfDay": "day",
            "results": { "wood": { "min": 1, "max": 3 } },
            "successRate": 0.8
        }"#;
        let action: ActionDef = serde_json::from_str(json).unwrap();
        assert_eq!(action.time_cost, 2.0);
        assert_eq!(action.time_of_day, Some(TimeOfDay::Day));
        assert_eq!(
            action.results.get("wood"),
            Some(&ResultValue::Range { min: 1, max: 3 })
        );
        assert!(action
            .location
            .as_ref()
            .is_some_and(|loc| loc.allows("forest_edge")));
        assert!(!action.one_time);
    }

    #[test]
    fn parses_need_delta_result() {
        let json = r#"{
            "id": "rest",
            "name": "Rest",
            "timeCost": 2,
            "results": { "energy": 20 },
            "anyLocation": true
        }"#;
        let action: ActionDef = serde_json::from_str(json).unwrap();
        assert!(action.any_location);
        assert_eq!(action.results.get("energy"), Some(&ResultValue::Amount(20.0)));
    }

    #[test]
    fn single_location_constraint() {
        let constraint: LocationConstraint = serde_json::from_str("\"kitchen\"").unwrap();
        assert!(constraint.allows("kitchen"));
        assert!(!constraint.allows("main_room"));
        assert_eq!(constraint.ids(), vec!["kitchen"]);
    }
}
