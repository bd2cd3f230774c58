//! Resource definitions: everything the inventory can hold

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Material,
    Consumable,
    Key,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
}

/// A catalog resource with its carry weight and consumable properties
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Carry weight per unit; counted against inventory capacity
    pub weight: f32,
    #[serde(default = "default_stackable")]
    pub stackable: bool,
    #[serde(rename = "type")]
    pub category: ResourceCategory,
    #[serde(default = "default_rarity")]
    pub rarity: Rarity,
    /// Hunger restored when a consumable action uses this resource
    #[serde(default)]
    pub hunger_restore: Option<f32>,
    #[serde(default)]
    pub thirst_restore: Option<f32>,
    /// Hours before a perishable spoils (authored data, reserved)
    #[serde(default)]
    pub spoil_time: Option<f32>,
}

fn default_stackable() -> bool {
    true
}

fn default_rarity() -> Rarity {
    Rarity::Common
}
