//! Weight-limited inventory of catalog resources
//!
//! Counts are keyed by resource id; an absent key means a count of zero, and
//! entries are dropped the moment their count reaches zero. The capacity
//! check is prospective: an add that would overweigh the pack is rejected
//! without touching state.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::GameData;

/// Snapshot wire shape for the inventory aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryState {
    pub entries: AHashMap<String, u32>,
    pub max_capacity: f32,
}

/// Weight usage summary for the view
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityInfo {
    pub current_weight: f32,
    pub max_capacity: f32,
    pub free_space: f32,
    pub usage_percent: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    counts: AHashMap<String, u32>,
    max_capacity: f32,
}

impl Inventory {
    pub fn new(max_capacity: f32) -> Self {
        Self {
            counts: AHashMap::new(),
            max_capacity,
        }
    }

    /// Add resources, rejecting unknown ids and over-capacity adds
    ///
    /// Returns false with no mutation on rejection.
    pub fn add(&mut self, data: &GameData, resource_id: &str, amount: u32) -> bool {
        let Some(resource) = data.resource(resource_id) else {
            tracing::warn!(resource_id, "ignoring add of unknown resource");
            return false;
        };

        let prospective = self.total_weight(data) + amount as f32 * resource.weight;
        if prospective > self.max_capacity {
            tracing::warn!(
                resource_id,
                amount,
                prospective,
                capacity = self.max_capacity,
                "inventory full, add rejected"
            );
            return false;
        }

        *self.counts.entry(resource_id.to_string()).or_insert(0) += amount;
        true
    }

    /// Remove resources; fails without mutation when not enough are held
    pub fn remove(&mut self, resource_id: &str, amount: u32) -> bool {
        let held = self.amount_of(resource_id);
        if held < amount {
            tracing::warn!(resource_id, held, wanted = amount, "not enough of resource");
            return false;
        }

        let remaining = held - amount;
        if remaining == 0 {
            self.counts.remove(resource_id);
        } else {
            self.counts.insert(resource_id.to_string(), remaining);
        }
        true
    }

    pub fn has(&self, resource_id: &str, amount: u32) -> bool {
        self.amount_of(resource_id) >= amount
    }

    pub fn amount_of(&self, resource_id: &str) -> u32 {
        self.counts.get(resource_id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(id, count)| (id.as_str(), *count))
    }

    /// Total carried weight; unknown ids (stale save data) weigh nothing
    pub fn total_weight(&self, data: &GameData) -> f32 {
        self.counts
            .iter()
            .map(|(id, count)| {
                let unit = data.resource(id).map(|r| r.weight).unwrap_or(0.0);
                *count as f32 * unit
            })
            .sum()
    }

    pub fn capacity_info(&self, data: &GameData) -> CapacityInfo {
        let current_weight = self.total_weight(data);
        CapacityInfo {
            current_weight,
            max_capacity: self.max_capacity,
            free_space: self.max_capacity - current_weight,
            usage_percent: ((current_weight / self.max_capacity) * 100.0).round() as u32,
        }
    }

    pub fn state(&self) -> InventoryState {
        InventoryState {
            entries: self.counts.clone(),
            max_capacity: self.max_capacity,
        }
    }

    pub fn restore(&mut self, state: &InventoryState) {
        self.counts = state
            .entries
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(id, count)| (id.clone(), *count))
            .collect();
        if state.max_capacity > 0.0 {
            self.max_capacity = state.max_capacity;
        }
    }

    pub fn reset(&mut self, max_capacity: f32) {
        self.counts.clear();
        self.max_capacity = max_capacity;
    }
}
