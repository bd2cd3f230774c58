//! Derived view state for the host renderer
//!
//! Pull-based: the host calls `GameEngine::view()` (or the individual
//! getters) after each update instead of subscribing to change
//! notifications. Everything here is serializable so a host can ship the
//! whole view across a process boundary as JSON.

use serde::Serialize;

use crate::catalog::SafetyTier;
use crate::character::{NeedStatus, NeedType};
use crate::inventory::CapacityInfo;
use crate::world::Connection;

#[derive(Debug, Clone, Serialize)]
pub struct NeedView {
    pub need: NeedType,
    pub value: f32,
    pub status: NeedStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryItemView {
    pub id: String,
    pub name: String,
    pub amount: u32,
    pub weight: f32,
    pub total_weight: f32,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub time_cost: f32,
    pub energy_cost: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub safety: SafetyTier,
    /// Actions offered here that pass validation right now
    pub actions: Vec<ActionView>,
}

/// The complete render-ready state of a running game
#[derive(Debug, Clone, Serialize)]
pub struct GameView {
    pub time: String,
    pub day: u32,
    pub is_daytime: bool,
    pub needs: Vec<NeedView>,
    pub overall_condition: NeedStatus,
    pub inventory: Vec<InventoryItemView>,
    pub capacity: CapacityInfo,
    pub location: LocationView,
    pub connections: Vec<Connection>,
}
