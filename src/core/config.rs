//! Engine configuration with documented constants
//!
//! All tuning values are collected here with explanations of their purpose
//! and how they interact with each other.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{GameError, Result};

/// Configuration for the simulation engine
///
/// These values set the game's pacing. Changing them affects how quickly a
/// run spirals toward starvation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === NEED SYSTEM ===
    /// Hunger lost per in-game hour
    ///
    /// At 3.0/hour a fully fed character empties the hunger bar in ~33 hours
    /// of elapsed game time.
    pub hunger_decay_rate: f32,

    /// Thirst lost per in-game hour
    ///
    /// Thirst drains fastest of all needs (4.0/hour, empty in 25 hours),
    /// making water the first resource pressure the player feels.
    pub thirst_decay_rate: f32,

    /// Energy lost per in-game hour
    ///
    /// Slowest passive drain (2.0/hour). Most energy loss comes from action
    /// costs instead.
    pub energy_decay_rate: f32,

    /// Health lost per in-game hour (passive)
    ///
    /// Zero: health only moves through cascade effects and starvation
    /// penalties.
    pub health_decay_rate: f32,

    /// Hunger level at or below which energy starts bleeding (-0.5 per update)
    pub hunger_effect_threshold: f32,

    /// Thirst level at or below which health starts bleeding (-1 per update)
    pub thirst_effect_threshold: f32,

    /// Health penalty per condition check while hunger or thirst sits at zero
    pub starvation_health_penalty: f32,

    /// Energy level at or below which the exhaustion warning fires
    pub exhaustion_warning_threshold: f32,

    // === TIME ===
    /// Hour of day a new game starts at (morning, so daytime actions work
    /// immediately)
    pub start_hour: f32,

    /// Hours consumed by a single one-hop move between locations
    pub travel_hours: f32,

    /// First hour of daytime (inclusive)
    pub day_start_hour: f32,

    /// First hour of night (daytime is [day_start_hour, night_start_hour))
    pub night_start_hour: f32,

    // === INVENTORY ===
    /// Maximum carried weight
    ///
    /// At 50.0 the starting kit (5 food x 0.5 + 3 water x 1.0 = 5.5) leaves
    /// plenty of headroom; a dedicated stone hauler hits the wall at 25
    /// stones.
    pub max_carry_weight: f32,

    // === PERSISTENCE ===
    /// Wall-clock seconds between autosaves driven by `update()`
    pub autosave_period_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // Need decay (thirst > hunger > energy, health passive-stable)
            hunger_decay_rate: 3.0,
            thirst_decay_rate: 4.0,
            energy_decay_rate: 2.0,
            health_decay_rate: 0.0,
            hunger_effect_threshold: 20.0,
            thirst_effect_threshold: 15.0,
            starvation_health_penalty: 10.0,
            exhaustion_warning_threshold: 10.0,

            // Time
            start_hour: 8.0,
            travel_hours: 0.5,
            day_start_hour: 6.0,
            night_start_hour: 20.0,

            // Inventory
            max_carry_weight: 50.0,

            // Persistence
            autosave_period_secs: 30,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text, falling back to defaults for absent keys
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate().map_err(GameError::InvalidConfig)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.hunger_decay_rate < 0.0
            || self.thirst_decay_rate < 0.0
            || self.energy_decay_rate < 0.0
            || self.health_decay_rate < 0.0
        {
            return Err("Decay rates must be non-negative".into());
        }

        if !(0.0..24.0).contains(&self.start_hour) {
            return Err(format!("start_hour ({}) must be in [0, 24)", self.start_hour));
        }

        if self.day_start_hour >= self.night_start_hour {
            return Err(format!(
                "day_start_hour ({}) must be < night_start_hour ({})",
                self.day_start_hour, self.night_start_hour
            ));
        }

        if self.travel_hours <= 0.0 {
            return Err("travel_hours must be positive".into());
        }

        if self.max_carry_weight <= 0.0 {
            return Err("max_carry_weight must be positive".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_day_window() {
        let config = EngineConfig {
            day_start_hour: 20.0,
            night_start_hour: 6.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_partial_toml() {
        let config = EngineConfig::from_toml_str("max_carry_weight = 80.0\n").unwrap();
        assert_eq!(config.max_carry_weight, 80.0);
        // Untouched keys keep their defaults
        assert_eq!(config.hunger_decay_rate, 3.0);
    }

    #[test]
    fn toml_with_bad_values_is_rejected() {
        assert!(EngineConfig::from_toml_str("travel_hours = -1.0\n").is_err());
    }
}
