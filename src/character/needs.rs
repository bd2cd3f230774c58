//! Vital needs that decay over time and gate what the character can do

use serde::{Deserialize, Serialize};

use crate::core::EngineConfig;

pub const NEED_MAX: f32 = 100.0;

/// The four tracked vitals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeedType {
    Hunger,
    Thirst,
    Health,
    Energy,
}

impl NeedType {
    pub const ALL: [NeedType; 4] = [
        NeedType::Hunger,
        NeedType::Thirst,
        NeedType::Health,
        NeedType::Energy,
    ];

    /// Resolve a catalog/wire key; unknown keys are the caller's problem
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "hunger" => Some(NeedType::Hunger),
            "thirst" => Some(NeedType::Thirst),
            "health" => Some(NeedType::Health),
            "energy" => Some(NeedType::Energy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NeedType::Hunger => "hunger",
            NeedType::Thirst => "thirst",
            NeedType::Health => "health",
            NeedType::Energy => "energy",
        }
    }
}

/// Qualitative bucket derived from a need value (or the overall mean)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeedStatus {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl NeedStatus {
    pub fn from_value(value: f32) -> Self {
        if value >= 80.0 {
            NeedStatus::Excellent
        } else if value >= 60.0 {
            NeedStatus::Good
        } else if value >= 40.0 {
            NeedStatus::Fair
        } else if value >= 20.0 {
            NeedStatus::Poor
        } else {
            NeedStatus::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NeedStatus::Excellent => "excellent",
            NeedStatus::Good => "good",
            NeedStatus::Fair => "fair",
            NeedStatus::Poor => "poor",
            NeedStatus::Critical => "critical",
        }
    }
}

/// Character vitals, each clamped to [0, 100]
///
/// Snapshot wire shape is a flat map of the four keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Needs {
    pub hunger: f32,
    pub thirst: f32,
    pub health: f32,
    pub energy: f32,
}

impl Default for Needs {
    fn default() -> Self {
        Self {
            hunger: NEED_MAX,
            thirst: NEED_MAX,
            health: NEED_MAX,
            energy: NEED_MAX,
        }
    }
}

impl Needs {
    pub fn get(&self, need: NeedType) -> f32 {
        match need {
            NeedType::Hunger => self.hunger,
            NeedType::Thirst => self.thirst,
            NeedType::Health => self.health,
            NeedType::Energy => self.energy,
        }
    }

    /// Apply a signed delta, clamping the result to [0, 100]
    pub fn modify(&mut self, need: NeedType, delta: f32) {
        let slot = match need {
            NeedType::Hunger => &mut self.hunger,
            NeedType::Thirst => &mut self.thirst,
            NeedType::Health => &mut self.health,
            NeedType::Energy => &mut self.energy,
        };
        *slot = (*slot + delta).clamp(0.0, NEED_MAX);
    }

    /// Decay needs for elapsed time, then apply cascade effects once
    ///
    /// The cascade is evaluated in fixed order and does not re-trigger
    /// itself: hunger gnaws at energy, thirst and exhaustion at health.
    pub fn update(&mut self, hours_elapsed: f32, config: &EngineConfig) {
        let rates = [
            (NeedType::Hunger, config.hunger_decay_rate),
            (NeedType::Thirst, config.thirst_decay_rate),
            (NeedType::Energy, config.energy_decay_rate),
            (NeedType::Health, config.health_decay_rate),
        ];
        for (need, rate) in rates {
            if rate > 0.0 {
                self.modify(need, -rate * hours_elapsed);
            }
        }

        if self.hunger <= config.hunger_effect_threshold {
            self.modify(NeedType::Energy, -0.5);
        }
        if self.thirst <= config.thirst_effect_threshold {
            self.modify(NeedType::Health, -1.0);
        }
        if self.energy <= 0.0 {
            self.modify(NeedType::Health, -2.0);
        }
    }

    pub fn status(&self, need: NeedType) -> NeedStatus {
        NeedStatus::from_value(self.get(need))
    }

    /// Bucket over the arithmetic mean of all four needs
    pub fn overall_condition(&self) -> NeedStatus {
        let average = (self.hunger + self.thirst + self.health + self.energy) / 4.0;
        NeedStatus::from_value(average)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn modify_clamps_both_ends() {
        let mut needs = Needs::default();
        needs.modify(NeedType::Hunger, 50.0);
        assert_eq!(needs.hunger, NEED_MAX);
        needs.modify(NeedType::Hunger, -250.0);
        assert_eq!(needs.hunger, 0.0);
    }

    #[test]
    fn decay_rates_applied_per_hour() {
        let config = EngineConfig::default();
        let mut needs = Needs::default();
        needs.update(2.0, &config);
        assert_eq!(needs.hunger, 94.0); // 100 - 3*2
        assert_eq!(needs.thirst, 92.0); // 100 - 4*2
        assert_eq!(needs.energy, 96.0); // 100 - 2*2
        assert_eq!(needs.health, 100.0); // no passive decay
    }

    #[test]
    fn hunger_cascade_drains_energy() {
        let config = EngineConfig::default();
        let mut needs = Needs {
            hunger: 21.0,
            ..Default::default()
        };
        needs.update(1.0, &config); // hunger 18 -> cascade
        assert_eq!(needs.energy, 100.0 - 2.0 - 0.5);
        assert_eq!(needs.health, 100.0);
    }

    #[test]
    fn thirst_cascade_drains_health() {
        let config = EngineConfig::default();
        let mut needs = Needs {
            thirst: 10.0,
            ..Default::default()
        };
        needs.update(1.0, &config);
        assert_eq!(needs.health, 99.0);
    }

    #[test]
    fn exhaustion_cascade_drains_health() {
        let config = EngineConfig::default();
        let mut needs = Needs {
            energy: 1.0,
            ..Default::default()
        };
        needs.update(1.0, &config); // energy hits 0
        assert_eq!(needs.energy, 0.0);
        assert_eq!(needs.health, 98.0);
    }

    #[test]
    fn cascade_runs_once_not_to_fixed_point() {
        let config = EngineConfig::default();
        let mut needs = Needs {
            hunger: 5.0,
            energy: 2.4,
            ..Default::default()
        };
        // Decay takes energy to 0.4, hunger cascade to -0.1 -> clamped 0.
        // The energy<=0 branch already ran its check against the cascaded
        // value in order, so health takes exactly one -2 hit.
        needs.update(1.0, &config);
        assert_eq!(needs.energy, 0.0);
        assert_eq!(needs.health, 98.0);
    }

    #[test]
    fn status_buckets() {
        assert_eq!(NeedStatus::from_value(100.0), NeedStatus::Excellent);
        assert_eq!(NeedStatus::from_value(80.0), NeedStatus::Excellent);
        assert_eq!(NeedStatus::from_value(79.9), NeedStatus::Good);
        assert_eq!(NeedStatus::from_value(40.0), NeedStatus::Fair);
        assert_eq!(NeedStatus::from_value(20.0), NeedStatus::Poor);
        assert_eq!(NeedStatus::from_value(19.9), NeedStatus::Critical);
    }

    #[test]
    fn overall_condition_uses_mean() {
        let needs = Needs {
            hunger: 100.0,
            thirst: 100.0,
            health: 20.0,
            energy: 20.0,
        };
        // mean = 60 -> Good
        assert_eq!(needs.overall_condition(), NeedStatus::Good);
    }

    #[test]
    fn unknown_need_key_is_rejected() {
        assert_eq!(NeedType::from_key("stamina"), None);
        assert_eq!(NeedType::from_key("hunger"), Some(NeedType::Hunger));
    }

    proptest! {
        /// After any sequence of modifications, every need stays in [0, 100]
        #[test]
        fn values_stay_clamped(deltas in prop::collection::vec((0usize..4, -200.0f32..200.0), 0..64)) {
            let mut needs = Needs::default();
            for (idx, delta) in deltas {
                needs.modify(NeedType::ALL[idx], delta);
            }
            for need in NeedType::ALL {
                let value = needs.get(need);
                prop_assert!((0.0..=NEED_MAX).contains(&value));
            }
        }
    }
}
