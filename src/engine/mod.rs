//! Simulation engine - orchestrates clock, needs, inventory and world
//!
//! The engine is the only writer of game state. Player-facing operations
//! (`process_action`, `move_to_location`) validate first and mutate only on
//! success, so a refused action leaves every component untouched. Each clock
//! advance decays needs and re-evaluates the game-over conditions.

pub mod events;
pub mod view;

pub use events::EngineEvent;
pub use view::{ActionView, GameView, InventoryItemView, LocationView, NeedView};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::time::Instant;

use crate::catalog::{ActionDef, GameData, ResultValue, TimeOfDay};
use crate::character::{CharacterState, NeedType, Needs};
use crate::core::error::Result;
use crate::core::{Clock, EngineConfig, GameError};
use crate::inventory::Inventory;
use crate::persistence::{GameSnapshot, SaveManager, SaveSlot, SaveStore};
use crate::world::{Connection, WorldMap};

const START_LOCATION: &str = "main_room";
const STARTING_KIT: [(&str, u32); 2] = [("food", 5), ("water", 3)];

/// Engine lifecycle. Constructed in `Initializing`; `start()` enters
/// `Running`; health exhaustion ends the run in `GameOver` (terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Running,
    GameOver,
}

/// Result of a `process_action` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Effects applied, completion event queued
    Performed,
    /// Validation refused it; no state change
    Unavailable,
    /// No such action in the catalog
    Unknown,
    /// Engine not in `Running`
    NotRunning,
}

/// Result of a `move_to_location` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// Unknown or not adjacent; no state change
    Blocked,
    NotRunning,
}

pub struct GameEngine {
    data: GameData,
    config: EngineConfig,
    clock: Clock,
    needs: Needs,
    inventory: Inventory,
    world: WorldMap,
    saves: SaveManager,
    rng: ChaCha8Rng,
    phase: Phase,
    active_slot: SaveSlot,
    events: VecDeque<EngineEvent>,
    last_autosave: Instant,
}

impl GameEngine {
    /// Build an engine over loaded catalogs; call `start()` before playing
    pub fn new(
        data: GameData,
        config: EngineConfig,
        store: Box<dyn SaveStore>,
        seed: u64,
    ) -> Result<Self> {
        config.validate().map_err(GameError::InvalidConfig)?;
        let clock = Clock::new(
            config.start_hour,
            config.day_start_hour,
            config.night_start_hour,
        );
        let world = WorldMap::new(&data, START_LOCATION)?;
        let inventory = Inventory::new(config.max_carry_weight);

        Ok(Self {
            clock,
            needs: Needs::default(),
            inventory,
            world,
            saves: SaveManager::new(store),
            rng: ChaCha8Rng::seed_from_u64(seed),
            phase: Phase::Initializing,
            active_slot: SaveSlot::default(),
            events: VecDeque::new(),
            last_autosave: Instant::now(),
            data,
            config,
        })
    }

    /// Restore the active slot if a usable save exists, else start fresh
    pub fn start(&mut self) -> Result<()> {
        if self.phase != Phase::Initializing {
            return Ok(());
        }

        match self.saves.load(self.active_slot)? {
            Some(snapshot) => {
                self.restore_snapshot(&snapshot);
                self.events.push_back(EngineEvent::GameLoaded);
                tracing::info!("save restored, entering Running");
            }
            None => {
                self.bootstrap_new_game();
                self.events.push_back(EngineEvent::GameStarted);
                tracing::info!("no usable save, new game bootstrapped");
            }
        }
        self.phase = Phase::Running;
        Ok(())
    }

    fn bootstrap_new_game(&mut self) {
        self.clock.reset(self.config.start_hour);
        self.needs = Needs::default();
        self.inventory.reset(self.config.max_carry_weight);
        for (resource, amount) in STARTING_KIT {
            self.inventory.add(&self.data, resource, amount);
        }
        // START_LOCATION was validated at construction
        let _ = self.world.set_current(&self.data, START_LOCATION);
    }

    fn restore_snapshot(&mut self, snapshot: &GameSnapshot) {
        self.clock.restore(&snapshot.time);
        self.needs = snapshot.character.needs.clone();
        // Re-clamp in case the save was hand-edited
        for need in NeedType::ALL {
            self.needs.modify(need, 0.0);
        }
        self.inventory.restore(&snapshot.inventory);
        self.world.restore(&self.data, &snapshot.location);
    }

    // === Player-facing operations ===

    /// Look up, validate, and execute an action
    ///
    /// All-or-nothing: a failed lookup or validation queues a message and
    /// changes nothing.
    pub fn process_action(&mut self, action_id: &str) -> ActionOutcome {
        if self.phase != Phase::Running {
            return ActionOutcome::NotRunning;
        }

        let Some(action) = self.data.action(action_id).cloned() else {
            tracing::warn!(action_id, "unknown action requested");
            return ActionOutcome::Unknown;
        };

        if !self.can_perform(&action) {
            self.events.push_back(EngineEvent::ActionUnavailable);
            return ActionOutcome::Unavailable;
        }

        self.execute(&action);
        ActionOutcome::Performed
    }

    /// Pure precondition check: energy, location, time of day, resources
    pub fn can_perform(&self, action: &ActionDef) -> bool {
        if action.energy_cost > 0.0 && self.needs.energy < action.energy_cost {
            return false;
        }

        if let Some(constraint) = &action.location {
            if !action.any_location && !constraint.allows(self.world.current_id()) {
                return false;
            }
        }

        match action.time_of_day {
            Some(TimeOfDay::Day) if !self.clock.is_daytime() => return false,
            Some(TimeOfDay::Night) if self.clock.is_daytime() => return false,
            _ => {}
        }

        action
            .requirements
            .iter()
            .all(|(resource, amount)| self.inventory.has(resource, *amount))
    }

    fn execute(&mut self, action: &ActionDef) {
        if action.time_cost > 0.0 {
            self.advance_time(action.time_cost);
        }

        if action.energy_cost > 0.0 {
            self.needs.modify(NeedType::Energy, -action.energy_cost);
        }

        for (resource, amount) in &action.requirements {
            self.inventory.remove(resource, *amount);
        }
        for (resource, amount) in &action.consumed_resources {
            self.inventory.remove(resource, *amount);
        }

        for (key, value) in &action.results {
            if let Some(need) = NeedType::from_key(key) {
                let delta = match value {
                    ResultValue::Amount(delta) => *delta,
                    ResultValue::Range { min, max } => {
                        self.rng.gen_range(*min..=*max) as f32
                    }
                };
                self.needs.modify(need, delta);
            } else {
                // Catalog validation guarantees this is a resource key.
                // A rolled gain the pack can't hold is silently dropped by
                // the inventory's own capacity rejection.
                let amount = match value {
                    ResultValue::Amount(amount) => *amount as u32,
                    ResultValue::Range { min, max } => self.rng.gen_range(*min..=*max),
                };
                if amount > 0 {
                    self.inventory.add(&self.data, key, amount);
                }
            }
        }

        self.events.push_back(EngineEvent::ActionCompleted {
            name: action.name.clone(),
        });
    }

    /// One-hop travel; costs a fixed half hour of game time
    pub fn move_to_location(&mut self, location_id: &str) -> MoveOutcome {
        if self.phase != Phase::Running {
            return MoveOutcome::NotRunning;
        }

        if !self.world.can_move_to(&self.data, location_id) {
            tracing::debug!(location_id, "move refused");
            return MoveOutcome::Blocked;
        }

        // can_move_to verified the id
        let _ = self.world.set_current(&self.data, location_id);
        self.advance_time(self.config.travel_hours);

        let name = self
            .data
            .location(location_id)
            .map(|def| def.name.clone())
            .unwrap_or_else(|| location_id.to_string());
        self.events.push_back(EngineEvent::MovedTo { name });
        MoveOutcome::Moved
    }

    /// Advance the clock and run everything that rides on elapsed time
    fn advance_time(&mut self, hours: f32) {
        let change = self.clock.advance(hours);
        self.needs.update(change.hours_elapsed, &self.config);
        self.check_game_conditions();
    }

    /// Evaluate the three independent survival checks
    ///
    /// Health exhaustion is terminal; starvation bleeds health; exhaustion
    /// only warns.
    fn check_game_conditions(&mut self) {
        if self.needs.health <= 0.0 {
            self.game_over("you died of your wounds...");
            return;
        }

        if self.needs.hunger <= 0.0 || self.needs.thirst <= 0.0 {
            self.needs
                .modify(NeedType::Health, -self.config.starvation_health_penalty);
            self.events.push_back(EngineEvent::StarvationWarning);
        }

        if self.needs.energy <= self.config.exhaustion_warning_threshold {
            self.events.push_back(EngineEvent::ExhaustionWarning);
        }
    }

    fn game_over(&mut self, reason: &str) {
        tracing::info!(reason, "game over");
        self.phase = Phase::GameOver;
        if let Err(e) = self.saves.clear(self.active_slot) {
            tracing::warn!(error = %e, "failed to erase save on game over");
        }
        self.events.push_back(EngineEvent::GameOver {
            reason: reason.to_string(),
        });
    }

    // === Host loop ===

    /// Per-frame housekeeping: wall-clock driven autosave
    pub fn update(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        if self.last_autosave.elapsed().as_secs() >= self.config.autosave_period_secs {
            self.last_autosave = Instant::now();
            let snapshot = self.snapshot();
            if let Err(e) = self.saves.autosave(&snapshot) {
                tracing::warn!(error = %e, "autosave failed");
            }
        }
    }

    pub fn save_game(&mut self) -> Result<()> {
        let snapshot = self.snapshot();
        self.saves.save(&snapshot, self.active_slot)?;
        self.events.push_back(EngineEvent::GameSaved);
        Ok(())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::stamped(
            self.clock.state(),
            CharacterState {
                needs: self.needs.clone(),
            },
            self.inventory.state(),
            self.world.state(),
        )
    }

    /// Queued events since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain(..).collect()
    }

    // === Derived view ===

    /// Actions offered at the current location that pass validation now
    pub fn available_actions(&self) -> Vec<&ActionDef> {
        let Some(def) = self.world.current_def(&self.data) else {
            return Vec::new();
        };
        def.actions
            .iter()
            .filter_map(|id| self.data.action(id))
            .filter(|action| self.can_perform(action))
            .collect()
    }

    pub fn available_connections(&self) -> Vec<Connection> {
        self.world.available_connections(&self.data)
    }

    /// Assemble the full render-ready view
    pub fn view(&self) -> GameView {
        let mut inventory: Vec<InventoryItemView> = self
            .inventory
            .entries()
            .map(|(id, amount)| {
                let (name, weight, description) = self
                    .data
                    .resource(id)
                    .map(|r| (r.name.clone(), r.weight, r.description.clone()))
                    .unwrap_or_else(|| (id.to_string(), 0.0, String::new()));
                InventoryItemView {
                    id: id.to_string(),
                    name,
                    amount,
                    weight,
                    total_weight: amount as f32 * weight,
                    description,
                }
            })
            .collect();
        inventory.sort_by(|a, b| a.name.cmp(&b.name));

        let location = self
            .world
            .current_def(&self.data)
            .map(|def| LocationView {
                id: def.id.clone(),
                name: def.name.clone(),
                description: def.description.clone(),
                safety: def.safety,
                actions: self
                    .available_actions()
                    .into_iter()
                    .map(|action| ActionView {
                        id: action.id.clone(),
                        name: action.name.clone(),
                        description: action.description.clone(),
                        time_cost: action.time_cost,
                        energy_cost: action.energy_cost,
                    })
                    .collect(),
            })
            .unwrap_or_else(|| LocationView {
                id: self.world.current_id().to_string(),
                name: String::new(),
                description: String::new(),
                safety: crate::catalog::SafetyTier::Safe,
                actions: Vec::new(),
            });

        GameView {
            time: self.clock.time_string(),
            day: self.clock.current_day(),
            is_daytime: self.clock.is_daytime(),
            needs: NeedType::ALL
                .iter()
                .map(|need| NeedView {
                    need: *need,
                    value: self.needs.get(*need),
                    status: self.needs.status(*need),
                })
                .collect(),
            overall_condition: self.needs.overall_condition(),
            inventory,
            capacity: self.inventory.capacity_info(&self.data),
            location,
            connections: self.available_connections(),
        }
    }

    // === Accessors (tests and hosts) ===

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn needs(&self) -> &Needs {
        &self.needs
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn world(&self) -> &WorldMap {
        &self.world
    }

    pub fn data(&self) -> &GameData {
        &self.data
    }

    pub fn has_save(&self) -> bool {
        self.saves.has_save(self.active_slot)
    }
}
