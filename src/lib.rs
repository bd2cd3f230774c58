//! Homestead - survival simulation engine
//!
//! A deterministic single-actor survival model: discrete player actions move
//! time, needs, inventory and location state; the host renders the derived
//! view and persists snapshots through a pluggable store.

pub mod catalog;
pub mod character;
pub mod core;
pub mod engine;
pub mod inventory;
pub mod persistence;
pub mod world;

pub use catalog::GameData;
pub use core::{EngineConfig, GameError, Result};
pub use engine::{ActionOutcome, EngineEvent, GameEngine, MoveOutcome, Phase};
pub use persistence::{FileSaveStore, MemorySaveStore, SaveSlot, SaveStore};
