//! Save/restore of the full game snapshot
//!
//! Storage is a capability trait so hosts can plug in their own backends
//! (the shipped ones are a directory of JSON files and an in-memory map for
//! tests). A snapshot that fails to decode is treated as "no usable save",
//! never as a hard error; the engine then bootstraps a fresh game.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::character::CharacterState;
use crate::core::clock::ClockState;
use crate::core::error::Result;
use crate::core::now_secs;
use crate::inventory::InventoryState;
use crate::world::WorldState;

pub const SNAPSHOT_VERSION: &str = "1.0.0";

const SLOT_KEY_PREFIX: &str = "homestead_save";
const AUTO_SLOT_KEY: &str = "homestead_autosave";

/// The persisted aggregate: clock + needs + inventory + world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub timestamp: u64,
    pub time: ClockState,
    pub character: CharacterState,
    pub inventory: InventoryState,
    pub location: WorldState,
}

fn default_version() -> String {
    SNAPSHOT_VERSION.to_string()
}

impl GameSnapshot {
    pub fn stamped(
        time: ClockState,
        character: CharacterState,
        inventory: InventoryState,
        location: WorldState,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_string(),
            timestamp: now_secs(),
            time,
            character,
            inventory,
            location,
        }
    }
}

/// Storage capability: keyed blobs of serialized state
pub trait SaveStore {
    fn store(&mut self, key: &str, payload: &str) -> Result<()>;
    fn retrieve(&self, key: &str) -> Result<Option<String>>;
    fn exists(&self, key: &str) -> bool;
    fn erase(&mut self, key: &str) -> Result<()>;
}

/// One JSON file per key under a save directory
#[derive(Debug, Clone)]
pub struct FileSaveStore {
    dir: PathBuf,
}

impl FileSaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SaveStore for FileSaveStore {
    fn store(&mut self, key: &str, payload: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), payload)?;
        Ok(())
    }

    fn retrieve(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }

    fn erase(&mut self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and embedded hosts
#[derive(Debug, Clone, Default)]
pub struct MemorySaveStore {
    entries: AHashMap<String, String>,
}

impl MemorySaveStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemorySaveStore {
    fn store(&mut self, key: &str, payload: &str) -> Result<()> {
        self.entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn retrieve(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn erase(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Numbered manual slots plus the distinguished autosave slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveSlot {
    Numbered(u8),
    Auto,
}

impl SaveSlot {
    fn key(&self) -> String {
        match self {
            SaveSlot::Numbered(index) => format!("{SLOT_KEY_PREFIX}_{index}"),
            SaveSlot::Auto => AUTO_SLOT_KEY.to_string(),
        }
    }
}

impl Default for SaveSlot {
    fn default() -> Self {
        SaveSlot::Numbered(0)
    }
}

/// Slot bookkeeping over a pluggable store
pub struct SaveManager {
    store: Box<dyn SaveStore>,
}

impl SaveManager {
    pub fn new(store: Box<dyn SaveStore>) -> Self {
        Self { store }
    }

    pub fn save(&mut self, snapshot: &GameSnapshot, slot: SaveSlot) -> Result<()> {
        let payload = serde_json::to_string(snapshot)?;
        self.store.store(&slot.key(), &payload)?;
        tracing::debug!(?slot, "game saved");
        Ok(())
    }

    /// Load a slot; anything short of a clean decode degrades to `None`
    pub fn load(&self, slot: SaveSlot) -> Result<Option<GameSnapshot>> {
        let Some(payload) = self.store.retrieve(&slot.key())? else {
            return Ok(None);
        };
        match serde_json::from_str::<GameSnapshot>(&payload) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                tracing::warn!(?slot, error = %e, "corrupt save, treating as absent");
                Ok(None)
            }
        }
    }

    pub fn has_save(&self, slot: SaveSlot) -> bool {
        self.store.exists(&slot.key())
    }

    pub fn clear(&mut self, slot: SaveSlot) -> Result<()> {
        self.store.erase(&slot.key())
    }

    pub fn autosave(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.save(snapshot, SaveSlot::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Needs;

    fn snapshot() -> GameSnapshot {
        GameSnapshot::stamped(
            ClockState {
                current_hour: 8.0,
                current_day: 1,
                total_hours: 8.0,
            },
            CharacterState {
                needs: Needs::default(),
            },
            InventoryState {
                entries: AHashMap::new(),
                max_capacity: 50.0,
            },
            WorldState {
                current_location: "main_room".into(),
                discovered_locations: vec!["main_room".into()],
                location_states: AHashMap::new(),
            },
        )
    }

    #[test]
    fn memory_store_round_trip() {
        let mut manager = SaveManager::new(Box::new(MemorySaveStore::new()));
        assert!(!manager.has_save(SaveSlot::default()));

        manager.save(&snapshot(), SaveSlot::default()).unwrap();
        assert!(manager.has_save(SaveSlot::default()));

        let loaded = manager.load(SaveSlot::default()).unwrap().unwrap();
        assert_eq!(loaded.time.current_day, 1);
        assert_eq!(loaded.location.current_location, "main_room");

        manager.clear(SaveSlot::default()).unwrap();
        assert!(!manager.has_save(SaveSlot::default()));
    }

    #[test]
    fn auto_slot_is_distinct() {
        let mut manager = SaveManager::new(Box::new(MemorySaveStore::new()));
        manager.autosave(&snapshot()).unwrap();
        assert!(manager.has_save(SaveSlot::Auto));
        assert!(!manager.has_save(SaveSlot::Numbered(0)));
    }

    #[test]
    fn malformed_json_degrades_to_none() {
        let mut store = MemorySaveStore::new();
        store.store("homestead_save_0", "{ not json").unwrap();
        let manager = SaveManager::new(Box::new(store));
        assert!(manager.load(SaveSlot::default()).unwrap().is_none());
    }

    #[test]
    fn missing_required_section_degrades_to_none() {
        // No `character` field: shallow validation failure, not a hard error
        let payload = r#"{
            "version": "1.0.0",
            "time": { "currentHour": 8.0, "currentDay": 1, "totalHours": 8.0 },
            "inventory": { "entries": {}, "maxCapacity": 50.0 },
            "location": { "currentLocation": "main_room", "discoveredLocations": [], "locationStates": {} }
        }"#;
        let mut store = MemorySaveStore::new();
        store.store("homestead_save_0", payload).unwrap();
        let manager = SaveManager::new(Box::new(store));
        assert!(manager.load(SaveSlot::default()).unwrap().is_none());
    }

    #[test]
    fn extra_fields_are_tolerated() {
        let mut payload = serde_json::to_value(snapshot()).unwrap();
        payload["saveDate"] = serde_json::Value::String("2024-01-01".into());
        let mut store = MemorySaveStore::new();
        store
            .store("homestead_save_0", &payload.to_string())
            .unwrap();
        let manager = SaveManager::new(Box::new(store));
        assert!(manager.load(SaveSlot::default()).unwrap().is_some());
    }

    #[test]
    fn file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!("homestead-test-{}", std::process::id()));
        let mut store = FileSaveStore::new(&dir);
        store.store("slot", "{}").unwrap();
        assert!(store.exists("slot"));
        assert_eq!(store.retrieve("slot").unwrap().as_deref(), Some("{}"));
        store.erase("slot").unwrap();
        assert!(!store.exists("slot"));
        assert!(store.retrieve("slot").unwrap().is_none());
        let _ = std::fs::remove_dir_all(dir);
    }
}
