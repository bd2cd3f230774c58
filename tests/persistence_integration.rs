//! Save/restore behavior across engine instances, over the file store

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use homestead::engine::{ActionOutcome, EngineEvent, GameEngine, MoveOutcome, Phase};
use homestead::persistence::FileSaveStore;
use homestead::{EngineConfig, GameData};

static DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

struct TempSaveDir(PathBuf);

impl TempSaveDir {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!(
            "homestead-it-{}-{}",
            std::process::id(),
            DIR_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        Self(dir)
    }
}

impl Drop for TempSaveDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

fn engine_on(dir: &TempSaveDir, seed: u64) -> GameEngine {
    let data = GameData::builtin().expect("builtin catalogs load");
    let mut engine = GameEngine::new(
        data,
        EngineConfig::default(),
        Box::new(FileSaveStore::new(&dir.0)),
        seed,
    )
    .expect("engine builds");
    engine.start().expect("engine starts");
    engine
}

#[test]
fn save_restores_across_engine_instances() {
    let dir = TempSaveDir::new();

    let mut first = engine_on(&dir, 1);
    assert_eq!(first.drain_events(), vec![EngineEvent::GameStarted]);

    first.move_to_location("front_yard");
    first.move_to_location("back_yard");
    assert_eq!(
        first.process_action("collect_water"),
        ActionOutcome::Performed
    );
    let saved = first.snapshot();
    first.save_game().expect("save");
    drop(first);

    let mut second = engine_on(&dir, 2);
    assert_eq!(second.drain_events(), vec![EngineEvent::GameLoaded]);
    assert_eq!(second.phase(), Phase::Running);
    assert_eq!(second.world().current_id(), "back_yard");
    assert_eq!(second.clock().current_hour(), saved.time.current_hour);
    assert_eq!(second.clock().current_day(), saved.time.current_day);
    assert_eq!(second.needs(), &saved.character.needs);
    assert_eq!(
        second.inventory().amount_of("water"),
        saved.inventory.entries["water"]
    );
    assert!(second.world().is_discovered("front_yard"));
    assert!(!second.world().is_discovered("kitchen"));
}

#[test]
fn corrupt_save_degrades_to_fresh_game() {
    let dir = TempSaveDir::new();

    let mut first = engine_on(&dir, 1);
    first.move_to_location("front_yard");
    first.save_game().expect("save");
    drop(first);

    // Trash every save file on disk
    for entry in std::fs::read_dir(&dir.0).expect("save dir exists") {
        let path = entry.expect("dir entry").path();
        std::fs::write(path, "{ \"time\": \"yes\" }").expect("overwrite");
    }

    let mut second = engine_on(&dir, 2);
    assert_eq!(second.drain_events(), vec![EngineEvent::GameStarted]);
    assert_eq!(second.world().current_id(), "main_room");
    assert_eq!(second.needs().health, 100.0);
    assert_eq!(second.inventory().amount_of("food"), 5);
}

#[test]
fn autosave_slot_does_not_shadow_the_active_slot() {
    let dir = TempSaveDir::new();

    // Autosave-only persistence must not be picked up by start(), which
    // reads the active numbered slot.
    let config = EngineConfig {
        autosave_period_secs: 0,
        ..Default::default()
    };
    let data = GameData::builtin().unwrap();
    let mut first = GameEngine::new(
        data,
        config,
        Box::new(FileSaveStore::new(&dir.0)),
        1,
    )
    .unwrap();
    first.start().unwrap();
    first.move_to_location("front_yard");
    first.update(); // period 0: autosaves immediately
    drop(first);

    let mut second = engine_on(&dir, 2);
    assert_eq!(second.drain_events(), vec![EngineEvent::GameStarted]);
    assert_eq!(second.world().current_id(), "main_room");
}

#[test]
fn game_over_erases_only_this_runs_slot_file() {
    let dir = TempSaveDir::new();

    let mut engine = engine_on(&dir, 1);
    engine.save_game().expect("save");
    assert!(engine.has_save());

    while engine.phase() == Phase::Running {
        engine.process_action("rest");
    }
    assert!(!engine.has_save());
    drop(engine);

    // A relaunch starts fresh
    let mut next = engine_on(&dir, 2);
    assert_eq!(next.drain_events(), vec![EngineEvent::GameStarted]);
    assert_eq!(next.move_to_location("front_yard"), MoveOutcome::Moved);
}
