//! Homestead - entry point
//!
//! Interactive console host for the simulation engine: reads player intents
//! from stdin, feeds them to the engine, and prints the derived view and
//! queued events after every turn.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use homestead::core::now_secs;
use homestead::engine::{GameEngine, GameView, Phase};
use homestead::persistence::FileSaveStore;
use homestead::{EngineConfig, GameData, Result};

#[derive(Parser, Debug)]
#[command(name = "homestead", about = "Survival homestead simulation")]
struct Args {
    /// Directory with actions.json / resources.json / locations.json
    /// (defaults to the built-in catalogs)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory for save files
    #[arg(long, default_value = "saves")]
    save_dir: PathBuf,

    /// Engine config TOML (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("homestead=info")
        .init();

    let args = Args::parse();
    tracing::info!("Homestead starting...");

    let data = match &args.data_dir {
        Some(dir) => GameData::load_from_dir(dir)?,
        None => GameData::builtin()?,
    };
    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(now_secs);

    let store = FileSaveStore::new(&args.save_dir);
    let mut engine = GameEngine::new(data, config, Box::new(store), seed)?;
    engine.start()?;

    println!("\n=== HOMESTEAD ===");
    println!("An abandoned house, four needs, and a long road back to comfort.");
    println!();
    println!("Commands:");
    println!("  do <action>     - Perform an action (by id)");
    println!("  go <location>   - Move to a connected location (by id)");
    println!("  status / s      - Show needs and inventory");
    println!("  look / l        - Show location, actions, exits");
    println!("  save            - Save the game");
    println!("  quit / q        - Save and exit");
    println!();

    print_events(&mut engine);
    print_location(&engine.view());

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.trim().splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let argument = parts.next().unwrap_or("").trim();

        match command {
            "do" if !argument.is_empty() => {
                engine.process_action(argument);
            }
            "go" if !argument.is_empty() => {
                engine.move_to_location(argument);
            }
            "status" | "s" => print_status(&engine.view()),
            "look" | "l" => print_location(&engine.view()),
            "save" => engine.save_game()?,
            "quit" | "q" => {
                if engine.phase() == Phase::Running {
                    engine.save_game()?;
                }
                break;
            }
            "" => {}
            other => println!("Unknown command: {other}"),
        }

        engine.update();
        print_events(&mut engine);

        if engine.phase() == Phase::GameOver {
            println!("The run is over. A fresh game will start next launch.");
            break;
        }
    }

    tracing::info!("Homestead shutting down");
    Ok(())
}

fn print_events(engine: &mut GameEngine) {
    for event in engine.drain_events() {
        println!("* {}", event.message());
    }
}

fn print_status(view: &GameView) {
    println!("{}", view.time);
    for need in &view.needs {
        println!(
            "  {:<8} {:>5.1} ({})",
            need.need.as_str(),
            need.value,
            need.status.label()
        );
    }
    println!("  overall: {}", view.overall_condition.label());
    if view.inventory.is_empty() {
        println!("  pack: empty");
    } else {
        for item in &view.inventory {
            println!("  {} x{} ({:.1})", item.name, item.amount, item.total_weight);
        }
    }
    println!(
        "  weight: {:.1}/{:.1}",
        view.capacity.current_weight, view.capacity.max_capacity
    );
}

fn print_location(view: &GameView) {
    println!("{} - {}", view.time, view.location.name);
    println!("{}", view.location.description);
    if !view.location.actions.is_empty() {
        println!("Actions:");
        for action in &view.location.actions {
            println!("  do {:<16} {}", action.id, action.name);
        }
    }
    if !view.connections.is_empty() {
        println!("Exits:");
        for connection in &view.connections {
            println!("  go {:<16} {}", connection.id, connection.name);
        }
    }
}
