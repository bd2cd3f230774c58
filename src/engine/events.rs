//! Events raised by the engine for the host to surface
//!
//! The engine queues these during its synchronous operations; the host
//! drains the queue each frame and decides how to present them.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EngineEvent {
    /// Fresh game bootstrapped
    GameStarted,
    /// Existing save restored
    GameLoaded,
    /// Manual or auto save written
    GameSaved,
    /// An action ran to completion
    ActionCompleted { name: String },
    /// Validation refused the action; nothing changed
    ActionUnavailable,
    /// One-hop move succeeded
    MovedTo { name: String },
    /// Hunger or thirst hit zero; health is bleeding
    StarvationWarning,
    /// Energy at or below the warning threshold
    ExhaustionWarning,
    /// Terminal: health exhausted, run over, save erased
    GameOver { reason: String },
}

impl EngineEvent {
    /// User-facing message for hosts that just want text
    pub fn message(&self) -> String {
        match self {
            EngineEvent::GameStarted => {
                "Welcome to your new home! Time to start a new life...".to_string()
            }
            EngineEvent::GameLoaded => "Game loaded".to_string(),
            EngineEvent::GameSaved => "Game saved".to_string(),
            EngineEvent::ActionCompleted { name } => format!("{name} - done"),
            EngineEvent::ActionUnavailable => "You can't do that right now".to_string(),
            EngineEvent::MovedTo { name } => format!("Moved to: {name}"),
            EngineEvent::StarvationWarning => {
                "You are suffering from hunger or thirst!".to_string()
            }
            EngineEvent::ExhaustionWarning => "You are completely worn out...".to_string(),
            EngineEvent::GameOver { reason } => format!("Game over: {reason}"),
        }
    }
}
