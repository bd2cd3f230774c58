//! Core types shared across the engine

pub mod clock;
pub mod config;
pub mod error;

pub use clock::{Clock, ClockState, TimeChange, TimePeriod};
pub use config::EngineConfig;
pub use error::{GameError, Result};

/// Unix timestamp in seconds, used for save metadata and visit stamps
pub fn now_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
