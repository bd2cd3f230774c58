use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("Catalog validation failed: {0}")]
    InvalidCatalog(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
