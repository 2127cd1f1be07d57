use std::path::PathBuf;

/// Why a drop was turned away. Rejections are ordinary game events and
/// leave the engine state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is out of range")]
    InvalidColumn,

    #[error("game is already over")]
    GameOver,

    #[error("column is full")]
    ColumnFull,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("failed to open log file {path}: {source}")]
    LogInit {
        path: PathBuf,
        source: std::io::Error,
    },
}
