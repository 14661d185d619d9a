use std::path::PathBuf;

/// Errors signalled by the game engine.
///
/// All of these are recoverable conditions returned to the caller; a rejected
/// operation never mutates board or game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board dimensions {height}x{width} are too small (minimum is 4x4)")]
    InvalidDimensions { height: usize, width: usize },

    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is over; no further moves are accepted")]
    GameOver,

    #[error("cell ({row}, {column}) is outside the board")]
    OutOfBounds { row: usize, column: usize },
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
}
