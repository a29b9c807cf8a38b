//! Centralized error types for the game.
//!
//! The simulation itself has no fatal conditions; errors only arise while decoding
//! a board or loading configuration, before the first tick runs.

/// Main error type for the game.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Error type for board decoding.
///
/// Unknown characters are not errors; they decode to empty tiles.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Board has no rows")]
    EmptyBoard,
    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
}

/// Errors raised while loading configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Extract(Box::new(error))
    }
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
