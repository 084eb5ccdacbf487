use std::path::PathBuf;

use crate::board::Side;

/// Errors surfaced by move resolution and the player registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Invalid number for pit index: {0}")]
    InvalidPit(i64),

    #[error("Game is ended")]
    GameAlreadyEnded,

    #[error("Invalid player {0}. Enter 1 for player 1 and 2 for player 2.")]
    InvalidPlayer(i64),

    #[error("Game has not ended")]
    GameNotEnded,

    #[error("This game of Mancala already contains two players. No more players can be added.")]
    PlayerCapacityExceeded,

    #[error("{0} has not been registered")]
    PlayerNotRegistered(Side),

    #[error("it is {expected}'s turn, not {got}'s")]
    OutOfTurn { expected: Side, got: Side },

    #[error("pit {0} is empty")]
    EmptyPit(u8),
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
