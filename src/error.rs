//! Centralized error types for the simulation core.
//!
//! Errors can only arise while constructing a [`crate::game::Game`]; the
//! per-tick update path is total and never fails.

use thiserror::Error;

/// Main error type for the simulation core.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Board parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Error type for board parsing.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0:?}")]
    UnknownCharacter(char),

    #[error("Board row {row} is {len} cells wide, expected {expected}")]
    BadRowWidth { row: usize, len: usize, expected: usize },

    #[error("Board has {0} rows, expected {1}")]
    BadRowCount(usize, usize),

    #[error("Board must contain exactly one player spawn, found {0}")]
    BadSpawnCount(usize),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
