use thiserror::Error;

use crate::board::Action;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GameError {
    #[error("invalid move: position {action} is already taken")]
    InvalidMove { action: Action },

    #[error("invalid action {value}: cells are numbered 1-9")]
    InvalidAction { value: u8 },

    #[error("invalid action '{input}': expected a cell number 1-9")]
    UnparsableAction { input: String },

    #[error("invalid board '{input}': {reason}")]
    InvalidBoard { input: String, reason: String },

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("game aborted by player")]
    Aborted,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
