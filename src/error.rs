//! Error types for the ttt-search crate

use thiserror::Error;

use crate::tictactoe::Action;

/// Why a move was rejected by the rules engine
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    #[error("outside the 3x3 board")]
    OutOfRange,

    #[error("cell is already occupied")]
    Occupied,
}

/// Main error type for the ttt-search crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move at {action}: {reason}")]
    IllegalMove {
        action: Action,
        reason: IllegalMoveReason,
    },

    #[error("game already over")]
    GameOver,

    #[error("no legal actions available on board '{board}'")]
    NoLegalActions { board: String },

    #[error("{strategy} proposed no action for non-terminal board '{board}'")]
    NoActionProposed { strategy: String, board: String },

    #[error("wrong board length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid strategy '{input}'. Expected one of: {expected}")]
    ParseStrategy { input: String, expected: String },

    #[error("invalid player '{input}' (expected 'x' or 'o')")]
    ParsePlayer { input: String },

    #[error("invalid action '{input}' (expected 'row col' with indices 0-2)")]
    ParseAction { input: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

impl Error {
    /// Whether this error is a rejected move (out of range or occupied cell)
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, Error::IllegalMove { .. })
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
