//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by parsing, board editing,
//! move execution and check detection. Variants carry the offending value so
//! callers can log or display precise diagnostics.
//!
//! Usage guidelines:
//! - Parsing variants (`InvalidCoordinate`, `MalformedPosition`) are raised at
//!   the boundary and should be reported to whoever supplied the input.
//! - `IllegalMove` is an expected, recoverable outcome during play; the board
//!   is left untouched and the caller should re-prompt.
//! - `MissingKing` and `EmptyOrigin` signal a corrupted position. Nothing the
//!   engine computes afterwards can be trusted, so callers should stop.

use thiserror::Error;

use crate::game_state::chess_types::{Side, Square};

/// Convenience alias for results carrying [`ChessErrors`].
pub type ChessResult<T> = Result<T, ChessErrors>;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A square argument fell outside `0..64`.
    #[error("square index {0} is outside the board")]
    InvalidSquare(i32),

    /// An algebraic coordinate such as `e4` could not be parsed.
    #[error("invalid coordinate: '{0}'")]
    InvalidCoordinate(String),

    /// The requested move is not in the mover's current legal-move set.
    ///
    /// Payload: the rendered move.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A position string was structurally invalid or described an impossible
    /// setup (for example a side without a king).
    #[error("malformed position: {0}")]
    MalformedPosition(String),

    /// Check detection found no king for the given side.
    #[error("no {0} king on the board")]
    MissingKing(Side),

    /// A move referenced an origin square that holds no piece.
    #[error("no piece on origin square {0}")]
    EmptyOrigin(Square),
}
