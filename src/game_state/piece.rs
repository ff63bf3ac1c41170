//! A single chessman as owned by the board.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Side, Square};
use crate::utils::algebraic::square_to_coordinate;

/// Identity, location and move history of one piece.
///
/// The board keeps `square` in sync with the slot the piece occupies.
/// `move_count` rises on every execute and falls on every undo, so
/// `has_moved` stays exact across undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub square: Square,
    pub move_count: u16,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, side: Side, square: Square) -> Self {
        Self {
            kind,
            side,
            square,
            move_count: 0,
        }
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    #[inline]
    pub fn is_opponent_of(&self, other: &Piece) -> bool {
        self.side != other.side
    }

    /// Position-string letter: uppercase for White, lowercase for Black.
    pub fn fen_char(&self) -> char {
        let letter = self.kind.letter();
        match self.side {
            Side::White => letter.to_ascii_uppercase(),
            Side::Black => letter,
        }
    }

    pub fn from_fen_char(ch: char, square: Square) -> Option<Self> {
        let side = if ch.is_ascii_uppercase() {
            Side::White
        } else if ch.is_ascii_lowercase() {
            Side::Black
        } else {
            return None;
        };
        PieceKind::from_letter(ch).map(|kind| Piece::new(kind, side, square))
    }
}

/// Renders as letter plus coordinate, e.g. `K e1`.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match square_to_coordinate(self.square) {
            Ok(coordinate) => write!(f, "{} {}", self.fen_char(), coordinate),
            Err(_) => write!(f, "{} ?", self.fen_char()),
        }
    }
}
