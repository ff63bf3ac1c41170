//! Canonical chess-rule constants.
//!
//! Static literals describing the standard starting position, pawn home and
//! promotion rows, and castling geometry. Rows count from the top of the
//! board, so row 0 is rank 8.

use crate::game_state::chess_types::{CastleWing, Side, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Row a side's pawns start on and may double-push from.
#[inline]
pub const fn pawn_home_row(side: Side) -> u8 {
    match side {
        Side::White => 6,
        Side::Black => 1,
    }
}

/// Row a side's pawns promote on.
#[inline]
pub const fn promotion_row(side: Side) -> u8 {
    match side {
        Side::White => 0,
        Side::Black => 7,
    }
}

/// King origin square for castling.
#[inline]
pub const fn king_home_square(side: Side) -> Square {
    match side {
        Side::White => 60,
        Side::Black => 4,
    }
}

/// Fixed squares involved in one castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleGeometry {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

impl CastleGeometry {
    /// Squares strictly between king and rook; all must be empty.
    pub fn between(&self) -> impl Iterator<Item = Square> {
        let (low, high) = if self.king_from < self.rook_from {
            (self.king_from, self.rook_from)
        } else {
            (self.rook_from, self.king_from)
        };
        (low + 1)..high
    }

    /// Squares the king stands on or crosses, origin and destination
    /// included; none may be attacked.
    pub fn king_path(&self) -> impl Iterator<Item = Square> {
        let (low, high) = if self.king_from < self.king_to {
            (self.king_from, self.king_to)
        } else {
            (self.king_to, self.king_from)
        };
        low..=high
    }
}

/// Castle squares for a side and wing.
pub const fn castle_geometry(side: Side, wing: CastleWing) -> CastleGeometry {
    let king_from = king_home_square(side);
    match wing {
        CastleWing::KingSide => CastleGeometry {
            king_from,
            king_to: king_from + 2,
            rook_from: king_from + 3,
            rook_to: king_from + 1,
        },
        CastleWing::QueenSide => CastleGeometry {
            king_from,
            king_to: king_from - 2,
            rook_from: king_from - 4,
            rook_to: king_from - 1,
        },
    }
}

/// The wing whose rook starts on `square`, if any.
pub fn rook_home_wing(side: Side, square: Square) -> Option<CastleWing> {
    CastleWing::BOTH
        .into_iter()
        .find(|&wing| castle_geometry(side, wing).rook_from == square)
}
