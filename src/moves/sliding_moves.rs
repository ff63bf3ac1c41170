//! Shared ray walking for bishops, rooks and queens.
//!
//! Directions are flat index offsets. A step is refused when the current
//! square sits on the a- or h-file and the offset would wrap onto the far
//! side of the board, or when the result leaves `0..64`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{column_of, offset_square, Square};
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::Move;

/// Up, left, right, down.
pub const ORTHOGONAL_OFFSETS: [i8; 4] = [-8, -1, 1, 8];
/// Up-left, up-right, down-left, down-right.
pub const DIAGONAL_OFFSETS: [i8; 4] = [-9, -7, 7, 9];
pub const ALL_DIRECTION_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

#[inline]
pub fn is_first_column_exclusion(square: Square, offset: i8) -> bool {
    column_of(square) == 0 && matches!(offset, -9 | -1 | 7)
}

#[inline]
pub fn is_eighth_column_exclusion(square: Square, offset: i8) -> bool {
    column_of(square) == 7 && matches!(offset, -7 | 1 | 9)
}

/// One king-sized step from `square` along `offset`, if it stays on the
/// board without wrapping.
#[inline]
pub fn step(square: Square, offset: i8) -> Option<Square> {
    if is_first_column_exclusion(square, offset) || is_eighth_column_exclusion(square, offset) {
        return None;
    }
    offset_square(square, offset)
}

/// Walks every ray in `offsets`, emitting quiet moves onto empty squares and
/// a capture on the first opposing piece met.
pub fn generate_sliding_moves(board: &Board, piece: &Piece, offsets: &[i8], out: &mut Vec<Move>) {
    for &offset in offsets {
        let mut current = piece.square;
        while let Some(target) = step(current, offset) {
            match board.occupant(target) {
                None => out.push(Move::simple(*piece, target)),
                Some(occupant) => {
                    if occupant.is_opponent_of(piece) {
                        out.push(Move::capture(*piece, target, *occupant));
                    }
                    break;
                }
            }
            current = target;
        }
    }
}

/// First piece met walking from `square` along `offset`.
pub fn first_occupant_along(board: &Board, square: Square, offset: i8) -> Option<&Piece> {
    let mut current = square;
    while let Some(target) = step(current, offset) {
        if let Some(occupant) = board.occupant(target) {
            return Some(occupant);
        }
        current = target;
    }
    None
}
