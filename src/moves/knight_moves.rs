use crate::game_state::board::Board;
use crate::game_state::chess_types::{column_of, offset_square, Square};
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::Move;

pub const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

/// Offsets that would wrap rows for a knight standing on the given column.
#[inline]
fn is_column_exclusion(column: u8, offset: i8) -> bool {
    match column {
        0 => matches!(offset, -17 | -10 | 6 | 15),
        1 => matches!(offset, -10 | 6),
        6 => matches!(offset, -6 | 10),
        7 => matches!(offset, -15 | -6 | 10 | 17),
        _ => false,
    }
}

#[inline]
pub fn knight_step(square: Square, offset: i8) -> Option<Square> {
    if is_column_exclusion(column_of(square), offset) {
        return None;
    }
    offset_square(square, offset)
}

pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |offset| knight_step(square, offset))
}

pub fn generate_knight_moves(board: &Board, piece: &Piece, out: &mut Vec<Move>) {
    for to in knight_targets(piece.square) {
        match board.occupant(to) {
            None => out.push(Move::simple(*piece, to)),
            Some(occupant) if occupant.is_opponent_of(piece) => {
                out.push(Move::capture(*piece, to, *occupant));
            }
            Some(_) => {}
        }
    }
}
