use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::{generate_sliding_moves, ALL_DIRECTION_OFFSETS};

pub const QUEEN_OFFSETS: [i8; 8] = ALL_DIRECTION_OFFSETS;

pub fn generate_queen_moves(board: &Board, piece: &Piece, out: &mut Vec<Move>) {
    generate_sliding_moves(board, piece, &QUEEN_OFFSETS, out);
}
