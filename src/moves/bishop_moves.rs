use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::{generate_sliding_moves, DIAGONAL_OFFSETS};

pub const BISHOP_OFFSETS: [i8; 4] = DIAGONAL_OFFSETS;

pub fn generate_bishop_moves(board: &Board, piece: &Piece, out: &mut Vec<Move>) {
    generate_sliding_moves(board, piece, &BISHOP_OFFSETS, out);
}
