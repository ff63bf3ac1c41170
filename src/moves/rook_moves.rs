use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::{generate_sliding_moves, ORTHOGONAL_OFFSETS};

pub const ROOK_OFFSETS: [i8; 4] = ORTHOGONAL_OFFSETS;

pub fn generate_rook_moves(board: &Board, piece: &Piece, out: &mut Vec<Move>) {
    generate_sliding_moves(board, piece, &ROOK_OFFSETS, out);
}
