//! Pseudo-legal generation shared by the legal generator, perft and check
//! queries: every move each piece could make, ignoring its own king.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Side};
use crate::game_state::piece::Piece;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

#[inline]
pub fn generate_piece_moves(board: &Board, piece: &Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, piece, out),
        PieceKind::Knight => generate_knight_moves(board, piece, out),
        PieceKind::Bishop => generate_bishop_moves(board, piece, out),
        PieceKind::Rook => generate_rook_moves(board, piece, out),
        PieceKind::Queen => generate_queen_moves(board, piece, out),
        PieceKind::King => generate_king_moves(board, piece, out),
    }
}

pub fn generate_pseudo_legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::<Move>::with_capacity(64);
    for piece in board.pieces(side) {
        generate_piece_moves(board, piece, &mut out);
    }
    out
}
