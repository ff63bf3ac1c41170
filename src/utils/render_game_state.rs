//! Terminal-oriented Unicode board renderer.
//!
//! Draws rank 8 at the top and file a on the left, with the side to move
//! and the position string underneath, for debugging and diagnostics.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank_char = char::from(b'8' - row);
        out.push(rank_char);
        out.push(' ');

        for column in 0..8u8 {
            match board.occupant(row * 8 + column) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if column < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board plus a status line, as printed by the diagnostic tools.
pub fn render_game_state(board: &Board) -> String {
    format!(
        "{}\n{} to move\n{}",
        render_board(board),
        board.side_to_move(),
        board.to_fen()
    )
}

fn piece_to_unicode(piece: &Piece) -> char {
    match (piece.side, piece.kind) {
        (Side::White, PieceKind::Pawn) => '♙',
        (Side::White, PieceKind::Knight) => '♘',
        (Side::White, PieceKind::Bishop) => '♗',
        (Side::White, PieceKind::Rook) => '♖',
        (Side::White, PieceKind::Queen) => '♕',
        (Side::White, PieceKind::King) => '♔',
        (Side::Black, PieceKind::Pawn) => '♟',
        (Side::Black, PieceKind::Knight) => '♞',
        (Side::Black, PieceKind::Bishop) => '♝',
        (Side::Black, PieceKind::Rook) => '♜',
        (Side::Black, PieceKind::Queen) => '♛',
        (Side::Black, PieceKind::King) => '♚',
    }
}
