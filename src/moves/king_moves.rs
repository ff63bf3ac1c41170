use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castle_geometry, king_home_square};
use crate::game_state::chess_types::{CastleWing, PieceKind, Square};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::moves::sliding_moves::{step, ALL_DIRECTION_OFFSETS};

pub const KING_OFFSETS: [i8; 8] = ALL_DIRECTION_OFFSETS;

pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |offset| step(square, offset))
}

pub fn generate_king_moves(board: &Board, piece: &Piece, out: &mut Vec<Move>) {
    for to in king_targets(piece.square) {
        match board.occupant(to) {
            None => out.push(Move::simple(*piece, to)),
            Some(occupant) if occupant.is_opponent_of(piece) => {
                out.push(Move::capture(*piece, to, *occupant));
            }
            Some(_) => {}
        }
    }

    generate_castling_moves(board, piece, out);
}

/// Castling is re-verified on every generation: the right must still be
/// held, neither king nor rook may have moved, the squares between them
/// must be empty, and no square on the king's path may be attacked.
fn generate_castling_moves(board: &Board, king: &Piece, out: &mut Vec<Move>) {
    let side = king.side;
    if king.has_moved() || king.square != king_home_square(side) {
        return;
    }

    let enemy = side.opposite();
    for wing in CastleWing::BOTH {
        if !board.has_castling_right(side, wing) {
            continue;
        }

        let geometry = castle_geometry(side, wing);
        let rook_ready = board.occupant(geometry.rook_from).is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.side == side && !rook.has_moved()
        });
        if !rook_ready {
            continue;
        }

        if geometry.between().any(|sq| board.occupant(sq).is_some()) {
            continue;
        }

        if geometry
            .king_path()
            .any(|sq| is_square_attacked(board, sq, enemy))
        {
            continue;
        }

        out.push(Move::new(
            *king,
            geometry.king_to,
            MoveKind::Castle {
                wing,
                rook_from: geometry.rook_from,
                rook_to: geometry.rook_to,
            },
        ));
    }
}
