//! Pawn moves: single and double pushes, diagonal captures, promotion and
//! en passant.
//!
//! Pawns advance by `8 * direction`, so White walks toward row 0 and Black
//! toward row 7. A push or capture landing on the promotion row is emitted
//! once as [`MoveKind::Promotion`] with no piece chosen.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_home_row, promotion_row};
use crate::game_state::chess_types::{offset_square, row_of, PieceKind, Square};
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::moves::sliding_moves::step;

/// Diagonal offsets (scaled by direction) a pawn captures along.
pub const PAWN_CAPTURE_OFFSETS: [i8; 2] = [7, 9];

/// Squares a pawn of `piece.side` standing on `square` attacks.
pub fn pawn_attack_targets(piece: &Piece, square: Square) -> impl Iterator<Item = Square> {
    let direction = piece.side.direction();
    PAWN_CAPTURE_OFFSETS
        .into_iter()
        .filter_map(move |offset| step(square, offset * direction))
}

pub fn generate_pawn_moves(board: &Board, piece: &Piece, out: &mut Vec<Move>) {
    let side = piece.side;
    let forward = 8 * side.direction();
    let last_row = promotion_row(side);

    if let Some(one) = offset_square(piece.square, forward) {
        if board.occupant(one).is_none() {
            if row_of(one) == last_row {
                out.push(promotion(piece, one, None));
            } else {
                out.push(Move::simple(*piece, one));

                if row_of(piece.square) == pawn_home_row(side) && !piece.has_moved() {
                    if let Some(two) = offset_square(one, forward) {
                        if board.occupant(two).is_none() {
                            out.push(Move::new(
                                *piece,
                                two,
                                MoveKind::DoublePawnPush { jumped: one },
                            ));
                        }
                    }
                }
            }
        }
    }

    for target in pawn_attack_targets(piece, piece.square) {
        match board.occupant(target) {
            Some(victim) if victim.is_opponent_of(piece) => {
                if row_of(target) == last_row {
                    out.push(promotion(piece, target, Some(*victim)));
                } else {
                    out.push(Move::capture(*piece, target, *victim));
                }
            }
            Some(_) => {}
            None => {
                if let Some(mv) = en_passant(board, piece, target) {
                    out.push(mv);
                }
            }
        }
    }
}

#[inline]
fn promotion(piece: &Piece, to: Square, captured: Option<Piece>) -> Move {
    Move::new(
        *piece,
        to,
        MoveKind::Promotion {
            captured,
            promote_to: None,
        },
    )
}

/// En passant onto `target` is open only when it is the board's en-passant
/// square and the pawn that just jumped over it is still behind it.
fn en_passant(board: &Board, piece: &Piece, target: Square) -> Option<Move> {
    if board.en_passant_target() != Some(target) {
        return None;
    }
    let victim_square = offset_square(target, -8 * piece.side.direction())?;
    let victim = board.occupant(victim_square)?;
    if victim.kind != PieceKind::Pawn || !victim.is_opponent_of(piece) {
        return None;
    }
    Some(Move::new(
        *piece,
        target,
        MoveKind::EnPassantCapture { captured: *victim },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Side;

    fn pawn_moves(fen: &str, square: Square) -> Vec<Move> {
        let board = Board::from_fen(fen).expect("test FEN should parse");
        let pawn = *board.occupant(square).expect("pawn on square");
        let mut out = Vec::new();
        generate_pawn_moves(&board, &pawn, &mut out);
        out
    }

    #[test]
    fn home_row_pawn_pushes_one_or_two() {
        let moves = pawn_moves(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            52,
        );
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|mv| mv.to == 44 && mv.kind == MoveKind::Simple));
        assert!(moves
            .iter()
            .any(|mv| mv.to == 36 && mv.kind == MoveKind::DoublePawnPush { jumped: 44 }));
    }

    #[test]
    fn black_pawn_moves_down_the_board() {
        let moves = pawn_moves(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1",
            11,
        );
        let mut targets: Vec<_> = moves.iter().map(|mv| mv.to).collect();
        targets.sort();
        assert_eq!(targets, vec![19, 27]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", 52);
        assert!(moves.is_empty());
    }

    #[test]
    fn far_square_block_stops_only_double_push() {
        let moves = pawn_moves("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", 52);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, 44);
    }

    #[test]
    fn pawn_off_home_row_pushes_once() {
        let moves = pawn_moves("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1", 36);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, 28);
    }

    #[test]
    fn captures_only_opponents_and_never_wrap() {
        // a-file pawn with pieces on b3 (enemy) and h4 (wrap target).
        let moves = pawn_moves("4k3/8/8/8/7p/1p6/P7/4K3 w - - 0 1", 48);
        let captures: Vec<_> = moves.iter().filter(|mv| mv.is_capture()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].to, 41);
    }

    #[test]
    fn promotion_push_and_capture_are_single_entries() {
        let moves = pawn_moves("1r5k/P7/8/8/8/8/8/K7 w - - 0 1", 8);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.is_promotion()));
        let capture = moves.iter().find(|mv| mv.to == 1).expect("capture on b8");
        assert!(matches!(
            capture.kind,
            MoveKind::Promotion { captured: Some(p), promote_to: None } if p.kind == PieceKind::Rook
        ));
    }

    #[test]
    fn en_passant_requires_target_square() {
        let fen = "8/8/8/2k5/2pP4/8/B7/4K3 b - d3 0 3";
        let moves = pawn_moves(fen, 34);
        let ep = moves
            .iter()
            .find(|mv| mv.is_en_passant())
            .expect("en passant onto d3");
        assert_eq!(ep.to, 43);
        assert_eq!(ep.captured_piece().map(|p| p.square), Some(35));

        let stale = pawn_moves("8/8/8/2k5/2pP4/8/B7/4K3 b - - 0 3", 34);
        assert!(stale.iter().all(|mv| !mv.is_en_passant()));
    }

    #[test]
    fn attack_targets_follow_direction() {
        let white = Piece::new(PieceKind::Pawn, Side::White, 36);
        let black = Piece::new(PieceKind::Pawn, Side::Black, 36);
        let mut w: Vec<_> = pawn_attack_targets(&white, 36).collect();
        let mut b: Vec<_> = pawn_attack_targets(&black, 36).collect();
        w.sort();
        b.sort();
        assert_eq!(w, vec![27, 29]);
        assert_eq!(b, vec![43, 45]);
    }
}
