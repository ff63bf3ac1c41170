//! Attack and check detection.
//!
//! Attacks are found in reverse: from the target square, look outward for a
//! pawn, knight or king of the attacking side on the squares it would strike
//! from, then walk each ray for the first slider.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::PAWN_CAPTURE_OFFSETS;
use crate::moves::sliding_moves::{first_occupant_along, step, DIAGONAL_OFFSETS, ORTHOGONAL_OFFSETS};

#[inline]
pub fn is_king_in_check(board: &Board, side: Side) -> ChessResult<bool> {
    let king = board.king_square(side)?;
    Ok(is_square_attacked(board, king, side.opposite()))
}

/// True if any piece of `attacker` could capture on `square`. Pawn pushes
/// and castling never attack.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Side) -> bool {
    let holds = |sq: Square, kind: PieceKind| {
        board
            .occupant(sq)
            .is_some_and(|p| p.side == attacker && p.kind == kind)
    };

    let direction = attacker.direction();
    if PAWN_CAPTURE_OFFSETS
        .into_iter()
        .filter_map(|offset| step(square, -offset * direction))
        .any(|sq| holds(sq, PieceKind::Pawn))
    {
        return true;
    }

    if knight_targets(square).any(|sq| holds(sq, PieceKind::Knight)) {
        return true;
    }

    if KING_OFFSETS
        .into_iter()
        .filter_map(|offset| step(square, offset))
        .any(|sq| holds(sq, PieceKind::King))
    {
        return true;
    }

    let slider_on_ray = |offsets: &[i8], kind: PieceKind| {
        offsets.iter().any(|&offset| {
            first_occupant_along(board, square, offset).is_some_and(|p| {
                p.side == attacker && (p.kind == kind || p.kind == PieceKind::Queen)
            })
        })
    };

    slider_on_ray(&DIAGONAL_OFFSETS, PieceKind::Bishop)
        || slider_on_ray(&ORTHOGONAL_OFFSETS, PieceKind::Rook)
}

/// Every piece of `attacker` bearing on `square`, as `(origin, kind)`.
pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker: Side,
) -> Vec<(Square, PieceKind)> {
    let mut attackers = Vec::<(Square, PieceKind)>::new();
    let mut collect = |sq: Square, kinds: &[PieceKind]| {
        if let Some(p) = board.occupant(sq) {
            if p.side == attacker && kinds.contains(&p.kind) {
                attackers.push((sq, p.kind));
            }
        }
    };

    let direction = attacker.direction();
    for offset in PAWN_CAPTURE_OFFSETS {
        if let Some(sq) = step(square, -offset * direction) {
            collect(sq, &[PieceKind::Pawn]);
        }
    }

    for sq in knight_targets(square) {
        collect(sq, &[PieceKind::Knight]);
    }

    for offset in DIAGONAL_OFFSETS {
        if let Some(p) = first_occupant_along(board, square, offset) {
            collect(p.square, &[PieceKind::Bishop, PieceKind::Queen]);
        }
    }

    for offset in ORTHOGONAL_OFFSETS {
        if let Some(p) = first_occupant_along(board, square, offset) {
            collect(p.square, &[PieceKind::Rook, PieceKind::Queen]);
        }
    }

    for offset in KING_OFFSETS {
        if let Some(sq) = step(square, offset) {
            collect(sq, &[PieceKind::King]);
        }
    }

    attackers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChessErrors;

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn starting_position_has_no_checks() {
        let board = Board::new_game();
        assert_eq!(is_king_in_check(&board, Side::White), Ok(false));
        assert_eq!(is_king_in_check(&board, Side::Black), Ok(false));
        // e3 is covered by the d2 and f2 pawns, e4 is not.
        assert!(is_square_attacked(&board, 44, Side::White));
        assert!(!is_square_attacked(&board, 36, Side::White));
    }

    #[test]
    fn bishop_gives_check_along_diagonal() {
        // Black bishop on a4 looks down a4-d1 at the white king.
        let board = board("4k3/8/8/8/b7/8/8/3KQ3 w - - 0 1");
        assert_eq!(is_king_in_check(&board, Side::White), Ok(true));
        assert_eq!(
            attackers_to_square(&board, 59, Side::Black),
            vec![(32, PieceKind::Bishop)]
        );
    }

    #[test]
    fn adjacent_queen_checks_king() {
        let board = board("4k3/4Q3/8/8/8/8/8/4K3 b - - 0 1");
        assert_eq!(is_king_in_check(&board, Side::Black), Ok(true));
        assert_eq!(is_king_in_check(&board, Side::White), Ok(false));
    }

    #[test]
    fn blocked_ray_does_not_attack() {
        let board = board("4k3/8/4p3/8/8/8/8/4RK2 b - - 0 1");
        assert_eq!(is_king_in_check(&board, Side::Black), Ok(false));
        assert!(is_square_attacked(&board, 20, Side::White));
    }

    #[test]
    fn pawn_attacks_are_directional() {
        // White pawn on e4 hits d5 and f5 but not d3.
        let board = board("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
        assert!(is_square_attacked(&board, 27, Side::White));
        assert!(is_square_attacked(&board, 29, Side::White));
        assert!(!is_square_attacked(&board, 43, Side::White));
        assert!(!is_square_attacked(&board, 28, Side::White));
    }

    #[test]
    fn knight_double_check_lists_both_attackers() {
        let board = board("4k3/8/3N4/8/8/8/8/K3R3 b - - 0 1");
        let attackers = attackers_to_square(&board, 4, Side::White);
        assert_eq!(attackers, vec![(19, PieceKind::Knight), (60, PieceKind::Rook)]);
    }

    #[test]
    fn check_matches_pseudo_legal_targets() {
        let board = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        for side in Side::BOTH {
            let targets: Vec<_> = board
                .pseudo_legal_moves(side)
                .into_iter()
                .filter(|mv| mv.is_capture() && !mv.is_en_passant())
                .map(|mv| mv.to)
                .collect();
            for to in targets {
                assert!(is_square_attacked(&board, to, side), "{side} capture onto {to}");
            }
        }
    }

    #[test]
    fn missing_king_is_an_error() {
        let mut board = Board::new_game();
        board.set_piece_at(4, None).unwrap();
        assert_eq!(
            is_king_in_check(&board, Side::Black),
            Err(ChessErrors::MissingKing(Side::Black))
        );
    }
}
