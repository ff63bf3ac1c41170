//! Full legal move generation pipeline.
//!
//! Collects pseudo-legal moves for the side to move, plays each on a scratch
//! copy of the board, and keeps those that leave the mover's own king
//! unattacked. The scratch copy is taken once per call and every candidate
//! is unmade before the next is tried.

use log::trace;

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::generate_pseudo_legal_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board) -> ChessResult<Vec<Move>> {
        let side = board.side_to_move();
        // Fail fast on a position without a king to protect.
        board.king_square(side)?;

        let pseudo = generate_pseudo_legal_moves(board, side);
        let mut scratch = board.snapshot();
        let mut legal = Vec::<Move>::with_capacity(pseudo.len());

        for mv in pseudo {
            let undo = scratch.make_move(&mv)?;
            let exposed = is_king_in_check(&scratch, side);
            scratch.unmake_move(&mv, &undo)?;

            if exposed? {
                trace!("filtered {mv}: leaves {side} king attacked");
                continue;
            }
            legal.push(mv);
        }

        Ok(legal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Side;
    use crate::moves::move_descriptions::MoveKind;

    fn legal(fen: &str) -> Vec<Move> {
        let board = Board::from_fen(fen).expect("test FEN should parse");
        LegalMoveGenerator
            .generate_legal_moves(&board)
            .expect("generation should succeed")
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        assert_eq!(legal("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").len(), 20);
    }

    #[test]
    fn king_in_check_must_resolve_it() {
        // Bishop on a4 checks the d1 king and the e1 queen cannot interpose.
        let moves = legal("4k3/8/8/8/b7/8/8/3KQ3 w - - 0 1");
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|mv| mv.from == 59));
        let board = Board::from_fen("4k3/8/8/8/b7/8/8/3KQ3 w - - 0 1").unwrap();
        for mv in &moves {
            let mut after = board.snapshot();
            after.make_move(mv).unwrap();
            assert_eq!(after.is_checked(Side::White), Ok(false), "{mv}");
        }
    }

    #[test]
    fn pinned_en_passant_is_filtered() {
        // Taking en passant would open the fifth rank to the h5 rook.
        let moves = legal("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1");
        assert!(moves.iter().all(|mv| !mv.is_en_passant()));
    }

    #[test]
    fn en_passant_that_is_safe_is_kept() {
        let moves = legal("8/8/8/3pP3/8/8/8/K6k w - d6 0 1");
        assert!(moves
            .iter()
            .any(|mv| matches!(mv.kind, MoveKind::EnPassantCapture { .. }) && mv.to == 19));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let moves = legal("8/8/8/8/8/8/r7/4K2k w - - 0 1");
        assert!(moves.iter().all(|mv| mv.to != 51 && mv.to != 52 && mv.to != 53));
    }

    #[test]
    fn checkmated_side_has_no_moves() {
        assert!(legal("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").is_empty());
    }

    #[test]
    fn generation_leaves_board_untouched() {
        let board =
            Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
                .unwrap();
        let before = board.clone();
        let moves = LegalMoveGenerator.generate_legal_moves(&board).unwrap();
        assert_eq!(moves.len(), 48);
        assert_eq!(board, before);
    }
}
