//! Execute and undo for every move variant.
//!
//! `execute` and `undo` are exact inverses when undo runs immediately after
//! execute on the same board: piece placement, move counters, castling
//! rights, en-passant target, clocks and side to move all come back.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::rook_home_wing;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::game_state::undo_state::UndoState;
use crate::moves::move_descriptions::{Move, MoveKind, PromotionPiece};

impl Move {
    /// Moves pieces for this move, bumps the move counters of every piece
    /// that moved, and updates castling rights and the en-passant target.
    /// Side to move and clocks are left to the board.
    ///
    /// Returns the metadata needed by [`Move::undo`].
    pub fn execute(&self, board: &mut Board) -> ChessResult<UndoState> {
        let undo = UndoState::capture(board);

        let mut mover = board.lift(self.from)?;
        mover.move_count += 1;

        match self.kind {
            MoveKind::Simple | MoveKind::DoublePawnPush { .. } => {
                board.replace(self.to, Some(mover));
            }
            MoveKind::Capture { .. } => {
                board.replace(self.to, Some(mover));
            }
            MoveKind::Castle {
                rook_from, rook_to, ..
            } => {
                let mut rook = board.lift(rook_from)?;
                rook.move_count += 1;
                board.replace(self.to, Some(mover));
                board.replace(rook_to, Some(rook));
            }
            MoveKind::Promotion { promote_to, .. } => {
                let choice = promote_to.unwrap_or(PromotionPiece::Queen);
                let mut promoted = Piece::new(choice.kind(), mover.side, self.to);
                promoted.move_count = 1;
                board.replace(self.to, Some(promoted));
            }
            MoveKind::EnPassantCapture { captured } => {
                board.replace(captured.square, None);
                board.replace(self.to, Some(mover));
            }
        }

        board.castling_rights = self.revoke_castling_rights(board.castling_rights);
        board.en_passant_target = match self.kind {
            MoveKind::DoublePawnPush { jumped } => Some(jumped),
            _ => None,
        };

        Ok(undo)
    }

    /// Reverses [`Move::execute`] and restores the metadata in `undo`.
    pub fn undo(&self, board: &mut Board, undo: &UndoState) -> ChessResult<()> {
        match self.kind {
            MoveKind::Simple | MoveKind::DoublePawnPush { .. } => {
                let mover = self.retreat(board)?;
                board.replace(self.from, Some(mover));
            }
            MoveKind::Capture { captured } => {
                let mover = self.retreat(board)?;
                board.replace(self.from, Some(mover));
                board.replace(self.to, Some(captured));
            }
            MoveKind::Castle {
                rook_from, rook_to, ..
            } => {
                let king = self.retreat(board)?;
                let mut rook = board.lift(rook_to)?;
                rook.move_count = rook.move_count.saturating_sub(1);
                board.replace(self.from, Some(king));
                board.replace(rook_from, Some(rook));
            }
            MoveKind::Promotion { captured, .. } => {
                board.lift(self.to)?;
                board.replace(self.to, captured);
                board.replace(self.from, Some(self.piece));
            }
            MoveKind::EnPassantCapture { captured } => {
                let mover = self.retreat(board)?;
                board.replace(self.from, Some(mover));
                board.replace(captured.square, Some(captured));
            }
        }

        board.side_to_move = undo.prev_side_to_move;
        board.castling_rights = undo.prev_castling_rights;
        board.en_passant_target = undo.prev_en_passant_target;
        board.halfmove_clock = undo.prev_halfmove_clock;
        board.fullmove_number = undo.prev_fullmove_number;
        Ok(())
    }

    /// Lifts the mover off its target square and rolls its counter back.
    fn retreat(&self, board: &mut Board) -> ChessResult<Piece> {
        let mut mover = board.lift(self.to)?;
        mover.move_count = mover.move_count.saturating_sub(1);
        Ok(mover)
    }

    /// Castling rights after this move. A king move drops both wings of its
    /// side, a rook leaving its corner drops that wing, and a capture on a
    /// rook corner drops the victim's wing.
    fn revoke_castling_rights(&self, mut rights: CastlingRights) -> CastlingRights {
        let side = self.piece.side;
        match self.piece.kind {
            PieceKind::King => rights &= !castling_flags_for(side),
            PieceKind::Rook => {
                if let Some(wing) = rook_home_wing(side, self.from) {
                    rights &= !castling_flag(side, wing);
                }
            }
            _ => {}
        }

        if let Some(captured) = self.captured_piece() {
            if captured.kind == PieceKind::Rook {
                if let Some(wing) = rook_home_wing(captured.side, captured.square) {
                    rights &= !castling_flag(captured.side, wing);
                }
            }
        }

        rights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).expect("test FEN should parse")
    }

    fn assert_round_trip(board: &mut Board, mv: &Move) {
        let before = board.snapshot();
        let undo = board.make_move(mv).expect("move should apply");
        assert_ne!(board.snapshot(), before);
        board.unmake_move(mv, &undo).expect("move should revert");
        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn castle_moves_rook_and_revokes_both_wings() {
        let mut b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let castle = b.get_move(60, 62).unwrap().expect("O-O available");
        assert!(castle.is_castle());

        let undo = b.make_move(&castle).unwrap();
        assert_eq!(b.occupant(62).map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(b.occupant(61).map(|p| (p.kind, p.move_count)), Some((PieceKind::Rook, 1)));
        assert!(b.occupant(63).is_none());
        assert_eq!(b.castling_rights(), CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);

        b.unmake_move(&castle, &undo).unwrap();
        assert_eq!(b.castling_rights(), CASTLE_ALL);
        assert_eq!(b.occupant(63).map(|p| p.move_count), Some(0));
        assert_round_trip(&mut b, &castle);
    }

    #[test]
    fn queenside_castle_lands_rook_on_d_file() {
        let mut b = board("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        let castle = b.get_move(4, 2).unwrap().expect("O-O-O available");
        b.make_move(&castle).unwrap();
        assert_eq!(b.occupant(3).map(|p| p.kind), Some(PieceKind::Rook));
        assert!(b.occupant(0).is_none());
        assert_eq!(b.castling_rights(), CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE);
    }

    #[test]
    fn rook_move_and_rook_capture_revoke_single_wings() {
        let mut b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let rook_takes = b.get_move(63, 7).unwrap().expect("Rxh8 available");
        b.make_move(&rook_takes).unwrap();
        assert_eq!(
            b.castling_rights(),
            CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_QUEENSIDE
        );
    }

    #[test]
    fn en_passant_removes_pawn_behind_target() {
        let mut b = board("8/8/8/2k5/2pP4/8/B7/4K3 b - d3 0 3");
        let ep = b.get_move(34, 43).unwrap().expect("cxd3 e.p. available");
        assert!(ep.is_en_passant());
        let undo = b.make_move(&ep).unwrap();
        assert!(b.occupant(35).is_none());
        assert_eq!(b.occupant(43).map(|p| p.kind), Some(PieceKind::Pawn));
        b.unmake_move(&ep, &undo).unwrap();
        assert_eq!(b.occupant(35).map(|p| p.side), Some(Side::White));
        assert_round_trip(&mut b, &ep);
    }

    #[test]
    fn promotion_defaults_to_queen_and_restores_captured_piece() {
        let mut b = board("1r5k/P7/8/8/8/8/8/K7 w - - 0 1");
        let capture = b.get_move(8, 1).unwrap().expect("axb8 available");
        let undo = b.make_move(&capture).unwrap();
        assert_eq!(b.occupant(1).map(|p| (p.kind, p.side)), Some((PieceKind::Queen, Side::White)));
        b.unmake_move(&capture, &undo).unwrap();
        assert_eq!(b.occupant(1).map(|p| (p.kind, p.side)), Some((PieceKind::Rook, Side::Black)));
        assert_eq!(b.occupant(8).map(|p| p.kind), Some(PieceKind::Pawn));

        let knight = capture.with_promotion(PromotionPiece::Knight);
        b.make_move(&knight).unwrap();
        assert_eq!(b.occupant(1).map(|p| p.kind), Some(PieceKind::Knight));
    }

    #[test]
    fn double_push_sets_en_passant_target() {
        let mut b = Board::new_game();
        let push = b.get_move(51, 35).unwrap().expect("d2-d4 available");
        b.make_move(&push).unwrap();
        assert_eq!(b.en_passant_target(), Some(43));
        assert_eq!(b.halfmove_clock(), 0);
        assert_round_trip(&mut Board::new_game(), &push);
    }
}
