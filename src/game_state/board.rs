//! The authoritative position.
//!
//! `Board` owns every piece through its 64-slot array and tracks side to
//! move, castling rights, en-passant target, clocks and the move history. It
//! is mutated only through [`Board::execute`], [`Board::undo`],
//! [`Board::next_turn`] and [`Board::set_piece_at`]. Cloning is explicit:
//! callers that want to explore hypothetical lines take a
//! [`Board::snapshot`].

use log::{debug, warn};

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::game_state::undo_state::{HistoryEntry, UndoState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::legal_move_shared::generate_pseudo_legal_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::{Move, MoveKind, PromotionPiece};
use crate::utils::algebraic::checked_square;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; BOARD_SQUARES],
    pub(crate) side_to_move: Side,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
    history: Vec<HistoryEntry>,
    legal_moves: Vec<Move>,
}

impl Board {
    /// Board in the standard starting position.
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    /// Board from a position string (FEN field order).
    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    /// Serialises the position back to the string format accepted by
    /// [`Board::from_fen`].
    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Assembles a board from parsed parts, validating that each side has
    /// exactly one king, and generates the legal moves of the side to move.
    pub(crate) fn from_parts(
        squares: [Option<Piece>; BOARD_SQUARES],
        side_to_move: Side,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> ChessResult<Self> {
        for side in Side::BOTH {
            let kings = squares
                .iter()
                .flatten()
                .filter(|p| p.side == side && p.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(ChessErrors::MalformedPosition(format!(
                    "expected one {side} king, found {kings}"
                )));
            }
        }

        let mut board = Self {
            squares,
            side_to_move,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            history: Vec::new(),
            legal_moves: Vec::new(),
        };
        board.regenerate_legal_moves()?;
        debug!("board constructed: {}", board.to_fen());
        Ok(board)
    }

    /// Deep copy of the position without history or cached moves, for
    /// speculative execution.
    pub fn snapshot(&self) -> Self {
        Self {
            squares: self.squares,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            history: Vec::new(),
            legal_moves: Vec::new(),
        }
    }

    /// Position equality: placement by kind and side, side to move, castling
    /// rights, en-passant target and both clocks. Move history, per-piece
    /// move counters and the legal-move cache are ignored, so a board reached
    /// by play equals the board parsed from its own position string.
    pub fn same_position(&self, other: &Board) -> bool {
        let placement_matches = self.squares.iter().zip(other.squares.iter()).all(|pair| {
            match pair {
                (None, None) => true,
                (Some(a), Some(b)) => a.kind == b.kind && a.side == b.side,
                _ => false,
            }
        });
        placement_matches
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.en_passant_target == other.en_passant_target
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
    }

    // --- Accessors ---

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn has_castling_right(&self, side: Side, wing: CastleWing) -> bool {
        self.castling_rights & castling_flag(side, wing) != 0
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Executed moves, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Move> {
        self.history.iter().map(|entry| &entry.mv)
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|entry| &entry.mv)
    }

    /// Piece on `square`, or `None` when the square is empty or off the board.
    #[inline]
    pub fn occupant(&self, square: Square) -> Option<&Piece> {
        self.squares.get(square as usize).and_then(Option::as_ref)
    }

    /// Piece on `square`; fails with `InvalidSquare` outside `0..64`.
    pub fn piece_at(&self, square: i32) -> ChessResult<Option<&Piece>> {
        let square = checked_square(square)?;
        Ok(self.occupant(square))
    }

    /// Places `piece` on `square` (or clears it with `None`) and returns the
    /// previous occupant. The piece's own square is rewritten to match.
    ///
    /// Cached legal moves are dropped; call
    /// [`Board::regenerate_legal_moves`] once the edit is complete.
    pub fn set_piece_at(&mut self, square: i32, piece: Option<Piece>) -> ChessResult<Option<Piece>> {
        let square = checked_square(square)?;
        self.legal_moves.clear();
        Ok(self.replace(square, piece))
    }

    /// All pieces of `side`, in square order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten().filter(move |p| p.side == side)
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten()
    }

    /// The eight tiles of a row, row 0 being rank 8.
    pub fn pieces_in_row(&self, row: u8) -> ChessResult<&[Option<Piece>]> {
        if row >= 8 {
            return Err(ChessErrors::InvalidSquare(row as i32 * 8));
        }
        let start = row as usize * 8;
        Ok(&self.squares[start..start + 8])
    }

    /// The eight tiles of a column from rank 8 down, column 0 being file a.
    pub fn pieces_in_column(&self, column: u8) -> ChessResult<Vec<Option<Piece>>> {
        if column >= 8 {
            return Err(ChessErrors::InvalidSquare(column as i32));
        }
        Ok(self
            .squares
            .iter()
            .skip(column as usize)
            .step_by(8)
            .copied()
            .collect())
    }

    /// Square of `side`'s king.
    pub fn king_square(&self, side: Side) -> ChessResult<Square> {
        self.pieces(side)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.square)
            .ok_or(ChessErrors::MissingKing(side))
    }

    // --- Move generation and queries ---

    /// Recomputes the legal moves of the side to move. Must run after any
    /// edit before the move set is trusted; execute, undo and next_turn do
    /// it themselves.
    pub fn regenerate_legal_moves(&mut self) -> ChessResult<()> {
        self.legal_moves = LegalMoveGenerator.generate_legal_moves(self)?;
        Ok(())
    }

    /// Legal moves of the side to move, as of the last regeneration.
    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    /// Legal moves of the piece standing on `square`.
    pub fn legal_moves_for(&self, square: i32) -> ChessResult<Vec<Move>> {
        let square = checked_square(square)?;
        Ok(self
            .legal_moves
            .iter()
            .filter(|mv| mv.from == square)
            .copied()
            .collect())
    }

    /// The legal move taking the piece on `from` to `to`, if there is one.
    /// Promotions come back with no piece chosen.
    pub fn get_move(&self, from: i32, to: i32) -> ChessResult<Option<Move>> {
        let from = checked_square(from)?;
        let to = checked_square(to)?;
        Ok(self
            .legal_moves
            .iter()
            .find(|mv| mv.from == from && mv.to == to)
            .copied())
    }

    /// Pseudo-legal moves of every piece of `side`, ignoring king safety.
    pub fn pseudo_legal_moves(&self, side: Side) -> Vec<Move> {
        generate_pseudo_legal_moves(self, side)
    }

    /// True iff an opposing piece attacks `side`'s king.
    pub fn is_checked(&self, side: Side) -> ChessResult<bool> {
        let king = self.king_square(side)?;
        Ok(is_square_attacked(self, king, side.opposite()))
    }

    /// True if the side to move has at least one legal move.
    #[inline]
    pub fn side_can_move(&self) -> bool {
        !self.legal_moves.is_empty()
    }

    // --- State transitions ---

    /// Executes `mv` for the side to move. The move must match one of the
    /// current legal moves (the promotion choice may differ); otherwise the
    /// board is left untouched and `IllegalMove` is returned.
    pub fn execute(&mut self, mv: Move) -> ChessResult<()> {
        let Some(generated) = self.legal_moves.iter().find(|legal| legal.same_action(&mv)) else {
            warn!("rejected illegal move {mv}");
            return Err(ChessErrors::IllegalMove(mv.to_string()));
        };

        let resolved = match generated.kind {
            MoveKind::Promotion { .. } => generated.with_promotion(
                mv.promotion_choice().unwrap_or(PromotionPiece::Queen),
            ),
            _ => *generated,
        };

        let undo = self.make_move(&resolved)?;
        self.history.push(HistoryEntry { mv: resolved, undo });
        debug!("executed {resolved}");
        self.regenerate_legal_moves()
    }

    /// Reverses the most recent move. Returns `None` when the history is
    /// empty.
    pub fn undo(&mut self) -> ChessResult<Option<Move>> {
        let Some(entry) = self.history.pop() else {
            return Ok(None);
        };
        self.unmake_move(&entry.mv, &entry.undo)?;
        debug!("undid {}", entry.mv);
        self.regenerate_legal_moves()?;
        Ok(Some(entry.mv))
    }

    /// Hands the move to the other side: flips side to move, advances the
    /// halfmove clock, advances the fullmove number after Black's ply, and
    /// regenerates legal moves.
    pub fn next_turn(&mut self) -> ChessResult<()> {
        self.advance_turn();
        self.regenerate_legal_moves()
    }

    pub(crate) fn advance_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        if self.side_to_move == Side::White {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
    }

    /// Applies a move without checking legality or touching history or the
    /// move cache. Pair every call with [`Board::unmake_move`].
    pub(crate) fn make_move(&mut self, mv: &Move) -> ChessResult<UndoState> {
        let undo = mv.execute(self)?;
        self.advance_turn();
        if mv.piece.kind == PieceKind::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        }
        Ok(undo)
    }

    pub(crate) fn unmake_move(&mut self, mv: &Move, undo: &UndoState) -> ChessResult<()> {
        mv.undo(self, undo)
    }

    // --- Raw placement used by move execution ---

    /// Writes `piece` into `square`, syncing its square field, and returns
    /// what was there.
    pub(crate) fn replace(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        let placed = piece.map(|p| Piece { square, ..p });
        std::mem::replace(&mut self.squares[square as usize], placed)
    }

    /// Removes and returns the piece on `square`, failing if it is empty.
    pub(crate) fn lift(&mut self, square: Square) -> ChessResult<Piece> {
        self.squares
            .get_mut(square as usize)
            .and_then(Option::take)
            .ok_or(ChessErrors::EmptyOrigin(square))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}
