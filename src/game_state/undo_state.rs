use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Board metadata captured just before a move is applied, so the move can
/// be reversed exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub prev_side_to_move: Side,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}

impl UndoState {
    pub fn capture(board: &Board) -> Self {
        Self {
            prev_side_to_move: board.side_to_move(),
            prev_castling_rights: board.castling_rights(),
            prev_en_passant_target: board.en_passant_target(),
            prev_halfmove_clock: board.halfmove_clock(),
            prev_fullmove_number: board.fullmove_number(),
        }
    }
}

/// One entry of the board's append-only move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub mv: Move,
    pub undo: UndoState,
}
