use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::moves::move_descriptions::Move;

/// Produces the legal moves of the side to move.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, board: &Board) -> ChessResult<Vec<Move>>;
}

