//! Terminal-state classification for the side to move.

use std::fmt;

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Side;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

/// Exactly one status holds for any position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Side },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    /// Status of the side to move. An empty move cache is re-checked against
    /// a fresh generation, so a board edited with
    /// [`Board::set_piece_at`] is never misreported as finished.
    pub fn status(&self) -> ChessResult<GameStatus> {
        let side = self.side_to_move();
        let can_move = self.side_can_move()
            || !LegalMoveGenerator.generate_legal_moves(self)?.is_empty();
        if can_move {
            return Ok(GameStatus::Ongoing);
        }

        if self.is_checked(side)? {
            Ok(GameStatus::Checkmate {
                winner: side.opposite(),
            })
        } else {
            Ok(GameStatus::Stalemate)
        }
    }

    pub fn is_checkmate(&self) -> ChessResult<bool> {
        Ok(matches!(self.status()?, GameStatus::Checkmate { .. }))
    }

    pub fn is_stalemate(&self) -> ChessResult<bool> {
        Ok(self.status()? == GameStatus::Stalemate)
    }
}
