//! Uniform random playouts.
//!
//! Picks uniformly among the legal moves of the side to move until the game
//! ends or a ply limit is hit. Used for stress-testing move execution and
//! undo, not for play strength.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::moves::move_descriptions::{Move, PromotionPiece};

/// Plays up to `max_plies` random legal moves on `board` and returns them in
/// order. Promotions pick a random piece. Stops early when the side to move
/// has no legal move.
pub fn play_random_game<R: Rng + ?Sized>(
    board: &mut Board,
    max_plies: usize,
    rng: &mut R,
) -> ChessResult<Vec<Move>> {
    let mut played = Vec::with_capacity(max_plies);

    for _ in 0..max_plies {
        let Some(&picked) = board.legal_moves().choose(rng) else {
            break;
        };

        let mv = if picked.is_promotion() {
            let choice = PromotionPiece::ALL.choose(rng).copied().unwrap_or(PromotionPiece::Queen);
            picked.with_promotion(choice)
        } else {
            picked
        };

        board.execute(mv)?;
        played.push(mv);
    }

    debug!(
        "random playout finished after {} plies: {}",
        played.len(),
        board.to_fen()
    );
    Ok(played)
}
