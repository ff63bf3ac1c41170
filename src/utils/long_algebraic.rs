//! Long algebraic move text: origin, target and an optional promotion
//! letter, e.g. `e2e4`, `e1g1`, `e7e8q`.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::moves::move_descriptions::{Move, PromotionPiece};
use crate::utils::algebraic::{coordinate_to_square, square_to_coordinate};

pub fn move_to_long_algebraic(mv: &Move) -> ChessResult<String> {
    let mut out = String::new();
    out.push_str(&square_to_coordinate(mv.from)?);
    out.push_str(&square_to_coordinate(mv.to)?);

    if let Some(choice) = mv.promotion_choice() {
        out.push(choice.letter());
    }

    Ok(out)
}

/// Finds the legal move of the side to move matching `long_algebraic`.
///
/// A promotion without a letter comes back unresolved and executes as a
/// queen. A letter on a non-promotion, or text naming no legal move, is an
/// `IllegalMove`.
pub fn long_algebraic_to_move(board: &Board, long_algebraic: &str) -> ChessResult<Move> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessErrors::InvalidCoordinate(long_algebraic.to_owned()));
    }

    let from = coordinate_to_square(&text[0..2])?;
    let to = coordinate_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        Some(letter) => Some(
            PromotionPiece::from_letter(letter)
                .ok_or_else(|| ChessErrors::InvalidCoordinate(long_algebraic.to_owned()))?,
        ),
        None => None,
    };

    let mv = board
        .get_move(from as i32, to as i32)?
        .ok_or_else(|| ChessErrors::IllegalMove(text.to_owned()))?;

    match promotion {
        Some(choice) if mv.is_promotion() => Ok(mv.with_promotion(choice)),
        Some(_) => Err(ChessErrors::IllegalMove(text.to_owned())),
        None => Ok(mv),
    }
}
