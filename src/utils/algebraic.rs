//! Conversions between flat square indices and algebraic coordinates.
//!
//! Index 0 is a8 and index 63 is h1: rows run from rank 8 down to rank 1,
//! columns from file a to file h.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Square, BOARD_SQUARES};

const FILES: &[u8; 8] = b"abcdefgh";

/// True iff `index` addresses a tile on the board.
#[inline]
pub fn is_valid_square(index: i32) -> bool {
    (0..BOARD_SQUARES as i32).contains(&index)
}

/// Checks a caller-supplied index and narrows it to a [`Square`].
#[inline]
pub fn checked_square(index: i32) -> ChessResult<Square> {
    if is_valid_square(index) {
        Ok(index as Square)
    } else {
        Err(ChessErrors::InvalidSquare(index))
    }
}

/// Convert a square index to algebraic notation (for example `0 -> "a8"`).
pub fn square_to_coordinate(square: Square) -> ChessResult<String> {
    let square = checked_square(square as i32)?;
    let file_char = char::from(FILES[(square % 8) as usize]);
    let rank_char = char::from(b'8' - square / 8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Convert algebraic notation (for example `"e4"`) to a square index.
pub fn coordinate_to_square(coordinate: &str) -> ChessResult<Square> {
    let bytes = coordinate.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidCoordinate(coordinate.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidCoordinate(coordinate.to_owned()));
    }

    let row = b'8' - rank;
    let column = file - b'a';
    Ok(row * 8 + column)
}
