//! Position-string parser.
//!
//! Reads the six space-separated FEN fields (placement, side to move,
//! castling rights, en-passant target, halfmove clock, fullmove number) and
//! assembles a validated [`Board`]. Every failure is reported as
//! `MalformedPosition` with the offending token.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::utils::algebraic::coordinate_to_square;

fn malformed(message: impl Into<String>) -> ChessErrors {
    ChessErrors::MalformedPosition(message.into())
}

pub fn parse_fen(fen: &str) -> ChessResult<Board> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| malformed("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| malformed("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| malformed("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| malformed("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| malformed("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| malformed("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(malformed("extra trailing fields"));
    }

    let squares = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_target = parse_en_passant_square(en_passant_part, side_to_move)?;
    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| malformed(format!("invalid halfmove clock: {halfmove_part}")))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| malformed(format!("invalid fullmove number: {fullmove_part}")))?;

    Board::from_parts(
        squares,
        side_to_move,
        castling_rights,
        en_passant_target,
        halfmove_clock,
        fullmove_number,
    )
}

fn parse_board(board_part: &str) -> ChessResult<[Option<Piece>; BOARD_SQUARES]> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(malformed(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut squares = [None; BOARD_SQUARES];
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut column = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(malformed(format!("invalid empty-square count '{ch}'")));
                }
                column += empty_count as usize;
                continue;
            }

            if column >= 8 {
                return Err(malformed(format!("rank '{rank_str}' has too many files")));
            }

            let square = (row * 8 + column) as Square;
            let piece = Piece::from_fen_char(ch, square)
                .ok_or_else(|| malformed(format!("invalid piece character '{ch}'")))?;
            squares[square as usize] = Some(piece);
            column += 1;
        }

        if column != 8 {
            return Err(malformed(format!("rank '{rank_str}' does not sum to 8 files")));
        }
    }

    Ok(squares)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Side> {
    match side_part {
        "w" => Ok(Side::White),
        "b" => Ok(Side::Black),
        _ => Err(malformed(format!("invalid side to move: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(malformed(format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

/// The en-passant target is the square the opponent's pawn just skipped:
/// rank 6 when White is to move, rank 3 when Black is.
fn parse_en_passant_square(en_passant_part: &str, side_to_move: Side) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = coordinate_to_square(en_passant_part)
        .map_err(|_| malformed(format!("invalid en-passant square: {en_passant_part}")))?;
    let expected_row = match side_to_move {
        Side::White => 2,
        Side::Black => 5,
    };
    if row_of(square) != expected_row {
        return Err(malformed(format!(
            "en-passant square {en_passant_part} is not reachable with {side_to_move} to move"
        )));
    }
    Ok(Some(square))
}
