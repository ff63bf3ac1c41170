use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_coordinate;

/// Serialises the board into the six-field position string. Castling letters
/// are always written in `KQkq` order.
pub fn generate_fen(board: &Board) -> String {
    let placement = generate_board_field(board);
    let castling = generate_castling_field(board.castling_rights());
    let en_passant = generate_en_passant_field(board.en_passant_target());

    format!(
        "{} {} {} {} {} {}",
        placement,
        board.side_to_move().fen_char(),
        castling,
        en_passant,
        board.halfmove_clock(),
        board.fullmove_number()
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for column in 0..8u8 {
            match board.occupant(row * 8 + column) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();
    for (flag, letter) in [
        (CASTLE_WHITE_KINGSIDE, 'K'),
        (CASTLE_WHITE_QUEENSIDE, 'Q'),
        (CASTLE_BLACK_KINGSIDE, 'k'),
        (CASTLE_BLACK_QUEENSIDE, 'q'),
    ] {
        if rights & flag != 0 {
            out.push(letter);
        }
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

fn generate_en_passant_field(target: Option<Square>) -> String {
    target
        .and_then(|square| square_to_coordinate(square).ok())
        .unwrap_or_else(|| "-".to_owned())
}
