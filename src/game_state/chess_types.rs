//! Primitive value types shared by every layer of the engine.
//!
//! Squares are flat indices `0..64` laid out row-major from the top-left of the
//! board: index 0 is a8, index 7 is h8, index 56 is a1 and index 63 is h1.

use std::fmt;

/// Flat board index (`0..64`). Row = index / 8 (0 is rank 8), column = index % 8.
pub type Square = u8;

/// Number of tiles on the board.
pub const BOARD_SQUARES: usize = 64;

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Sign applied to forward pawn offsets. White pawns walk toward lower
    /// indices, black pawns toward higher ones.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Side-to-move token used in position strings.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// Piece kind; the side is carried separately by [`crate::game_state::piece::Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Lowercase letter used in position strings and move notation.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Which rook a castle move pairs the king with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleWing {
    KingSide,
    QueenSide,
}

impl CastleWing {
    pub const BOTH: [CastleWing; 2] = [CastleWing::KingSide, CastleWing::QueenSide];
}

/// Castling rights bitmask, one bit per side per wing.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

/// Bit for a single side and wing.
#[inline]
pub const fn castling_flag(side: Side, wing: CastleWing) -> CastlingRights {
    match (side, wing) {
        (Side::White, CastleWing::KingSide) => CASTLE_WHITE_KINGSIDE,
        (Side::White, CastleWing::QueenSide) => CASTLE_WHITE_QUEENSIDE,
        (Side::Black, CastleWing::KingSide) => CASTLE_BLACK_KINGSIDE,
        (Side::Black, CastleWing::QueenSide) => CASTLE_BLACK_QUEENSIDE,
    }
}

/// Both wings of a side.
#[inline]
pub const fn castling_flags_for(side: Side) -> CastlingRights {
    castling_flag(side, CastleWing::KingSide) | castling_flag(side, CastleWing::QueenSide)
}

#[inline]
pub const fn row_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn column_of(square: Square) -> u8 {
    square % 8
}

/// Adds a signed offset to a square, returning `None` when the result leaves
/// the `0..64` range. File wrap-around is the caller's concern.
#[inline]
pub fn offset_square(square: Square, offset: i8) -> Option<Square> {
    let target = square as i16 + offset as i16;
    if (0..BOARD_SQUARES as i16).contains(&target) {
        Some(target as Square)
    } else {
        None
    }
}
