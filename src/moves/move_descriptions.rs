//! Move values produced by piece generators and consumed by the board.
//!
//! A [`Move`] records the moving piece, its origin and target squares, and a
//! [`MoveKind`] tag carrying whatever extra state the variant needs to be
//! applied and reversed: the captured piece, the jumped square of a double
//! push, the rook squares of a castle, or the promotion choice.
//!
//! A move is only meaningful against the exact position it was generated
//! from.

use std::fmt;

use crate::game_state::chess_types::{CastleWing, PieceKind, Square};
use crate::game_state::piece::Piece;
use crate::utils::algebraic::square_to_coordinate;

/// Pieces a pawn may promote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionPiece {
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Knight => PieceKind::Knight,
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'q' => Some(PromotionPiece::Queen),
            'r' => Some(PromotionPiece::Rook),
            'b' => Some(PromotionPiece::Bishop),
            'n' => Some(PromotionPiece::Knight),
            _ => None,
        }
    }

    #[inline]
    pub const fn letter(self) -> char {
        self.kind().letter()
    }
}

/// Variant-specific payload of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Move onto an empty square.
    Simple,
    /// Move onto a square held by an opposing piece, which is removed.
    Capture { captured: Piece },
    /// Pawn advance of two rows from its home row. `jumped` is the square it
    /// skipped, the only square open to en-passant capture on the next ply.
    DoublePawnPush { jumped: Square },
    /// King steps two squares toward a rook; the rook lands on the square the
    /// king crossed.
    Castle {
        wing: CastleWing,
        rook_from: Square,
        rook_to: Square,
    },
    /// Pawn reaches the far row. `promote_to` stays `None` until the caller
    /// picks a piece; execution falls back to a queen.
    Promotion {
        captured: Option<Piece>,
        promote_to: Option<PromotionPiece>,
    },
    /// Pawn captures a pawn that just double-pushed past it. The victim is
    /// lifted from its own square (`captured.square`), not from the target.
    EnPassantCapture { captured: Piece },
}

/// One move of one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn new(piece: Piece, to: Square, kind: MoveKind) -> Self {
        Self {
            piece,
            from: piece.square,
            to,
            kind,
        }
    }

    #[inline]
    pub const fn simple(piece: Piece, to: Square) -> Self {
        Self::new(piece, to, MoveKind::Simple)
    }

    #[inline]
    pub const fn capture(piece: Piece, to: Square, captured: Piece) -> Self {
        Self::new(piece, to, MoveKind::Capture { captured })
    }

    /// The piece removed by this move, if any.
    pub fn captured_piece(&self) -> Option<&Piece> {
        match &self.kind {
            MoveKind::Capture { captured } | MoveKind::EnPassantCapture { captured } => {
                Some(captured)
            }
            MoveKind::Promotion { captured, .. } => captured.as_ref(),
            _ => None,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece().is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castle { .. })
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        matches!(self.kind, MoveKind::Promotion { .. })
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassantCapture { .. })
    }

    /// The chosen promotion piece, if this is a promotion and one was picked.
    pub fn promotion_choice(&self) -> Option<PromotionPiece> {
        match self.kind {
            MoveKind::Promotion { promote_to, .. } => promote_to,
            _ => None,
        }
    }

    /// Fixes the promotion choice. Non-promotion moves are returned unchanged.
    pub fn with_promotion(mut self, choice: PromotionPiece) -> Self {
        if let MoveKind::Promotion { promote_to, .. } = &mut self.kind {
            *promote_to = Some(choice);
        }
        self
    }

    /// Equality that ignores the promotion choice, used to match a caller's
    /// move against the generated legal set.
    pub fn same_action(&self, other: &Move) -> bool {
        match (self.kind, other.kind) {
            (
                MoveKind::Promotion { captured: a, .. },
                MoveKind::Promotion { captured: b, .. },
            ) => self.piece == other.piece && self.to == other.to && a == b,
            _ => self == other,
        }
    }
}

/// Human-readable rendering for move-history display.
///
/// `Ng1-f3`, `e4xd5`, `e5xd6 e.p.`, `e7-e8=Q`, `Ke1-g1 O-O`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = square_to_coordinate(self.from).map_err(|_| fmt::Error)?;
        let to = square_to_coordinate(self.to).map_err(|_| fmt::Error)?;

        if self.piece.kind != PieceKind::Pawn {
            write!(f, "{}", self.piece.kind.letter().to_ascii_uppercase())?;
        }
        let separator = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{from}{separator}{to}")?;

        match self.kind {
            MoveKind::EnPassantCapture { .. } => write!(f, " e.p."),
            MoveKind::Castle {
                wing: CastleWing::KingSide,
                ..
            } => write!(f, " O-O"),
            MoveKind::Castle {
                wing: CastleWing::QueenSide,
                ..
            } => write!(f, " O-O-O"),
            MoveKind::Promotion { promote_to, .. } => match promote_to {
                Some(choice) => write!(f, "={}", choice.letter().to_ascii_uppercase()),
                None => write!(f, "=?"),
            },
            _ => Ok(()),
        }
    }
}
