//! Crate root module declarations for the tile_chess rules engine.
//!
//! The engine keeps a 64-tile board, generates pseudo-legal moves per piece,
//! filters them down to legal moves, executes and reverses moves, and answers
//! check, checkmate and stalemate queries. Graphical presentation, input
//! handling and persistence are left to callers; they consume the public
//! contract exposed through [`game_state::board::Board`].

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_status;
    pub mod piece;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod random_playout;
    pub mod render_game_state;
}

pub use errors::{ChessErrors, ChessResult};
pub use game_state::board::Board;
pub use game_state::chess_types::{CastleWing, PieceKind, Side, Square};
pub use game_state::game_status::GameStatus;
pub use game_state::piece::Piece;
pub use moves::move_descriptions::{Move, MoveKind, PromotionPiece};
