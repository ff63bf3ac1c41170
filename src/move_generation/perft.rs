//! Move-path enumeration for validating the generator.
//!
//! Each promotion is expanded into its four choices so node counts match the
//! standard reference tables. Traversal runs on a private snapshot of the
//! board with make/unmake, so the caller's board is never touched.

use std::thread;

use log::debug;

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::{Move, PromotionPiece};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Legal moves with every unresolved promotion fanned out into its choices.
fn expanded_moves<G: MoveGenerator + ?Sized>(generator: &G, board: &Board) -> ChessResult<Vec<Move>> {
    let moves = generator.generate_legal_moves(board)?;
    let mut expanded = Vec::with_capacity(moves.len());
    for mv in moves {
        if mv.is_promotion() && mv.promotion_choice().is_none() {
            expanded.extend(PromotionPiece::ALL.map(|choice| mv.with_promotion(choice)));
        } else {
            expanded.push(mv);
        }
    }
    Ok(expanded)
}

/// Number of legal move sequences of length `depth` from `board`.
pub fn perft(board: &Board, depth: u8) -> ChessResult<u64> {
    let mut scratch = board.snapshot();
    perft_nodes(&LegalMoveGenerator, &mut scratch, depth)
}

fn perft_nodes<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &mut Board,
    depth: u8,
) -> ChessResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = expanded_moves(generator, board)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for mv in &moves {
        let undo = board.make_move(mv)?;
        let result = perft_nodes(generator, board, depth - 1);
        board.unmake_move(mv, &undo)?;
        nodes += result?;
    }
    Ok(nodes)
}

/// Perft with a breakdown of the moves made on the final ply.
pub fn perft_counts<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut scratch = board.snapshot();
    let mut total = PerftCounts::default();
    perft_recurse(generator, &mut scratch, depth, &mut total)?;
    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &mut Board,
    depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    let moves = expanded_moves(generator, board)?;

    for mv in &moves {
        let undo = board.make_move(mv)?;
        let result = if depth == 1 {
            classify_leaf(generator, board, mv, counts)
        } else {
            perft_recurse(generator, board, depth - 1, counts)
        };
        board.unmake_move(mv, &undo)?;
        result?;
    }

    Ok(())
}

/// Tallies a final-ply move. `board` is the position after `mv`.
fn classify_leaf<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &Board,
    mv: &Move,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    counts.nodes += 1;
    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant() {
        counts.en_passant += 1;
    }
    if mv.is_castle() {
        counts.castles += 1;
    }
    if mv.is_promotion() {
        counts.promotions += 1;
    }

    if is_king_in_check(board, board.side_to_move())? {
        counts.checks += 1;
        if generator.generate_legal_moves(board)?.is_empty() {
            counts.checkmates += 1;
        }
    }
    Ok(())
}

/// Node count below each root move, in generation order.
pub fn perft_divide(board: &Board, depth: u8) -> ChessResult<Vec<(Move, u64)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }
    let mut scratch = board.snapshot();

    let moves = expanded_moves(&LegalMoveGenerator, &scratch)?;
    let mut divided = Vec::with_capacity(moves.len());
    for mv in moves {
        let undo = scratch.make_move(&mv)?;
        let result = perft_nodes(&LegalMoveGenerator, &mut scratch, depth - 1);
        scratch.unmake_move(&mv, &undo)?;
        divided.push((mv, result?));
    }
    Ok(divided)
}

/// Perft with one scoped worker per root move. Each worker explores its own
/// snapshot.
pub fn perft_multi_threaded<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth <= 1 {
        return perft_counts(generator, board, depth);
    }

    let root = board.snapshot();
    let root_moves = expanded_moves(generator, &root)?;
    debug!("perft depth {depth}: splitting {} root moves", root_moves.len());

    let results: Vec<ChessResult<PerftCounts>> = thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|mv| {
                let mut local_board = root.snapshot();
                scope.spawn(move || -> ChessResult<PerftCounts> {
                    let mut local = PerftCounts::default();
                    let undo = local_board.make_move(mv)?;
                    perft_recurse(generator, &mut local_board, depth - 1, &mut local)?;
                    local_board.unmake_move(mv, &undo)?;
                    Ok(local)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(payload) => std::panic::resume_unwind(payload),
            })
            .collect()
    });

    let mut total = PerftCounts::default();
    for result in results {
        total.merge(result?);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChessErrors;
    use crate::game_state::chess_types::Side;

    /// Delegates to the legal generator until a position with Black to move
    /// is reached, then fails as a corrupted board would.
    struct FailsOnBlack;

    impl MoveGenerator for FailsOnBlack {
        fn generate_legal_moves(&self, board: &Board) -> ChessResult<Vec<Move>> {
            match board.side_to_move() {
                Side::White => LegalMoveGenerator.generate_legal_moves(board),
                Side::Black => Err(ChessErrors::MissingKing(Side::Black)),
            }
        }
    }

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let board = Board::new_game();
        assert_eq!(perft(&board, 0), Ok(1));
        assert_eq!(
            perft_counts(&LegalMoveGenerator, &board, 0),
            Ok(PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            })
        );
    }

    #[test]
    fn starting_position_matches_reference_counts() {
        let board = Board::new_game();
        assert_eq!(perft(&board, 1), Ok(20));
        assert_eq!(perft(&board, 2), Ok(400));
        assert_eq!(perft(&board, 3), Ok(8902));
    }

    #[test]
    fn depth_three_breakdown_from_start() {
        let board = Board::new_game();
        let counts = perft_counts(&LegalMoveGenerator, &board, 3).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                en_passant: 0,
                castles: 0,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn kiwipete_depth_two_breakdown() {
        let board = Board::from_fen(KIWIPETE).unwrap();
        let counts = perft_counts(&LegalMoveGenerator, &board, 2).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 2039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                promotions: 0,
                checks: 3,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn promotions_expand_into_four_choices() {
        // Only the b7 pawn and the kings can move; b8 offers four pieces.
        let board = Board::from_fen("4k3/1P6/8/8/8/8/K7/8 w - - 0 1").unwrap();
        let divided = perft_divide(&board, 1).unwrap();
        let promotions = divided.iter().filter(|(mv, _)| mv.is_promotion()).count();
        assert_eq!(promotions, 4);
        // The divide list, not the cached legal moves, matches perft at depth 1.
        assert_eq!(divided.len() as u64, perft(&board, 1).unwrap());
        assert_eq!(board.legal_moves().len() + 3, divided.len());
        assert_eq!(perft(&board, 4), Ok(2661));
    }

    #[test]
    fn divide_sums_to_perft() {
        let board = Board::from_fen(KIWIPETE).unwrap();
        let divided = perft_divide(&board, 2).unwrap();
        assert_eq!(divided.len(), 48);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 2039);
    }

    #[test]
    fn multi_threaded_matches_single_threaded() {
        let board = Board::from_fen("8/8/1k6/2b5/2pP4/8/5K2/8 b - d3 0 1").unwrap();
        let single = perft_counts(&LegalMoveGenerator, &board, 3).unwrap();
        let multi = perft_multi_threaded(&LegalMoveGenerator, &board, 3).unwrap();
        assert_eq!(single, multi);
        assert_eq!(multi.nodes, 1928);
    }

    #[test]
    fn perft_leaves_caller_board_untouched() {
        let board = Board::from_fen(KIWIPETE).unwrap();
        let before = board.clone();
        perft(&board, 2).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn generator_errors_propagate_from_every_entry_point() {
        let board = Board::new_game();
        let expected = Err(ChessErrors::MissingKing(Side::Black));
        assert_eq!(perft_counts(&FailsOnBlack, &board, 2), expected);
        assert_eq!(perft_multi_threaded(&FailsOnBlack, &board, 3), expected);
        assert_eq!(perft_counts(&FailsOnBlack, &board, 1).map(|c| c.nodes), Ok(20));
    }
}
