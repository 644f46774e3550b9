//! Minimax search with alpha-beta pruning
//!
//! The searcher plays one fixed side (the maximizing player) and searches
//! every legal move to a fixed depth. Positions at the horizon, full
//! boards, and boards that already hold a five are scored by the static
//! evaluator.
//!
//! Speculative stones are placed through [`Board::speculate`], so the
//! board is restored on every exit path, pruning cutoffs included.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new(9);
//! for x in 1..5 {
//!     board.place_stone(x, 4, Stone::White);
//! }
//! board.place_stone(0, 4, Stone::Black);
//!
//! let mut searcher = Searcher::new(Stone::White);
//! let result = searcher.search(&mut board, 1);
//! assert_eq!(result.best_move, Some(Pos::new(5, 4)));
//! ```

use log::debug;

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate;
use crate::rules::is_game_over;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = i32::MAX;

/// Search statistics for diagnostics
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Positions visited by `minimax`
    pub nodes: u64,
    /// Positions scored by the static evaluator
    pub leaves: u64,
    /// Sibling loops cut short by `beta <= alpha`
    pub cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when the board has no legal moves
    pub best_move: Option<Pos>,
    /// Evaluation score of the best move
    pub score: i32,
    /// Depth searched, counting the root ply
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Fixed-depth minimax searcher for one side
#[derive(Debug, Clone)]
pub struct Searcher {
    player: Stone,
    opponent: Stone,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher that maximizes for `player`.
    ///
    /// # Panics
    ///
    /// Panics if `player` is `Stone::Empty`.
    #[must_use]
    pub fn new(player: Stone) -> Self {
        assert!(player.is_player(), "searcher needs a Black or White stone");
        Self {
            player,
            opponent: player.opponent(),
            stats: SearchStats::default(),
        }
    }

    /// Statistics of the most recent search
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Static evaluation from the searcher's point of view
    #[inline]
    pub fn evaluate(&self, board: &Board) -> i32 {
        evaluate(board, self.player)
    }

    /// Pick the best move for the searcher's side.
    ///
    /// Every legal move is played once and scored by `minimax` with
    /// `depth - 1` plies left and the opponent to move. The first move
    /// with the highest score wins ties. A depth of zero is treated as
    /// one: the root ply is always played.
    pub fn search(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        self.stats = SearchStats::default();

        let child_depth = depth.saturating_sub(1);
        let mut best_move = None;
        let mut best_score = -INF;

        for pos in board.get_valid_moves() {
            let Some(mut child) = board.speculate(pos, self.player) else {
                continue;
            };
            let score = self.minimax(&mut child, child_depth, false, -INF, INF);
            drop(child);

            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        debug!(
            "search depth={} best={:?} score={} nodes={} leaves={} cutoffs={}",
            depth.max(1),
            best_move,
            best_score,
            self.stats.nodes,
            self.stats.leaves,
            self.stats.cutoffs
        );

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            depth: depth.max(1),
            nodes: self.stats.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Recursive minimax with alpha-beta pruning.
    ///
    /// `maximizing` selects whose stone is placed at this ply: the
    /// searcher's own when true, the opponent's otherwise. The board is
    /// identical before and after the call.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 || is_game_over(board) {
            self.stats.leaves += 1;
            return self.evaluate(board);
        }

        let moves = board.get_valid_moves();

        if maximizing {
            let mut max_score = -INF;
            for pos in moves {
                let Some(mut child) = board.speculate(pos, self.player) else {
                    continue;
                };
                let score = self.minimax(&mut child, depth - 1, false, alpha, beta);
                drop(child);

                max_score = max_score.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            max_score
        } else {
            let mut min_score = INF;
            for pos in moves {
                let Some(mut child) = board.speculate(pos, self.opponent) else {
                    continue;
                };
                let score = self.minimax(&mut child, depth - 1, true, alpha, beta);
                drop(child);

                min_score = min_score.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            min_score
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain minimax without pruning, used as the reference.
    fn minimax_unpruned(board: &mut Board, player: Stone, depth: u8, maximizing: bool) -> i32 {
        if depth == 0 || is_game_over(board) {
            return evaluate(board, player);
        }
        let mover = if maximizing { player } else { player.opponent() };
        let scores: Vec<i32> = board
            .get_valid_moves()
            .into_iter()
            .map(|pos| {
                let mut child = board.speculate(pos, mover).unwrap();
                minimax_unpruned(&mut child, player, depth - 1, !maximizing)
            })
            .collect();
        if maximizing {
            scores.into_iter().max().unwrap()
        } else {
            scores.into_iter().min().unwrap()
        }
    }

    fn best_move_unpruned(board: &mut Board, player: Stone, depth: u8) -> (Option<Pos>, i32) {
        let mut best = (None, -INF);
        for pos in board.get_valid_moves() {
            let mut child = board.speculate(pos, player).unwrap();
            let score = minimax_unpruned(&mut child, player, depth.saturating_sub(1), false);
            if best.0.is_none() || score > best.1 {
                best = (Some(pos), score);
            }
        }
        best
    }

    fn board_from(size: usize, black: &[(i32, i32)], white: &[(i32, i32)]) -> Board {
        let mut board = Board::new(size);
        for &(x, y) in black {
            assert!(board.place_stone(x, y, Stone::Black));
        }
        for &(x, y) in white {
            assert!(board.place_stone(x, y, Stone::White));
        }
        board
    }

    #[test]
    fn test_search_full_board() {
        let mut board = board_from(2, &[(0, 0), (1, 1)], &[(1, 0), (0, 1)]);
        let mut searcher = Searcher::new(Stone::White);
        let result = searcher.search(&mut board, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_search_finds_winning_move() {
        let mut board = board_from(9, &[(0, 4)], &[(1, 4), (2, 4), (3, 4), (4, 4)]);
        let mut searcher = Searcher::new(Stone::White);
        let result = searcher.search(&mut board, 1);
        assert_eq!(result.best_move, Some(Pos::new(5, 4)));
        assert!(result.score > 400_000);
    }

    #[test]
    fn test_search_blocks_closed_four() {
        // Black threatens (5, 3); only a depth-2 search sees the reply
        let mut board = board_from(7, &[(1, 3), (2, 3), (3, 3), (4, 3)], &[(0, 3)]);
        let mut searcher = Searcher::new(Stone::White);
        let result = searcher.search(&mut board, 2);
        assert_eq!(result.best_move, Some(Pos::new(5, 3)));
    }

    #[test]
    fn test_tie_break_first_in_row_major() {
        // Every lone stone scores four on an empty board
        let mut board = Board::new(5);
        let mut searcher = Searcher::new(Stone::Black);
        let first = searcher.search(&mut board, 1);
        assert_eq!(first.best_move, Some(Pos::new(0, 0)));
        assert_eq!(first.score, 4);

        for _ in 0..3 {
            let again = searcher.search(&mut board, 1);
            assert_eq!(again.best_move, first.best_move);
        }
    }

    #[test]
    fn test_depth_zero_plays_root() {
        let mut board = Board::new(5);
        let mut searcher = Searcher::new(Stone::Black);
        let result = searcher.search(&mut board, 0);
        assert_eq!(result.depth, 1);
        assert_eq!(result.best_move, Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_minimax_restores_board() {
        let mut board = board_from(6, &[(2, 2), (3, 3), (1, 4)], &[(2, 3), (4, 1)]);
        let before = board.clone();
        let mut searcher = Searcher::new(Stone::Black);

        for depth in 0..=3 {
            for maximizing in [true, false] {
                searcher.minimax(&mut board, depth, maximizing, -INF, INF);
                assert_eq!(board, before, "depth {depth} maximizing {maximizing}");
            }
        }

        searcher.search(&mut board, 3);
        assert_eq!(board, before);
    }

    #[test]
    fn test_minimax_restores_board_after_cutoffs() {
        // Narrow window forces cutoffs at every level
        let mut board = board_from(5, &[(2, 2)], &[(1, 1)]);
        let before = board.clone();
        let mut searcher = Searcher::new(Stone::White);
        searcher.minimax(&mut board, 3, true, 0, 1);
        assert!(searcher.stats().cutoffs > 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_terminal_position_is_evaluated() {
        let mut board = board_from(7, &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)], &[]);
        let mut searcher = Searcher::new(Stone::White);
        let score = searcher.minimax(&mut board, 3, true, -INF, INF);
        assert_eq!(score, searcher.evaluate(&board));
        assert_eq!(searcher.stats().nodes, 1);
    }

    #[test]
    fn test_alpha_beta_matches_unpruned() {
        let positions = [
            board_from(5, &[(2, 2)], &[]),
            board_from(5, &[(1, 1), (2, 2)], &[(1, 2)]),
            board_from(6, &[(2, 2), (3, 2), (4, 2)], &[(1, 2), (2, 3)]),
            board_from(6, &[(0, 0), (1, 1), (2, 2), (3, 3)], &[(5, 0), (4, 1), (3, 2)]),
        ];

        for (i, start) in positions.iter().enumerate() {
            for player in [Stone::Black, Stone::White] {
                for depth in 1..=3 {
                    let mut board = start.clone();
                    let mut searcher = Searcher::new(player);
                    let pruned = searcher.search(&mut board, depth);
                    let (expected_move, expected_score) =
                        best_move_unpruned(&mut board, player, depth);

                    assert_eq!(
                        pruned.best_move, expected_move,
                        "position {i}, {player:?}, depth {depth}"
                    );
                    assert_eq!(pruned.score, expected_score);
                    assert_eq!(&board, start);
                }
            }
        }
    }

    #[test]
    fn test_pruning_reduces_nodes() {
        let mut board = board_from(5, &[(2, 2)], &[(1, 2)]);
        let mut searcher = Searcher::new(Stone::Black);
        let result = searcher.search(&mut board, 3);

        // Unpruned tree below 23 root moves: 22 replies each, 21 leaves per reply
        let unpruned_nodes: u64 = 23 + 23 * 22 + 23 * 22 * 21;
        assert!(result.nodes < unpruned_nodes);
        assert!(result.stats.cutoffs > 0);
    }

    #[test]
    #[should_panic]
    fn test_empty_stone_rejected() {
        let _ = Searcher::new(Stone::Empty);
    }
}
