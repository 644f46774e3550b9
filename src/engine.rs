//! Main AI engine dispatching on difficulty
//!
//! Each tier maps to one way of choosing a move:
//!
//! 1. **Easy**: take an immediate win, else block the opponent's
//!    immediate win, else play a random legal move
//! 2. **Normal**: minimax at depth 1
//! 3. **Hard**: minimax at depth 3
//! 4. **Depth(n)**: minimax at depth `n`
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, EngineConfig, Pos, Stone};
//!
//! let mut board = Board::new(9);
//! for x in 0..4 {
//!     board.place_stone(x, 0, Stone::Black);
//! }
//!
//! let config = EngineConfig::new(Stone::White, Difficulty::Easy).with_seed(Some(1));
//! let mut engine = AIEngine::new(config).unwrap();
//! let result = engine.select_move_with_stats(&mut board);
//! assert_eq!(result.best_move, Some(Pos::new(4, 0)));
//! println!("{:?} in {}ms", result.search_type, result.time_ms);
//! ```

use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Pos, Stone};
use crate::config::{ConfigError, Difficulty, EngineConfig};
use crate::search::{SearchResult, Searcher};

/// How the engine arrived at its move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Completes five for the engine (Easy)
    ImmediateWin,
    /// Takes the cell the opponent needs for five (Easy)
    Block,
    /// Uniform pick among legal moves (Easy)
    Random,
    /// Minimax with alpha-beta pruning
    Minimax,
}

/// Result of a move selection with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, `None` when the board is full
    pub best_move: Option<Pos>,
    /// Minimax score of the move. Easy-tier picks score 0.
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn heuristic(best_move: Option<Pos>, search_type: SearchType) -> Self {
        Self {
            best_move,
            score: 0,
            search_type,
            time_ms: 0,
            nodes: 0,
        }
    }

    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::Minimax,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// AI player for one side of the board
#[derive(Debug)]
pub struct AIEngine {
    config: EngineConfig,
    searcher: Searcher,
    rng: StdRng,
}

impl AIEngine {
    /// Create an engine for the configured stone and difficulty.
    ///
    /// Fails when the configured stone is `Stone::Empty`.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            searcher: Searcher::new(config.stone),
            rng,
        })
    }

    #[inline]
    pub fn stone(&self) -> Stone {
        self.config.stone
    }

    /// Choose a move for the engine's stone.
    ///
    /// Returns `None` only when there are no legal moves. The board is
    /// left exactly as it was passed in.
    pub fn select_move(&mut self, board: &mut Board) -> Option<Pos> {
        self.select_move_with_stats(board).best_move
    }

    /// Choose a move and report how it was found
    pub fn select_move_with_stats(&mut self, board: &mut Board) -> MoveResult {
        let start = Instant::now();
        let stone = self.config.stone;
        let difficulty = self.config.difficulty;

        let result = match difficulty.search_depth() {
            None => self.easy_move(board),
            Some(depth) => {
                let search = self.searcher.search(board, depth);
                MoveResult::from_search(search, elapsed_ms(start))
            }
        };
        let result = MoveResult {
            time_ms: elapsed_ms(start),
            ..result
        };

        match result.best_move {
            Some(pos) => info!(
                "{} ({}) plays {} via {:?}, score {}, {} nodes, {}ms",
                stone.name(),
                difficulty,
                pos,
                result.search_type,
                result.score,
                result.nodes,
                result.time_ms
            ),
            None => info!("{} ({}) has no legal move", stone.name(), difficulty),
        }
        result
    }

    /// Win, then block, then a random legal move
    fn easy_move(&mut self, board: &mut Board) -> MoveResult {
        let stone = self.config.stone;

        if let Some(pos) = find_winning_move(board, stone) {
            return MoveResult::heuristic(Some(pos), SearchType::ImmediateWin);
        }
        if let Some(pos) = find_winning_move(board, stone.opponent()) {
            debug!("blocking {} at {}", stone.opponent().name(), pos);
            return MoveResult::heuristic(Some(pos), SearchType::Block);
        }

        let moves = board.get_valid_moves();
        let pick = moves.choose(&mut self.rng).copied();
        MoveResult::heuristic(pick, SearchType::Random)
    }
}

/// First legal move, in row-major order, that completes five for `stone`.
///
/// Each candidate is placed speculatively and removed before the next one
/// is tried.
pub fn find_winning_move(board: &mut Board, stone: Stone) -> Option<Pos> {
    board.get_valid_moves().into_iter().find(|&pos| {
        board
            .speculate(pos, stone)
            .is_some_and(|child| child.check_win(i32::from(pos.x), i32::from(pos.y), stone))
    })
}

/// One-shot move selection with an unseeded engine.
///
/// Returns `None` when the board is full or `stone` is not a player.
pub fn select_move(board: &mut Board, stone: Stone, difficulty: Difficulty) -> Option<Pos> {
    let mut engine = AIEngine::new(EngineConfig::new(stone, difficulty)).ok()?;
    engine.select_move(board)
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
