//! Gomoku engine with a minimax AI
//!
//! Freestyle Gomoku on a square board (15x15 by default):
//! - Black moves first, players alternate
//! - Five or more in a row on any axis wins (overlines count)
//! - A full board without a five is a draw
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation with bitboards and scoped speculation
//! - [`rules`]: Win and terminal-state detection
//! - [`eval`]: Line scoring and static evaluation
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: AI player dispatching on difficulty
//! - [`config`]: Game and engine configuration
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, EngineConfig, Stone};
//!
//! let mut board = Board::new(9);
//! board.place_stone(4, 4, Stone::Black);
//!
//! // AI responds as White
//! let config = EngineConfig::new(Stone::White, Difficulty::Normal);
//! let mut engine = AIEngine::new(config).unwrap();
//! if let Some(pos) = engine.select_move(&mut board) {
//!     board.play(pos, Stone::White);
//!     println!("AI plays at {}", pos);
//! }
//! assert_eq!(board.stone_count(), 2);
//! ```
//!
//! # Difficulty
//!
//! | Tier     | Move choice                                  |
//! |----------|----------------------------------------------|
//! | Easy     | immediate win, else block, else random       |
//! | Normal   | minimax, depth 1                             |
//! | Hard     | minimax, depth 3                             |
//! | Depth(n) | minimax, depth n (unknown labels give 2)     |

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::{ConfigError, Difficulty, EngineConfig, GameConfig};
pub use engine::{select_move, AIEngine, MoveResult, SearchType};
