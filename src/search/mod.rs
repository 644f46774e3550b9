//! Search module for Gomoku AI
//!
//! Fixed-depth minimax with alpha-beta pruning over every empty cell.

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchStats, Searcher, INF};
