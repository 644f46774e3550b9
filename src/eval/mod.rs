//! Evaluation module for Gomoku positions
//!
//! This module provides line scoring and the static evaluator used at
//! the search horizon.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_position, scan_line};
pub use patterns::{line_score, LineRun, PatternScore};
