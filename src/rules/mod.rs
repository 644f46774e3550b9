//! Game rules for five-in-a-row
//!
//! Freestyle Gomoku: any run of five or more wins, no forbidden moves.

pub mod win;

pub use win::{check_winner, find_five_line, is_game_over};
