//! Static evaluation of board positions
//!
//! Each stone is scored by the four lines passing through it. Scores of
//! the evaluating side's stones are added, the opponent's subtracted.
//! The evaluation is purely local: it does not look for combinations of
//! threats across lines (double fours, four-three forks).

use crate::board::{Board, Pos, Stone, DIRECTIONS};

use super::patterns::LineRun;

/// Evaluate the board from the perspective of the given color.
///
/// Positive values favor `color`. A completed five contributes
/// `PatternScore::FIVE` per stone and axis it lies on, so won positions
/// dominate any heuristic material.
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    board
        .occupied()
        .map(|(pos, stone)| {
            let score = evaluate_position(board, pos, stone);
            if stone == color {
                score
            } else {
                -score
            }
        })
        .sum()
}

/// Sum of the four axis line scores for the stone at `pos`
#[must_use]
pub fn evaluate_position(board: &Board, pos: Pos, stone: Stone) -> i32 {
    DIRECTIONS
        .iter()
        .map(|&(dx, dy)| scan_line(board, pos, dx, dy, stone).score())
        .sum()
}

/// Measure the run through `pos` along `(dx, dy)` in both directions.
///
/// Each end stops at the board edge, an empty cell, or an opponent
/// stone; only the last one counts as blocked.
pub fn scan_line(board: &Board, pos: Pos, dx: i32, dy: i32, stone: Stone) -> LineRun {
    let opponent = stone.opponent();
    let mut count = 1;
    let mut blocked = 0u8;

    for (sx, sy) in [(dx, dy), (-dx, -dy)] {
        let mut x = i32::from(pos.x) + sx;
        let mut y = i32::from(pos.y) + sy;
        loop {
            match board.at(x, y) {
                Some(s) if s == stone => {
                    count += 1;
                    x += sx;
                    y += sy;
                }
                Some(s) if s == opponent => {
                    blocked += 1;
                    break;
                }
                _ => break,
            }
        }
    }

    LineRun { count, blocked }
}
