//! Line scores for Gomoku evaluation
//!
//! A line is the run of same-colored stones through a cell along one
//! axis. Its value grows tenfold per stone, is halved when one end is
//! capped by an opponent stone, and drops to zero when both ends are.

/// Score constants for line evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row - a realized win
    pub const FIVE: i32 = 100_000;
    /// Both ends capped by the opponent - can never reach five
    pub const DEAD: i32 = 0;
}

/// A contiguous run along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRun {
    /// Stones in the run, including the starting cell
    pub count: usize,
    /// Ends (0-2) stopped by an opponent stone. Edges and empty cells
    /// do not count.
    pub blocked: u8,
}

/// Score a run by its length and capped ends.
///
/// - `count >= 5` → [`PatternScore::FIVE`]
/// - `blocked == 2` → [`PatternScore::DEAD`]
/// - otherwise `10^(count-1)`, halved (integer division) if `blocked == 1`
pub fn line_score(count: usize, blocked: u8) -> i32 {
    if count >= 5 {
        return PatternScore::FIVE;
    }
    if blocked >= 2 {
        return PatternScore::DEAD;
    }

    let base = 10i32.pow(count.saturating_sub(1) as u32);
    if blocked == 1 {
        base / 2
    } else {
        base
    }
}

impl LineRun {
    #[inline]
    pub fn score(self) -> i32 {
        line_score(self.count, self.blocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_lines() {
        assert_eq!(line_score(1, 0), 1);
        assert_eq!(line_score(2, 0), 10);
        assert_eq!(line_score(3, 0), 100);
        assert_eq!(line_score(4, 0), 1_000);
    }

    #[test]
    fn test_half_blocked_lines() {
        // 1 / 2 truncates to zero
        assert_eq!(line_score(1, 1), 0);
        assert_eq!(line_score(2, 1), 5);
        assert_eq!(line_score(3, 1), 50);
        assert_eq!(line_score(4, 1), 500);
    }

    #[test]
    fn test_dead_lines() {
        for count in 1..5 {
            assert_eq!(line_score(count, 2), PatternScore::DEAD);
        }
    }

    #[test]
    fn test_five_ignores_blocking() {
        assert_eq!(line_score(5, 0), PatternScore::FIVE);
        assert_eq!(line_score(5, 2), PatternScore::FIVE);
        assert_eq!(line_score(7, 1), PatternScore::FIVE);
    }

    #[test]
    fn test_score_hierarchy() {
        // Longer open lines always outrank shorter ones
        for count in 1..5 {
            assert!(line_score(count + 1, 0) > line_score(count, 0));
            assert!(line_score(count, 0) > line_score(count, 1));
        }
    }

    #[test]
    fn test_line_run_score() {
        let run = LineRun { count: 3, blocked: 1 };
        assert_eq!(run.score(), 50);
    }
}
