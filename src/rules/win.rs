//! Win condition checking
//!
//! Five or more stones in a row (overlines allowed) on any of the four
//! axes wins. Per-move detection goes through [`Board::check_win`]; the
//! full-board scans here are for terminal checks and the GUI.

use crate::board::{Board, Pos, Stone, DIRECTIONS, WIN_LENGTH};

/// Find the winning line through `pos` for `stone`, if any.
///
/// Returns every stone of the run (at least five), ordered from one end
/// to the other.
pub fn find_five_line(board: &Board, pos: Pos, stone: Stone) -> Option<Vec<Pos>> {
    if !stone.is_player() || board.get(pos) != stone {
        return None;
    }
    let (x, y) = (i32::from(pos.x), i32::from(pos.y));

    for &(dx, dy) in &DIRECTIONS {
        let back = board.count_direction(x, y, -dx, -dy, stone) as i32;
        let forward = board.count_direction(x, y, dx, dy, stone) as i32;
        if (back + forward + 1) as usize >= WIN_LENGTH {
            let line = (-back..=forward)
                .filter_map(|i| board.pos(x + dx * i, y + dy * i))
                .collect();
            return Some(line);
        }
    }
    None
}

/// Check for a winner by scanning every occupied cell
///
/// Returns `Some(Stone)` for the first five found, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Stone> {
    board
        .occupied()
        .find(|&(pos, stone)| board.check_win(i32::from(pos.x), i32::from(pos.y), stone))
        .map(|(_, stone)| stone)
}

/// Terminal state: the board is full or someone already has five
pub fn is_game_over(board: &Board) -> bool {
    board.is_full() || check_winner(board).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_over() {
        let board = Board::new(15);
        assert_eq!(check_winner(&board), None);
        assert!(!is_game_over(&board));
    }

    #[test]
    fn test_winner_horizontal() {
        let mut board = Board::new(15);
        for x in 5..10 {
            board.place_stone(x, 9, Stone::Black);
        }
        assert_eq!(check_winner(&board), Some(Stone::Black));
        assert!(is_game_over(&board));
    }

    #[test]
    fn test_winner_white_diagonal() {
        let mut board = Board::new(15);
        for i in 0..5 {
            board.place_stone(10 + i, 10 + i, Stone::White);
        }
        board.place_stone(0, 0, Stone::Black);
        assert_eq!(check_winner(&board), Some(Stone::White));
    }

    #[test]
    fn test_four_not_over() {
        let mut board = Board::new(15);
        for y in 0..4 {
            board.place_stone(3, y, Stone::Black);
        }
        assert!(!is_game_over(&board));
    }

    #[test]
    fn test_full_board_is_over() {
        // 2x2 can never hold five, only fullness ends it
        let mut board = Board::new(2);
        board.place_stone(0, 0, Stone::Black);
        board.place_stone(1, 0, Stone::White);
        board.place_stone(0, 1, Stone::White);
        assert!(!is_game_over(&board));
        board.place_stone(1, 1, Stone::Black);
        assert!(is_game_over(&board));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_find_five_line_ordered() {
        let mut board = Board::new(15);
        for y in 2..7 {
            board.place_stone(4, y, Stone::White);
        }
        let line = find_five_line(&board, Pos::new(4, 4), Stone::White).unwrap();
        assert_eq!(
            line,
            vec![
                Pos::new(4, 2),
                Pos::new(4, 3),
                Pos::new(4, 4),
                Pos::new(4, 5),
                Pos::new(4, 6),
            ]
        );
    }

    #[test]
    fn test_find_five_line_overline() {
        let mut board = Board::new(15);
        for x in 0..7 {
            board.place_stone(x, 0, Stone::Black);
        }
        let line = find_five_line(&board, Pos::new(6, 0), Stone::Black).unwrap();
        assert_eq!(line.len(), 7);
        assert_eq!(line[0], Pos::new(0, 0));
    }

    #[test]
    fn test_find_five_line_none() {
        let mut board = Board::new(15);
        for x in 0..4 {
            board.place_stone(x, 0, Stone::Black);
        }
        assert!(find_five_line(&board, Pos::new(3, 0), Stone::Black).is_none());
        assert!(find_five_line(&board, Pos::new(3, 0), Stone::White).is_none());
    }
}
