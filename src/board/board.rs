//! Board structure with move validation and speculative placement

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::bitboard::Bitboard;
use super::{Pos, Stone, DIRECTIONS, MAX_BOARD_SIZE, WIN_LENGTH};

/// Game board of a fixed square size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or larger than [`MAX_BOARD_SIZE`].
    /// Use [`crate::config::GameConfig::validate`] to check untrusted sizes.
    pub fn new(size: usize) -> Self {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&size),
            "board size must be in 1..={MAX_BOARD_SIZE}, got {size}"
        );
        let cells = size * size;
        Self {
            size,
            black: Bitboard::new(cells),
            white: Bitboard::new(cells),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// True iff `(x, y)` lies on the board
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let sz = self.size as i32;
        x >= 0 && x < sz && y >= 0 && y < sz
    }

    /// Convert signed coordinates to a position, if on the board
    #[inline]
    pub fn pos(&self, x: i32, y: i32) -> Option<Pos> {
        self.contains(x, y).then(|| Pos::new(x as u8, y as u8))
    }

    /// Get stone at position. Off-board positions read as `Empty`.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if usize::from(pos.x) >= self.size || usize::from(pos.y) >= self.size {
            return Stone::Empty;
        }
        let idx = pos.to_index(self.size);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn at(&self, x: i32, y: i32) -> Option<Stone> {
        self.pos(x, y).map(|p| self.get(p))
    }

    /// Coordinates in range and cell empty
    #[inline]
    pub fn is_valid_move(&self, x: i32, y: i32) -> bool {
        self.at(x, y) == Some(Stone::Empty)
    }

    /// Place a stone if the move is valid.
    ///
    /// Returns `false` and leaves the board untouched for out-of-range
    /// coordinates, occupied cells, or `Stone::Empty`.
    pub fn place_stone(&mut self, x: i32, y: i32, stone: Stone) -> bool {
        if !self.is_valid_move(x, y) {
            return false;
        }
        let idx = Pos::new(x as u8, y as u8).to_index(self.size);
        match self.stones_mut(stone) {
            Some(bb) => {
                bb.set(idx);
                true
            }
            None => false,
        }
    }

    /// Place a stone at a position (see [`Board::place_stone`])
    #[inline]
    pub fn play(&mut self, pos: Pos, stone: Stone) -> bool {
        self.place_stone(i32::from(pos.x), i32::from(pos.y), stone)
    }

    /// Reset a cell to empty whatever it holds. Off-board is a no-op.
    pub fn clear_cell(&mut self, x: i32, y: i32) {
        if let Some(pos) = self.pos(x, y) {
            let idx = pos.to_index(self.size);
            self.black.clear(idx);
            self.white.clear(idx);
        }
    }

    /// Count contiguous `stone`s starting one step from `(x, y)` along `(dx, dy)`
    pub fn count_direction(&self, x: i32, y: i32, dx: i32, dy: i32, stone: Stone) -> usize {
        let mut count = 0;
        let (mut nx, mut ny) = (x + dx, y + dy);
        while self.at(nx, ny) == Some(stone) {
            count += 1;
            nx += dx;
            ny += dy;
        }
        count
    }

    /// Whether the stone at `(x, y)` completes five or more in a row for `stone`.
    ///
    /// Only the four lines through `(x, y)` are scanned, so this is meant
    /// for the most recently placed stone.
    pub fn check_win(&self, x: i32, y: i32, stone: Stone) -> bool {
        if !stone.is_player() || !self.contains(x, y) {
            return false;
        }
        DIRECTIONS.iter().any(|&(dx, dy)| {
            let run = 1
                + self.count_direction(x, y, dx, dy, stone)
                + self.count_direction(x, y, -dx, -dy, stone);
            run >= WIN_LENGTH
        })
    }

    /// Every empty cell in row-major order (increasing y, then x)
    pub fn get_valid_moves(&self) -> Vec<Pos> {
        let cells = self.size * self.size;
        (0..cells)
            .filter(|&idx| !self.black.get(idx) && !self.white.get(idx))
            .map(|idx| Pos::from_index(idx, self.size))
            .collect()
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.size * self.size
    }

    /// Independent copy of the grid
    pub fn get_board_state(&self) -> Snapshot {
        let cells = (0..self.size * self.size)
            .map(|idx| self.get(Pos::from_index(idx, self.size)))
            .collect();
        Snapshot {
            size: self.size,
            cells,
        }
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.black.clear_all();
        self.white.clear_all();
    }

    #[inline]
    fn stones_mut(&mut self, stone: Stone) -> Option<&mut Bitboard> {
        match stone {
            Stone::Black => Some(&mut self.black),
            Stone::White => Some(&mut self.white),
            Stone::Empty => None,
        }
    }

    /// Occupied cells with their stone, black stones first
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        let size = self.size;
        let black = self
            .black
            .iter_ones()
            .map(move |idx| (Pos::from_index(idx, size), Stone::Black));
        let white = self
            .white
            .iter_ones()
            .map(move |idx| (Pos::from_index(idx, size), Stone::White));
        black.chain(white)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Place `stone` at `pos` for the lifetime of the returned guard.
    ///
    /// Returns `None` when the move is not valid. The cell is cleared
    /// when the guard drops, including on early `break`/`return`.
    pub fn speculate(&mut self, pos: Pos, stone: Stone) -> Option<Speculation<'_>> {
        if self.play(pos, stone) {
            Some(Speculation { board: self, pos })
        } else {
            None
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.size {
            write!(f, "{x:>2}")?;
        }
        writeln!(f)?;
        for y in 0..self.size {
            write!(f, "{y:>2} ")?;
            for x in 0..self.size {
                let stone = self.get(Pos::new(x as u8, y as u8));
                write!(f, " {}", stone.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A speculatively placed stone. Derefs to the board; dropping it
/// clears the cell again.
pub struct Speculation<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Speculation<'_> {
    /// Position of the speculative stone
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board
            .clear_cell(i32::from(self.pos.x), i32::from(self.pos.y));
    }
}

/// Owned copy of a board's cells, detached from the live board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    size: usize,
    cells: Vec<Stone>,
}

impl Snapshot {
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Stone at `(x, y)`; out-of-range reads as `Empty`
    pub fn get(&self, x: usize, y: usize) -> Stone {
        if x < self.size && y < self.size {
            self.cells[y * self.size + x]
        } else {
            Stone::Empty
        }
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Stone]> {
        self.cells.chunks(self.size)
    }
}
