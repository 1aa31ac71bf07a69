use crate::engine::move_list::MoveList;
use crate::engine::Move;
use crate::logic::rules::{ConfigError, MoveError};
use serde::{Deserialize, Serialize};

/// Board sizes above this would overflow the fixed-capacity `MoveList`.
pub const MAX_BOARD_SIZE: usize = 11;

/// The four window directions, in scan order: rows, columns, then the two
/// diagonal directions.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

/// An immutable m x m board with a `win_length`-in-a-row win condition.
///
/// Boards are values: `apply_move` returns a fresh board and never touches
/// the original, so sibling nodes in a search tree cannot observe each
/// other's moves and no undo machinery is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Option<Player>>,
    size: usize,
    win_length: usize,
}

impl Board {
    /// Creates an empty board. Rejects degenerate `(size, win_length)` pairs
    /// and sizes whose move count would exceed the `MoveList` capacity.
    pub fn new(size: usize, win_length: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::InvalidBoardSize { size });
        }
        if size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        if win_length == 0 || win_length > size {
            return Err(ConfigError::InvalidWinLength { win_length, size });
        }
        Ok(Self {
            cells: vec![None; size * size],
            size,
            win_length,
        })
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn win_length(&self) -> usize {
        self.win_length
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied().flatten()
    }

    /// Every empty cell, in row-major order. This is the baseline generation
    /// order that the move orderer re-ranks.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.get(row, col).is_none() {
                    moves.push(Move::new(row as u8, col as u8));
                }
            }
        }
        moves
    }

    /// Returns a new board with `mv` played by `player`. The receiver is
    /// left untouched.
    pub fn apply_move(&self, mv: Move, player: Player) -> Result<Self, MoveError> {
        let row = mv.row as usize;
        let col = mv.col as usize;
        if row >= self.size || col >= self.size {
            return Err(MoveError::OutOfBounds {
                row: mv.row,
                col: mv.col,
                size: self.size,
            });
        }
        if self.get(row, col).is_some() {
            return Err(MoveError::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }
        let mut next = self.clone();
        if let Some(cell) = next.cells.get_mut(row * self.size + col) {
            *cell = Some(player);
        }
        Ok(next)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// The side to move under alternating play: X when the mark counts are
    /// equal, O otherwise. X always moves first.
    #[must_use]
    pub fn player_to_move(&self) -> Player {
        let filled = self.cells.iter().filter(|c| c.is_some()).count();
        if filled % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Iterates every `win_length` window along rows, columns and both
    /// diagonal directions, yielding per-window mark counts.
    #[must_use]
    pub const fn windows(&self) -> WindowIter<'_> {
        WindowIter {
            board: self,
            dir: 0,
            row: 0,
            col: 0,
        }
    }

    fn window_counts(&self, row: usize, col: usize, dr: isize, dc: isize) -> WindowCounts {
        let mut counts = WindowCounts::default();
        for i in 0..self.win_length {
            let step = i as isize;
            let r = (row as isize + dr * step) as usize;
            let c = (col as isize + dc * step) as usize;
            match self.get(r, c) {
                Some(Player::X) => counts.x += 1,
                Some(Player::O) => counts.o += 1,
                None => {}
            }
        }
        counts
    }
}

/// Mark counts inside one window of `win_length` cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowCounts {
    pub x: u8,
    pub o: u8,
}

pub struct WindowIter<'a> {
    board: &'a Board,
    dir: usize,
    row: usize,
    col: usize,
}

impl WindowIter<'_> {
    /// Valid window origins for the current direction, as
    /// `(row_end, col_start, col_end)` exclusive-end bounds.
    fn bounds(&self) -> (usize, usize, usize) {
        let m = self.board.size;
        let k = self.board.win_length;
        match self.dir {
            0 => (m, 0, m - k + 1),
            1 => (m - k + 1, 0, m),
            2 => (m - k + 1, 0, m - k + 1),
            _ => (m - k + 1, k - 1, m),
        }
    }
}

impl Iterator for WindowIter<'_> {
    type Item = WindowCounts;

    fn next(&mut self) -> Option<WindowCounts> {
        loop {
            if self.dir >= DIRECTIONS.len() {
                return None;
            }
            let (row_end, col_start, col_end) = self.bounds();
            if self.col < col_start {
                self.col = col_start;
            }
            if self.row >= row_end {
                self.dir += 1;
                self.row = 0;
                self.col = 0;
                continue;
            }
            let (dr, dc) = DIRECTIONS[self.dir];
            let counts = self.board.window_counts(self.row, self.col, dr, dc);
            self.col += 1;
            if self.col >= col_end {
                self.row += 1;
                self.col = 0;
            }
            return Some(counts);
        }
    }
}
