use crate::logic::board::{Board, Player};
use thiserror::Error;

/// Rejected moves. The search engine never triggers these against its own
/// generated moves; an internal occurrence is an invariant violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: u8, col: u8, size: usize },
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },
    #[error("the game is already over")]
    GameOver,
}

/// Invalid engine or board parameters, detected at construction. Never
/// retried; surfaced straight to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be at least 1, got {size}")]
    InvalidBoardSize { size: usize },
    #[error("board size {size} exceeds the supported maximum of {max}")]
    BoardTooLarge { size: usize, max: usize },
    #[error("win length {win_length} must be between 1 and the board size {size}")]
    InvalidWinLength { win_length: usize, size: usize },
    #[error("depth limit must be positive for a non-terminal position")]
    InvalidDepthLimit,
}

/// k-in-a-row detection. Scans rows, then columns, then both diagonal
/// directions; the first fully-owned window decides. Boards with two winning
/// lines are unreachable under alternating play but still resolve to the
/// first window in scan order.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    let k = board.win_length() as u8;
    for w in board.windows() {
        if w.x == k {
            return Some(Player::X);
        }
        if w.o == k {
            return Some(Player::O);
        }
    }
    None
}

/// True once the game is decided: a winner exists or the board is full.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}
