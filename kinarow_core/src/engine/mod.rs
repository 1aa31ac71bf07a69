use serde::{Deserialize, Serialize};
use std::fmt;

pub mod config;
pub mod eval;
pub mod move_list;
pub mod ordering;
pub mod search;


/// A board coordinate targeted by the side to move. Only meaningful relative
/// to the board it was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Signed evaluation score; positive favors the maximizing player of the
/// search call that produced it.
pub type Score = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// `None` exactly when the searched position was already terminal.
    pub best_move: Option<Move>,
    pub score: Score,
}

/// Node counter threaded by `&mut` through one search call's recursion.
/// Purely diagnostic: it never affects search results, and one instance must
/// not be shared by two in-flight searches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeCounter {
    nodes: u64,
}

impl NodeCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: 0 }
    }

    pub fn tick(&mut self) {
        self.nodes += 1;
    }

    pub fn reset(&mut self) {
        self.nodes = 0;
    }

    #[must_use]
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }
}
