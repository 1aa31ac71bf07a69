//! Core engine for generalized Tic-Tac-Toe: an m x m board where the first
//! player to line up `win_length` marks wins.
//!
//! `logic` holds the immutable board model and game rules; `engine` holds the
//! evaluator, the move orderer and the minimax family of searches.

pub mod engine;
pub mod logic;
