use crate::engine::Move;
use crate::logic::board::{Board, Player};
use crate::logic::rules::{self, ConfigError, MoveError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mv: Move,
    pub player: Player,
}

/// Drives one game from the caller's side: validates moves, alternates the
/// turn and tracks the outcome. The engine itself never touches shared
/// state; callers feed its returned moves through `make_move`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Player,
    pub status: GameStatus,
    pub history: Vec<MoveRecord>,
}

impl GameState {
    pub fn new(size: usize, win_length: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            board: Board::new(size, win_length)?,
            turn: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        })
    }

    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        let next = self.board.apply_move(mv, self.turn)?;
        self.history.push(MoveRecord {
            mv,
            player: self.turn,
        });
        self.board = next;
        self.turn = self.turn.opposite();
        self.update_status();
        Ok(())
    }

    /// Reverts the most recent move. Boards are immutable values, so the
    /// position is rebuilt by replaying the remaining history.
    pub fn undo_move(&mut self) -> bool {
        let Some(record) = self.history.pop() else {
            return false;
        };

        let mut board = Board::new(self.board.size(), self.board.win_length())
            .expect("board parameters were validated at construction");
        for past in &self.history {
            board = board
                .apply_move(past.mv, past.player)
                .expect("recorded moves were legal when played");
        }

        self.board = board;
        self.turn = record.player;
        self.update_status();
        true
    }

    fn update_status(&mut self) {
        self.status = match rules::winner(&self.board) {
            Some(p) => GameStatus::Won(p),
            None if self.board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_alternate_starting_with_x() {
        let mut game = GameState::new(3, 3).unwrap();
        assert_eq!(game.turn, Player::X);

        game.make_move(Move::new(0, 0)).unwrap();
        assert_eq!(game.board.get(0, 0), Some(Player::X));
        assert_eq!(game.turn, Player::O);

        game.make_move(Move::new(1, 1)).unwrap();
        assert_eq!(game.board.get(1, 1), Some(Player::O));
        assert_eq!(game.turn, Player::X);
    }

    #[test]
    fn test_win_is_detected_and_locks_the_game() {
        let mut game = GameState::new(3, 3).unwrap();
        // X: (0,0) (0,1) (0,2), O: (1,0) (1,1)
        game.make_move(Move::new(0, 0)).unwrap();
        game.make_move(Move::new(1, 0)).unwrap();
        game.make_move(Move::new(0, 1)).unwrap();
        game.make_move(Move::new(1, 1)).unwrap();
        game.make_move(Move::new(0, 2)).unwrap();

        assert_eq!(game.status, GameStatus::Won(Player::X));
        assert_eq!(
            game.make_move(Move::new(2, 2)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_draw_status_on_full_board() {
        let mut game = GameState::new(3, 3).unwrap();
        // A known drawn sequence.
        for mv in [
            Move::new(1, 1),
            Move::new(0, 0),
            Move::new(0, 1),
            Move::new(2, 1),
            Move::new(0, 2),
            Move::new(2, 0),
            Move::new(1, 0),
            Move::new(1, 2),
            Move::new(2, 2),
        ] {
            game.make_move(mv).unwrap();
        }
        assert_eq!(game.status, GameStatus::Draw);
    }

    #[test]
    fn test_undo_restores_board_and_turn() {
        let mut game = GameState::new(3, 3).unwrap();
        let initial = game.board.clone();

        game.make_move(Move::new(1, 1)).unwrap();
        game.make_move(Move::new(0, 0)).unwrap();

        assert!(game.undo_move());
        assert_eq!(game.turn, Player::O);
        assert!(game.board.get(0, 0).is_none());
        assert_eq!(game.board.get(1, 1), Some(Player::X));

        assert!(game.undo_move());
        assert_eq!(game.board, initial);
        assert_eq!(game.turn, Player::X);

        assert!(!game.undo_move());
    }

    #[test]
    fn test_undo_reopens_a_finished_game() {
        let mut game = GameState::new(3, 3).unwrap();
        game.make_move(Move::new(0, 0)).unwrap();
        game.make_move(Move::new(1, 0)).unwrap();
        game.make_move(Move::new(0, 1)).unwrap();
        game.make_move(Move::new(1, 1)).unwrap();
        game.make_move(Move::new(0, 2)).unwrap();
        assert_eq!(game.status, GameStatus::Won(Player::X));

        assert!(game.undo_move());
        assert_eq!(game.status, GameStatus::InProgress);
        assert_eq!(game.turn, Player::X);
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut game = GameState::new(3, 3).unwrap();
        game.make_move(Move::new(1, 1)).unwrap();
        assert!(matches!(
            game.make_move(Move::new(1, 1)),
            Err(MoveError::CellOccupied { .. })
        ));
        // The failed attempt must not consume O's turn.
        assert_eq!(game.turn, Player::O);
        assert_eq!(game.history.len(), 1);
    }
}
