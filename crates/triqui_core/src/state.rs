//! The triqui game-state engine.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Reason a move intent was not accepted.
///
/// Rejections are ordinary values, not failures: illegal input from the
/// presentation layer is answered with one of these and the game state is
/// left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The game has already been decided.
    #[display("the game is already over")]
    GameOver,

    /// Row or column outside 0..=2.
    #[display("position ({row}, {col}) is out of range")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square at the position is already occupied.
    #[display("the {_0} square is already occupied")]
    SquareOccupied(Position),
}

impl std::error::Error for MoveRejection {}

/// Complete state of a triqui game.
///
/// Owns the board, the player to move, and the derived terminal status.
/// The only mutating operations are [`GameState::try_move`] (and its
/// boolean wrapper [`GameState::attempt_move`]) and [`GameState::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move next. Stays on the mover once the game ends.
    turn: Player,
    /// Derived terminal status.
    status: GameStatus,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move, in progress.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Rebuilds a state from decoded parts. Callers validate first.
    pub(crate) fn from_parts(board: Board, turn: Player, status: GameStatus) -> Self {
        Self {
            board,
            turn,
            status,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the square at (row, col), or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Square> {
        Position::from_row_col(row, col).map(|pos| self.board.get(pos))
    }

    /// Attempts a move at (row, col) for the player whose turn it is.
    ///
    /// Check order is a rule of the game, not an implementation detail:
    /// terminal-status guard, then range, then occupancy; after placing,
    /// the win check precedes the fullness check, so a move that completes
    /// a line while filling the last square scores as a win, not a draw.
    ///
    /// On acceptance returns the position played. On rejection the state is
    /// unchanged.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_move(&mut self, row: usize, col: usize) -> Result<Position, MoveRejection> {
        if self.status.is_terminal() {
            return Err(MoveRejection::GameOver);
        }

        let pos =
            Position::from_row_col(row, col).ok_or(MoveRejection::OutOfRange { row, col })?;

        if !self.board.is_empty(pos) {
            return Err(MoveRejection::SquareOccupied(pos));
        }

        let mover = self.turn;
        self.board.set(pos, Square::Occupied(mover));

        if rules::has_winning_line(&self.board, mover) {
            self.status = GameStatus::Won(mover);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.turn = mover.opponent();
        }

        debug!(position = %pos, status = %self.status, "move accepted");
        crate::invariants::assert_invariants(self);
        Ok(pos)
    }

    /// Attempts a move, reporting only whether it was accepted.
    ///
    /// The boolean surface of [`GameState::try_move`]: presentation code
    /// that has no use for the rejection reason can ignore it without
    /// error-handling overhead.
    pub fn attempt_move(&mut self, row: usize, col: usize) -> bool {
        self.try_move(row, col).is_ok()
    }

    /// Reinitializes to the fresh starting state. Always succeeds.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game() {
        let state = GameState::new();
        assert_eq!(state.turn(), Player::X);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(!state.board().is_full());
    }

    #[test]
    fn test_turn_alternates() {
        let mut state = GameState::new();
        assert!(state.attempt_move(0, 0));
        assert_eq!(state.turn(), Player::O);
        assert!(state.attempt_move(1, 1));
        assert_eq!(state.turn(), Player::X);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut state = GameState::new();
        assert_eq!(
            state.try_move(3, 0),
            Err(MoveRejection::OutOfRange { row: 3, col: 0 })
        );
        // No side effects.
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut state = GameState::new();
        assert!(state.attempt_move(0, 0));
        let before = state.clone();
        assert_eq!(
            state.try_move(0, 0),
            Err(MoveRejection::SquareOccupied(Position::TopLeft))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_win_keeps_turn_on_winner() {
        let mut state = GameState::new();
        // X: top row, O: middle row.
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            assert!(state.attempt_move(row, col));
        }
        assert_eq!(state.status(), GameStatus::Won(Player::X));
        assert_eq!(state.turn(), Player::X);
    }

    #[test]
    fn test_no_moves_after_terminal() {
        let mut state = GameState::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            assert!(state.attempt_move(row, col));
        }
        let finished = state.clone();
        assert_eq!(state.try_move(2, 2), Err(MoveRejection::GameOver));
        assert_eq!(state, finished);
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let mut state = GameState::new();
        assert!(state.attempt_move(0, 0));
        state.reset();
        assert_eq!(state, GameState::new());
    }
}
