//! Mark balance invariant: counts follow strict alternation from X.

use super::Invariant;
use crate::state::GameState;
use crate::types::{GameStatus, Player};
use tracing::warn;

/// Invariant: mark counts are consistent with alternating play.
///
/// X moves first, so X's count equals O's count or exceeds it by exactly
/// one. While the game is in progress, the turn must match that parity:
/// equal counts mean X to move, X one ahead means O to move.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Player::X);
        let o_count = state.board().count(Player::O);

        if x_count != o_count && x_count != o_count + 1 {
            warn!(x_count, o_count, "mark balance violated");
            return false;
        }

        if state.status() == GameStatus::InProgress {
            let expected = if x_count == o_count {
                Player::X
            } else {
                Player::O
            };
            if state.turn() != expected {
                warn!(x_count, o_count, turn = %state.turn(), "turn parity violated");
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "mark counts follow strict alternation starting at X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Board, Square};

    #[test]
    fn test_fresh_game_holds() {
        assert!(MarkBalanceInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut state = GameState::new();
        assert!(state.attempt_move(0, 0));
        assert!(state.attempt_move(1, 1));
        assert!(MarkBalanceInvariant::holds(&state));
    }

    #[test]
    fn test_two_extra_x_marks_violate() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        let state = GameState::from_parts(board, Player::O, GameStatus::InProgress);
        assert!(!MarkBalanceInvariant::holds(&state));
    }

    #[test]
    fn test_more_o_than_x_violates() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::O));
        let state = GameState::from_parts(board, Player::X, GameStatus::InProgress);
        assert!(!MarkBalanceInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_turn_parity_violates() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        // X just moved, so O must be to move.
        let state = GameState::from_parts(board, Player::X, GameStatus::InProgress);
        assert!(!MarkBalanceInvariant::holds(&state));
    }
}
