//! Exclusive winner invariant: both players never hold completed lines.

use super::Invariant;
use crate::rules::has_winning_line;
use crate::state::GameState;
use crate::types::Player;
use tracing::warn;

/// Invariant: at most one player has a winning line.
///
/// A move adds a single square, so reachable play can never produce
/// simultaneous lines for both players. A board that shows both is
/// structurally impossible.
pub struct ExclusiveWinnerInvariant;

impl Invariant<GameState> for ExclusiveWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        let x_wins = has_winning_line(state.board(), Player::X);
        let o_wins = has_winning_line(state.board(), Player::O);

        if x_wins && o_wins {
            warn!("both players hold winning lines");
            return false;
        }

        true
    }

    fn description() -> &'static str {
        "at most one player holds a winning line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Board, GameStatus, Square};

    #[test]
    fn test_fresh_game_holds() {
        assert!(ExclusiveWinnerInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_single_winner_holds() {
        let mut state = GameState::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            assert!(state.attempt_move(row, col));
        }
        assert!(ExclusiveWinnerInvariant::holds(&state));
    }

    #[test]
    fn test_double_winner_violates() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.set(pos, Square::Occupied(Player::X));
        }
        for pos in [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ] {
            board.set(pos, Square::Occupied(Player::O));
        }
        let state = GameState::from_parts(board, Player::X, GameStatus::Won(Player::X));
        assert!(!ExclusiveWinnerInvariant::holds(&state));
    }
}
