//! Status consistency invariant: the status field agrees with the board.

use super::Invariant;
use crate::rules::{has_winning_line, is_draw};
use crate::state::GameState;
use crate::types::{GameStatus, Player};
use tracing::warn;

/// Invariant: the recorded status is the one the board implies.
///
/// `Won(p)` requires a completed line for `p`; `Draw` requires a full,
/// line-free board; `InProgress` requires neither condition to hold yet.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let consistent = match state.status() {
            GameStatus::InProgress => {
                !board.is_full()
                    && !has_winning_line(board, Player::X)
                    && !has_winning_line(board, Player::O)
            }
            GameStatus::Won(player) => has_winning_line(board, player),
            GameStatus::Draw => is_draw(board),
        };

        if !consistent {
            warn!(status = %state.status(), "status does not match the board");
        }
        consistent
    }

    fn description() -> &'static str {
        "the recorded status matches the board contents"
    }
}
