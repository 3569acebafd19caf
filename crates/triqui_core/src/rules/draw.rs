//! Draw detection for triqui.

use super::win::has_winning_line;
use crate::types::{Board, Player};
use tracing::instrument;

/// Checks whether the board is a finished draw: full with no winning line
/// for either player.
///
/// The engine itself scores a draw as "board full after the win check
/// failed"; this combined form serves payload validation.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
        && !has_winning_line(board, Player::X)
        && !has_winning_line(board, Player::O)
}
