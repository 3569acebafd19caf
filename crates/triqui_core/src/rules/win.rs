//! Win detection for triqui.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Checks whether the given player occupies a full row, column, or diagonal.
///
/// Pure and deterministic over the 8 possible lines. The engine queries
/// this only for the mark that just moved; a move adds a single square, so
/// at most one player can complete a line per move.
#[instrument(skip(board))]
pub fn has_winning_line(board: &Board, player: Player) -> bool {
    const LINES: [[Position; 3]; 8] = [
        // Rows
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ],
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
        // Columns
        [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ],
        [
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ],
        [
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ],
        // Diagonals
        [Position::TopLeft, Position::Center, Position::BottomRight],
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ];

    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|[a, b, c]| board.get(*a) == mark && board.get(*b) == mark && board.get(*c) == mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupy(board: &mut Board, positions: &[Position], player: Player) {
        for pos in positions {
            board.set(*pos, Square::Occupied(player));
        }
    }

    #[test]
    fn test_empty_board_has_no_line() {
        let board = Board::new();
        assert!(!has_winning_line(&board, Player::X));
        assert!(!has_winning_line(&board, Player::O));
    }

    #[test]
    fn test_top_row_wins() {
        let mut board = Board::new();
        occupy(
            &mut board,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            Player::X,
        );
        assert!(has_winning_line(&board, Player::X));
        assert!(!has_winning_line(&board, Player::O));
    }

    #[test]
    fn test_left_column_wins() {
        let mut board = Board::new();
        occupy(
            &mut board,
            &[
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
            Player::O,
        );
        assert!(has_winning_line(&board, Player::O));
    }

    #[test]
    fn test_main_diagonal_wins() {
        let mut board = Board::new();
        occupy(
            &mut board,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
            Player::X,
        );
        assert!(has_winning_line(&board, Player::X));
    }

    #[test]
    fn test_anti_diagonal_wins() {
        let mut board = Board::new();
        occupy(
            &mut board,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
            Player::O,
        );
        assert!(has_winning_line(&board, Player::O));
    }

    #[test]
    fn test_two_in_a_row_is_not_a_line() {
        let mut board = Board::new();
        occupy(
            &mut board,
            &[Position::TopLeft, Position::TopCenter],
            Player::X,
        );
        assert!(!has_winning_line(&board, Player::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert!(!has_winning_line(&board, Player::X));
        assert!(!has_winning_line(&board, Player::O));
    }
}
