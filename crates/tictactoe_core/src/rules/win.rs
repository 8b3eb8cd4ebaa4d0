//! Win detection logic for tic-tac-toe.

use crate::line::Line;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A completed line and the player who holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// The completed line.
    pub line: Line,
    /// The player occupying all three squares of the line.
    pub winner: Player,
}

impl Win {
    /// Creates a new win record.
    pub fn new(line: Line, winner: Player) -> Self {
        Self { line, winner }
    }

    /// The completed line.
    pub fn line(&self) -> Line {
        self.line
    }

    /// The winning player.
    pub fn winner(&self) -> Player {
        self.winner
    }
}

/// Scans the board for a completed line.
///
/// Lines are checked in `Line::ALL` order and the first complete line is
/// reported, so the result is deterministic even when a single move
/// completes two lines at once.
#[instrument]
pub fn check_win(board: &Board) -> Option<Win> {
    for line in Line::ALL {
        let [a, b, c] = line.positions();
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return Some(Win::new(line, player));
        }
    }
    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    check_win(board).map(|win| win.winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_win(&board), None);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_win(&board), Some(Win::new(Line::TopRow, Player::X)));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
        assert_eq!(check_win(&board).map(|w| w.line), Some(Line::Diagonal));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_double_win_reports_first_line_in_scan_order() {
        // X holds the top row and the left column at once.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Square::Occupied(Player::X));
        }
        let win = check_win(&board).unwrap();
        assert_eq!(win.line, Line::TopRow);
        assert_eq!(win.winner, Player::X);
    }
}
