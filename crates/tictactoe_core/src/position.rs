//! Board positions as a closed enum.
//!
//! Using an enum rather than raw indices makes out-of-range positions
//! unrepresentable once parsed, so the move pipeline only validates
//! occupancy and game state.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A position on the 3x3 board.
///
/// Variants map to row-major indices 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Position {
    /// Top-left corner (index 0).
    TopLeft,
    /// Top-center edge (index 1).
    TopCenter,
    /// Top-right corner (index 2).
    TopRight,
    /// Middle-left edge (index 3).
    MiddleLeft,
    /// Center square (index 4).
    Center,
    /// Middle-right edge (index 5).
    MiddleRight,
    /// Bottom-left corner (index 6).
    BottomLeft,
    /// Bottom-center edge (index 7).
    BottomCenter,
    /// Bottom-right corner (index 8).
    BottomRight,
}

impl Position {
    /// All positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts the position to its row-major board index.
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Converts a row-major board index to a position.
    ///
    /// Returns `None` for indices outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// Row of the position (0-2, top to bottom).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of the position (0-2, left to right).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Builds a position from row and column coordinates.
    ///
    /// Returns `None` when either coordinate is outside 0-2.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row > 2 || col > 2 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Human-readable label for the position.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::MiddleLeft => "middle-left",
            Position::Center => "center",
            Position::MiddleRight => "middle-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Returns all empty positions on the given board, in row-major order.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, Square};
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip() {
        for pos in Position::iter() {
            assert_eq!(Position::from_index(pos.to_index()), Some(pos));
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::from_index(100), None);
    }

    #[test]
    fn test_row_col() {
        assert_eq!(Position::TopLeft.row(), 0);
        assert_eq!(Position::TopLeft.col(), 0);
        assert_eq!(Position::Center.row(), 1);
        assert_eq!(Position::Center.col(), 1);
        assert_eq!(Position::BottomRight.row(), 2);
        assert_eq!(Position::BottomRight.col(), 2);
    }

    #[test]
    fn test_from_row_col() {
        assert_eq!(Position::from_row_col(0, 0), Some(Position::TopLeft));
        assert_eq!(Position::from_row_col(1, 2), Some(Position::MiddleRight));
        assert_eq!(Position::from_row_col(2, 1), Some(Position::BottomCenter));
        assert_eq!(Position::from_row_col(3, 0), None);
        assert_eq!(Position::from_row_col(0, 3), None);
    }

    #[test]
    fn test_all_matches_iter_order() {
        let from_iter: Vec<Position> = Position::iter().collect();
        assert_eq!(from_iter, Position::ALL.to_vec());
    }

    #[test]
    fn test_valid_moves_excludes_occupied() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        let moves = Position::valid_moves(&board);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Position::Center));
        assert!(!moves.contains(&Position::TopLeft));
    }
}
