//! The eight winning lines of the board.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A line of three positions that wins the game when one player holds all of it.
///
/// `ALL` lists rows first, then columns, then diagonals. Win detection scans
/// in that order and reports the first complete line, which pins down the
/// reported line when a single move completes two at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Line {
    /// Top row (0, 1, 2).
    TopRow,
    /// Middle row (3, 4, 5).
    MiddleRow,
    /// Bottom row (6, 7, 8).
    BottomRow,
    /// Left column (0, 3, 6).
    LeftColumn,
    /// Center column (1, 4, 7).
    CenterColumn,
    /// Right column (2, 5, 8).
    RightColumn,
    /// Main diagonal (0, 4, 8).
    Diagonal,
    /// Anti-diagonal (2, 4, 6).
    AntiDiagonal,
}

impl Line {
    /// All lines in scan order: rows, columns, diagonals.
    pub const ALL: [Line; 8] = [
        Line::TopRow,
        Line::MiddleRow,
        Line::BottomRow,
        Line::LeftColumn,
        Line::CenterColumn,
        Line::RightColumn,
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// The three positions making up this line.
    pub fn positions(self) -> [Position; 3] {
        match self {
            Line::TopRow => [Position::TopLeft, Position::TopCenter, Position::TopRight],
            Line::MiddleRow => [
                Position::MiddleLeft,
                Position::Center,
                Position::MiddleRight,
            ],
            Line::BottomRow => [
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
            Line::LeftColumn => [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
            Line::CenterColumn => [
                Position::TopCenter,
                Position::Center,
                Position::BottomCenter,
            ],
            Line::RightColumn => [
                Position::TopRight,
                Position::MiddleRight,
                Position::BottomRight,
            ],
            Line::Diagonal => [Position::TopLeft, Position::Center, Position::BottomRight],
            Line::AntiDiagonal => [Position::TopRight, Position::Center, Position::BottomLeft],
        }
    }

    /// The three board indices making up this line, in row-major order.
    pub fn indices(self) -> [usize; 3] {
        let [a, b, c] = self.positions();
        [a.to_index(), b.to_index(), c.to_index()]
    }

    /// Checks whether the line passes through the given position.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }

    /// Human-readable label for the line.
    pub fn label(self) -> &'static str {
        match self {
            Line::TopRow => "top row",
            Line::MiddleRow => "middle row",
            Line::BottomRow => "bottom row",
            Line::LeftColumn => "left column",
            Line::CenterColumn => "center column",
            Line::RightColumn => "right column",
            Line::Diagonal => "diagonal",
            Line::AntiDiagonal => "anti-diagonal",
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_scan_order() {
        let expected = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];
        for (line, indices) in Line::ALL.iter().zip(expected) {
            assert_eq!(line.indices(), indices);
        }
    }

    #[test]
    fn test_all_matches_iter_order() {
        let from_iter: Vec<Line> = Line::iter().collect();
        assert_eq!(from_iter, Line::ALL.to_vec());
    }

    #[test]
    fn test_contains() {
        assert!(Line::TopRow.contains(Position::TopCenter));
        assert!(!Line::TopRow.contains(Position::Center));
        assert!(Line::Diagonal.contains(Position::Center));
        assert!(Line::AntiDiagonal.contains(Position::Center));
    }

    #[test]
    fn test_every_position_lies_on_a_line() {
        for pos in Position::ALL {
            assert!(Line::ALL.iter().any(|line| line.contains(pos)));
        }
    }

    #[test]
    fn test_center_lies_on_four_lines() {
        let count = Line::ALL
            .iter()
            .filter(|line| line.contains(Position::Center))
            .count();
        assert_eq!(count, 4);
    }
}
