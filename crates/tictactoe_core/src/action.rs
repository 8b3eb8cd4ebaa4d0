//! Moves and move rejection reasons.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A recorded move: which player claimed which position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The player who made the move.
    pub player: Player,
    /// The position the player claimed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// The player who made the move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The position the player claimed.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.position)
    }
}

/// Reasons a move is rejected.
///
/// A rejected move leaves the game untouched, so callers may treat these
/// as no-ops or surface them, whichever fits the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The chosen square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
    /// The game has already been won or drawn.
    #[display("The game is already over")]
    GameOver,
    /// The board index is outside 0-8.
    #[display("Index {} is out of bounds (expected 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mv = Move::new(Player::X, Position::TopLeft);
        assert_eq!(mv.to_string(), "X -> top-left");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Square center is already occupied"
        );
        assert_eq!(MoveError::GameOver.to_string(), "The game is already over");
        assert_eq!(
            MoveError::OutOfBounds(9).to_string(),
            "Index 9 is out of bounds (expected 0-8)"
        );
    }
}
