//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::game::Game;
use crate::types::{Board, Square};

/// Invariant: board squares are monotonic (never overwritten).
///
/// Once a square transitions from Empty to Occupied, it never changes.
/// Verified by replaying the move history and comparing boards.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();

        for mv in game.history() {
            // Square must be empty before placing
            if reconstructed.get(mv.position) != Square::Empty {
                return false;
            }
            reconstructed.set(mv.position, Square::Occupied(mv.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
