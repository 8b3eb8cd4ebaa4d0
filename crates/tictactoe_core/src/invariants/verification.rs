//! Formal verification of state machine properties using the Kani model
//! checker.
//!
//! Each harness drives the real operations, so the explored states are
//! exactly the reachable ones (bounded by the unwind limits).

#[cfg(kani)]
mod proofs {
    use crate::action::MoveError;
    use crate::game::{Game, GameStatus};
    use crate::invariants::{GameInvariants, InvariantSet};
    use crate::position::Position;

    /// Any sequence of attempted moves preserves the game invariants.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_moves_preserve_invariants() {
        let mut game = Game::new();

        for _ in 0..4 {
            let pos: Position = kani::any();
            let _ = game.make_move(pos);
            assert!(GameInvariants::check_all(&game).is_ok());
        }
    }

    /// Out-of-range indices are rejected without panicking.
    #[kani::proof]
    fn verify_out_of_range_index_rejected() {
        let mut game = Game::new();
        let index: usize = kani::any();
        kani::assume(index >= 9);

        assert_eq!(game.make_move_at(index), Err(MoveError::OutOfBounds(index)));
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    /// Reset restores the initial state from any reachable state.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_reset_restores_initial_state() {
        let mut game = Game::new();
        for _ in 0..3 {
            let pos: Position = kani::any();
            let _ = game.make_move(pos);
        }

        game.reset();
        assert_eq!(game, Game::new());
    }

    /// A won game rejects every further move.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_terminal_game_rejects_moves() {
        let mut game = Game::new();
        // X claims the top row while O fills the middle row.
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            let accepted = game.make_move(pos);
            assert!(accepted.is_ok());
        }
        assert!(game.is_over());

        let pos: Position = kani::any();
        assert_eq!(game.make_move(pos), Err(MoveError::GameOver));
    }
}
