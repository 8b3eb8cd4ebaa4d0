//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::game::Game;
use crate::types::Player;

/// Invariant: players alternate turns.
///
/// Move history must show the X, O, X, O, ... pattern with X first, and
/// while the game is in progress the player to move must match the
/// history's parity. Terminal states carry no turn, so the parity check
/// only applies in progress.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        if let Some(next) = game.to_move() {
            let expected = if history.len() % 2 == 0 {
                Player::X
            } else {
                Player::O
            };
            return next == expected;
        }

        true
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::position::Position;

    #[test]
    fn test_new_game_holds() {
        let game = Game::new();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_single_move_holds() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Some(Player::O));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = Game::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ] {
            game.make_move(pos).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_first_move_by_o_violates() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();

        game.history[0] = Move::new(Player::O, Position::Center);

        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = Game::new();
        game.make_move(Position::TopLeft).unwrap();
        game.make_move(Position::Center).unwrap();

        game.history[1] = Move::new(Player::X, Position::Center);

        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_terminal_game_skips_parity_check() {
        let mut game = Game::new();
        // X wins the top row; to_move() is None afterwards.
        for index in [0, 3, 1, 4, 2] {
            game.make_move_at(index).unwrap();
        }
        assert_eq!(game.to_move(), None);
        assert!(AlternatingTurnInvariant::holds(&game));
    }
}
