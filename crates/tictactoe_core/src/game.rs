//! The tic-tac-toe state machine.
//!
//! A [`Game`] owns the board, the turn, the status, and the move history,
//! and keeps them consistent: every state change flows through
//! [`Game::make_move`] or [`Game::reset`], and the status is recomputed
//! synchronously inside the same call that mutates the board.

use crate::action::{Move, MoveError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::line::Line;
use crate::position::Position;
use crate::rules;
use crate::rules::Win;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The game is ongoing and accepts moves.
    InProgress,
    /// A player completed a line. Terminal.
    Won(Win),
    /// The board filled with no completed line. Terminal.
    Draw,
}

/// A tic-tac-toe game.
///
/// Starts with an empty board, X to move, and an empty history. The two
/// terminal statuses ([`GameStatus::Won`] and [`GameStatus::Draw`]) reject
/// every move; [`Game::reset`] is the only way back to the initial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Places the current player's mark at the given position.
    ///
    /// On success the status is recomputed before returning: the win check
    /// runs first, then the draw check, and the turn flips only when the
    /// game continues. The winner recorded in [`GameStatus::Won`] is the
    /// mark just placed.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] when the game is already over and
    /// [`MoveError::SquareOccupied`] when the square holds a mark. A
    /// rejected move leaves the game untouched, so callers may ignore the
    /// error to get silent no-op behavior.
    #[instrument(skip(self), fields(position = ?pos, player = ?self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));

        // Win check strictly before draw check: a board-filling winning
        // move is a win. The turn does not flip on a terminal move.
        if let Some(win) = rules::check_win(&self.board) {
            self.status = GameStatus::Won(win);
            debug!(winner = ?win.winner, line = %win.line, "game won");
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            debug!("game drawn");
        } else {
            self.to_move = player.opponent();
        }

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "game invariants violated after move"
        );
        Ok(())
    }

    /// Places the current player's mark at the given row-major index.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for indices outside 0-8;
    /// otherwise behaves like [`Game::make_move`].
    #[instrument(skip(self))]
    pub fn make_move_at(&mut self, index: usize) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.make_move(pos)
    }

    /// Restores the initial state: empty board, X to move, empty history.
    ///
    /// Valid in any state and always succeeds.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("resetting game");
        *self = Self::new();
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player due to move next.
    ///
    /// `None` once the game is over; turn order has no meaning in a
    /// terminal state.
    pub fn to_move(&self) -> Option<Player> {
        match self.status {
            GameStatus::InProgress => Some(self.to_move),
            GameStatus::Won(_) | GameStatus::Draw => None,
        }
    }

    /// The current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Accepted moves so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The winning player, if the game has been won.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(win) => Some(win.winner),
            _ => None,
        }
    }

    /// The completed line, if the game has been won.
    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            GameStatus::Won(win) => Some(win.line),
            _ => None,
        }
    }

    /// Whether the game has reached a terminal status.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
