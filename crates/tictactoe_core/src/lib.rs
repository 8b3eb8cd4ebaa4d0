//! Tic-tac-toe game logic as an explicit state machine.
//!
//! The crate keeps board, turn, status, and history in a single [`Game`]
//! value whose status is recomputed synchronously on every accepted move.
//! There is no hidden reactivity: a move either mutates the state and
//! settles it before returning, or is rejected and changes nothing.
//!
//! # Architecture
//!
//! - **Types**: marks, squares, and board positions as closed enums
//! - **Rules**: pure win and draw evaluation over a board
//! - **Game**: the mutable state machine tying them together
//! - **Invariants**: checkable properties of every reachable state
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! game.make_move(Position::TopLeft)?;
//! game.make_move(Position::Center)?;
//!
//! assert_eq!(game.to_move(), Some(Player::X));
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod game;
#[cfg(kani)]
mod kani_support;
mod line;
mod position;
mod types;

// Public module declarations
pub mod invariants;
pub mod rules;

// Crate-level exports - Moves
pub use action::{Move, MoveError};

// Crate-level exports - State machine
pub use game::{Game, GameStatus};

// Crate-level exports - Board geometry
pub use line::Line;
pub use position::Position;

// Crate-level exports - Core types
pub use types::{Board, Player, Square};

// Crate-level exports - Win records
pub use rules::Win;
