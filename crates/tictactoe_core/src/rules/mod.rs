//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are separated from
//! board storage so the state machine and the invariant checks can share
//! them without borrowing the whole game.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Win, check_win, check_winner};
