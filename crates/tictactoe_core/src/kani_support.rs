//! Kani arbitrary implementations for the core types.
//!
//! These let the model checker explore all values of a type during
//! verification. Only compiled under `cfg(kani)`.

use crate::action::Move;
use crate::position::Position;
use crate::types::{Player, Square};

impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

impl kani::Arbitrary for Position {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 9);
        match index {
            0 => Position::TopLeft,
            1 => Position::TopCenter,
            2 => Position::TopRight,
            3 => Position::MiddleLeft,
            4 => Position::Center,
            5 => Position::MiddleRight,
            6 => Position::BottomLeft,
            7 => Position::BottomCenter,
            8 => Position::BottomRight,
            _ => unreachable!(),
        }
    }
}

impl kani::Arbitrary for Square {
    fn any() -> Self {
        if kani::any() {
            Square::Empty
        } else {
            Square::Occupied(kani::any())
        }
    }
}

impl kani::Arbitrary for Move {
    fn any() -> Self {
        Move::new(kani::any(), kani::any())
    }
}
