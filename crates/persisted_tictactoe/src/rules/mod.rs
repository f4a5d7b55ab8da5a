//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here keeps state
//! between calls, so every rule can be evaluated on any snapshot in a
//! history, including ones reached by jumping back in time.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use turn::next_mover;
pub use win::{LINES, winner, winning_line};
