//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The session manager and
//! the AI engine both evaluate positions through this module, so the win
//! conditions live in exactly one place.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{WIN_CONDITIONS, WinCondition, check_win, find_winning_move, winning_line};
