//! Game rules for tic-tac-toe.
//!
//! Pure functions that judge a board. They never mutate it; the
//! [`Board`](super::Board) composes them into its outcome check.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winning_marker;
