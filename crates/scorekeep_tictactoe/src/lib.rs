//! Tic-tac-toe with a running score between two contestants.
//!
//! # Architecture
//!
//! - **Board**: a fixed 3x3 grid of squares with placement, reset and
//!   win/tie detection
//! - **Contestant**: a name, a marker and a score that only goes up
//! - **Match**: two contestants and one board, played round by round
//!
//! The crate does no I/O. A presentation layer feeds locations into
//! [`Match::play_round`], renders the [`RoundResult`] and swaps the active
//! contestant after every processed round.
//!
//! # Example
//!
//! ```
//! use scorekeep_tictactoe::{Location, Match, RoundResult};
//!
//! let mut game = Match::new("Ada", "Grace");
//! for text in ["00", "10", "01", "11", "02"] {
//!     let location: Location = text.parse().unwrap();
//!     let result = game.play_round(location);
//!     if let RoundResult::Winner(winner) = result {
//!         assert_eq!(winner.name(), "Ada");
//!         assert_eq!(winner.score(), 1);
//!     }
//!     game.swap_active();
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod contestant;
mod game;
mod location;
mod phases;
pub mod rules;
mod types;

pub use board::{Board, BoardSnapshot, PlaceError};
pub use contestant::Contestant;
pub use game::{Contestants, Match, MoveError, RoundResult};
pub use location::{BOARD_LENGTH, Location, LocationError};
pub use phases::{Outcome, Phase};
pub use types::{Marker, Square};
