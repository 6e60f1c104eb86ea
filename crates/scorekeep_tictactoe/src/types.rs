//! Core domain types for tic-tac-toe.

use super::location::Location;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Marker a contestant places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// Marker X (moves first in the opening game).
    #[display("X")]
    X,
    /// Marker O.
    #[display("O")]
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A single cell of the board.
///
/// The coordinates are fixed at construction; only the marker changes,
/// and only through the owning [`Board`](super::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Square {
    location: Location,
    marker: Option<Marker>,
}

impl Square {
    /// Creates an empty square at the given location.
    pub(crate) fn new(location: Location) -> Self {
        Self {
            location,
            marker: None,
        }
    }

    /// Returns true if a marker has been placed here.
    pub fn is_marked(&self) -> bool {
        self.marker.is_some()
    }

    /// Returns the marker on this square, if any.
    pub fn marker(&self) -> Option<Marker> {
        self.marker
    }

    /// Places a marker on this square.
    #[instrument(level = "trace", skip(self), fields(location = %self.location))]
    pub(crate) fn set_marker(&mut self, marker: Marker) {
        self.marker = Some(marker);
    }

    /// Empties the square.
    pub(crate) fn clear(&mut self) {
        self.marker = None;
    }

    /// Row index (0-2).
    pub fn row(&self) -> usize {
        self.location.row()
    }

    /// Column index (0-2).
    pub fn column(&self) -> usize {
        self.location.column()
    }

    /// Location of this square.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Symbol used when printing the board.
    pub fn symbol(&self) -> char {
        match self.marker {
            Some(Marker::X) => 'X',
            Some(Marker::O) => 'O',
            None => '_',
        }
    }
}
