//! The 3x3 board.

use super::location::{BOARD_LENGTH, Location, LocationError};
use super::phases::Outcome;
use super::rules;
use super::types::{Marker, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Error returned when a marker can't be placed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The square already holds a marker.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Location),

    /// The requested coordinates are not on the board.
    #[display("{}", _0)]
    OutOfRange(LocationError),
}

impl std::error::Error for PlaceError {}

impl From<LocationError> for PlaceError {
    fn from(err: LocationError) -> Self {
        Self::OutOfRange(err)
    }
}

/// Fixed 3x3 grid of squares.
///
/// The nine squares are created once and never replaced; placement and
/// reset only change their markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; BOARD_LENGTH]; BOARD_LENGTH],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        let squares = std::array::from_fn(|row| {
            std::array::from_fn(|column| Square::new(Location::ALL[row * BOARD_LENGTH + column]))
        });
        Self { squares }
    }

    /// Places `marker` at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::SquareOccupied`] without touching the board if
    /// the square already holds a marker.
    #[instrument(skip(self))]
    pub fn place_marker(&mut self, marker: Marker, location: Location) -> Result<(), PlaceError> {
        let square = &mut self.squares[location.row()][location.column()];
        if square.is_marked() {
            warn!("Square already occupied");
            return Err(PlaceError::SquareOccupied(location));
        }

        square.set_marker(marker);
        debug!("Marker placed");
        Ok(())
    }

    /// Places `marker` at raw coordinates, validating them first.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OutOfRange`] for coordinates off the board, or
    /// [`PlaceError::SquareOccupied`] as [`Board::place_marker`] does.
    pub fn place_marker_at(
        &mut self,
        marker: Marker,
        row: usize,
        column: usize,
    ) -> Result<(), PlaceError> {
        let location = Location::new(row, column)?;
        self.place_marker(marker, location)
    }

    /// Empties every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares
            .iter_mut()
            .flatten()
            .for_each(Square::clear);
        debug!("Board reset");
    }

    /// Judges the board: a winner, a tie, or still pending.
    #[instrument(skip(self), fields(marked = self.marked_count()))]
    pub fn check_outcome(&self) -> Outcome {
        let outcome = if let Some(marker) = rules::winning_marker(self) {
            Outcome::Winner(marker)
        } else if rules::is_full(self) {
            Outcome::Tie
        } else {
            Outcome::Pending
        };
        debug!(%outcome, "Board judged");
        outcome
    }

    /// Returns the square at `location`.
    pub fn square(&self, location: Location) -> &Square {
        &self.squares[location.row()][location.column()]
    }

    /// Iterates the squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter().flatten()
    }

    /// Marker at raw coordinates known to be on the board.
    pub(crate) fn marker_at(&self, row: usize, column: usize) -> Option<Marker> {
        self.squares[row][column].marker()
    }

    /// Number of marked squares.
    pub fn marked_count(&self) -> usize {
        self.squares().filter(|square| square.is_marked()).count()
    }

    /// Locations still open for a move.
    pub fn empty_locations(&self) -> Vec<Location> {
        self.squares()
            .filter(|square| !square.is_marked())
            .map(Square::location)
            .collect()
    }

    /// Read-only copy of the marker grid for rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            rows: self.squares.map(|row| row.map(|square| square.marker())),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints the grid with row and column indices, `_` marking empty squares.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "   0   1   2")?;
        for (index, row) in self.squares.iter().enumerate() {
            let [left, middle, right] = row;
            writeln!(
                f,
                "{}  {} | {} | {}",
                index,
                left.symbol(),
                middle.symbol(),
                right.symbol()
            )?;
        }
        Ok(())
    }
}

/// Serializable copy of the board's markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    rows: [[Option<Marker>; BOARD_LENGTH]; BOARD_LENGTH],
}

impl BoardSnapshot {
    /// Marker at `location`.
    pub fn get(&self, location: Location) -> Option<Marker> {
        self.rows[location.row()][location.column()]
    }

    /// Markers by row.
    pub fn rows(&self) -> &[[Option<Marker>; BOARD_LENGTH]; BOARD_LENGTH] {
        &self.rows
    }
}
