//! Validated board coordinates.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Length of a board side.
pub const BOARD_LENGTH: usize = 3;

/// A (row, column) pair on the board, both in `0..3`.
///
/// Locations can only be built through [`Location::new`], parsed from
/// text or deserialized (which also goes through `new`), so every value
/// addresses one of the nine squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawLocation")]
pub struct Location {
    row: usize,
    column: usize,
}

/// Unchecked wire form of a [`Location`].
#[derive(Deserialize)]
struct RawLocation {
    row: usize,
    column: usize,
}

impl TryFrom<RawLocation> for Location {
    type Error = LocationError;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        Location::new(raw.row, raw.column)
    }
}

/// Error produced when a location cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum LocationError {
    /// Row or column outside the board.
    #[display(
        "Location ({}, {}) is off the board (rows and columns run 0-2)",
        row,
        column
    )]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// Input that doesn't look like a pair of coordinates.
    #[display("Can't read {:?} as a location; enter row then column, e.g. 02", _0)]
    Malformed(String),
}

impl std::error::Error for LocationError {}

impl Location {
    /// All nine locations in row-major order.
    pub const ALL: [Location; 9] = [
        Location { row: 0, column: 0 },
        Location { row: 0, column: 1 },
        Location { row: 0, column: 2 },
        Location { row: 1, column: 0 },
        Location { row: 1, column: 1 },
        Location { row: 1, column: 2 },
        Location { row: 2, column: 0 },
        Location { row: 2, column: 1 },
        Location { row: 2, column: 2 },
    ];

    /// The center square, shared by both diagonals.
    pub const CENTER: Location = Location { row: 1, column: 1 };

    /// Creates a location, rejecting coordinates off the board.
    #[instrument(level = "trace")]
    pub fn new(row: usize, column: usize) -> Result<Self, LocationError> {
        if row >= BOARD_LENGTH || column >= BOARD_LENGTH {
            return Err(LocationError::OutOfRange { row, column });
        }
        Ok(Self { row, column })
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index.
    pub fn column(self) -> usize {
        self.column
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * BOARD_LENGTH + self.column
    }

    /// True for (0,0), (1,1) and (2,2).
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.column
    }

    /// True for (0,2), (1,1) and (2,0).
    pub fn on_anti_diagonal(self) -> bool {
        self.row + self.column == BOARD_LENGTH - 1
    }

    /// True for the center square.
    pub fn is_center(self) -> bool {
        self == Self::CENTER
    }
}

impl FromStr for Location {
    type Err = LocationError;

    /// Accepts `"rc"` (e.g. `"02"`), `"r,c"` and `"r c"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || LocationError::Malformed(s.to_string());
        let digits: Vec<char> = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .collect();

        let [row, column] = digits.as_slice() else {
            return Err(malformed());
        };
        let row = row.to_digit(10).ok_or_else(malformed)?;
        let column = column.to_digit(10).ok_or_else(malformed)?;

        Self::new(row as usize, column as usize)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Location::new(2, 2).is_ok());
        assert_eq!(
            Location::new(3, 0),
            Err(LocationError::OutOfRange { row: 3, column: 0 })
        );
        assert!(Location::new(0, 7).is_err());
    }

    #[test]
    fn test_index_is_row_major() {
        for (index, location) in Location::ALL.iter().enumerate() {
            assert_eq!(location.index(), index);
        }
    }

    #[test]
    fn test_diagonal_membership() {
        let on_main: Vec<_> = Location::ALL
            .iter()
            .filter(|l| l.on_main_diagonal())
            .collect();
        let on_anti: Vec<_> = Location::ALL
            .iter()
            .filter(|l| l.on_anti_diagonal())
            .collect();
        assert_eq!(on_main.len(), 3);
        assert_eq!(on_anti.len(), 3);
        assert!(Location::CENTER.on_main_diagonal() && Location::CENTER.on_anti_diagonal());
    }

    #[test]
    fn test_parse_formats() {
        let expected = Location::new(0, 2).unwrap();
        assert_eq!("02".parse::<Location>(), Ok(expected));
        assert_eq!("0,2".parse::<Location>(), Ok(expected));
        assert_eq!(" 0 2 ".parse::<Location>(), Ok(expected));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!("33".parse::<Location>(), Err(LocationError::OutOfRange { .. })));
        assert!(matches!("a1".parse::<Location>(), Err(LocationError::Malformed(_))));
        assert!(matches!("".parse::<Location>(), Err(LocationError::Malformed(_))));
        assert!(matches!("012".parse::<Location>(), Err(LocationError::Malformed(_))));
    }

    #[test]
    fn test_deserialize_rejects_off_board() {
        assert!(serde_json::from_str::<Location>(r#"{"row":3,"column":0}"#).is_err());
        assert!(serde_json::from_str::<Location>(r#"{"row":0,"column":7}"#).is_err());

        let error = serde_json::from_str::<Location>(r#"{"row":7,"column":0}"#).unwrap_err();
        assert!(error.to_string().contains("off the board"));
    }

    #[test]
    fn test_deserialize_accepts_on_board() {
        let location: Location = serde_json::from_str(r#"{"row":0,"column":2}"#).unwrap();
        assert_eq!(location, Location::new(0, 2).unwrap());
        assert_eq!(
            serde_json::to_string(&location).unwrap(),
            r#"{"row":0,"column":2}"#
        );
    }
}
