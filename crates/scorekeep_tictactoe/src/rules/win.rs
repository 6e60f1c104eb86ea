//! Win detection logic for tic-tac-toe.
//!
//! Rows and columns are disjoint, so a plain index scan covers them.
//! The diagonals cross at the center, which is why [`matches_diagonal`]
//! has to tell corners and the center apart.

use super::super::location::BOARD_LENGTH;
use super::super::{Board, Marker, Square};
use tracing::{instrument, trace};

/// Returns the marker that owns a complete line, if any.
///
/// Squares are scanned in row-major order and the first marked square
/// completing a row, column or diagonal decides the result.
#[instrument(level = "debug", skip(board))]
pub fn winning_marker(board: &Board) -> Option<Marker> {
    for square in board.squares() {
        let Some(marker) = square.marker() else {
            continue;
        };

        if matches_row(board, square)
            || matches_column(board, square)
            || matches_diagonal(board, square)
        {
            trace!(location = %square.location(), %marker, "Line completed");
            return Some(marker);
        }
    }

    None
}

/// Every square in the current square's row carries its marker.
pub fn matches_row(board: &Board, square: &Square) -> bool {
    let marker = square.marker();
    marker.is_some()
        && (0..BOARD_LENGTH).all(|column| board.marker_at(square.row(), column) == marker)
}

/// Every square in the current square's column carries its marker.
pub fn matches_column(board: &Board, square: &Square) -> bool {
    let marker = square.marker();
    marker.is_some()
        && (0..BOARD_LENGTH).all(|row| board.marker_at(row, square.column()) == marker)
}

/// The square sits on a diagonal whose three squares carry its marker.
pub fn matches_diagonal(board: &Board, square: &Square) -> bool {
    let marker = square.marker();
    if marker.is_none() {
        return false;
    }

    let location = square.location();
    if !location.on_main_diagonal() && !location.on_anti_diagonal() {
        return false;
    }

    // Both diagonals run through the center.
    if board.marker_at(1, 1) != marker {
        return false;
    }

    let last = BOARD_LENGTH - 1;
    if location.is_center() {
        let main = board.marker_at(0, 0) == marker && board.marker_at(last, last) == marker;
        let anti = board.marker_at(0, last) == marker && board.marker_at(last, 0) == marker;
        main || anti
    } else if location.on_main_diagonal() {
        // (0,0) pairs with (2,2)
        let opposite = last - location.row();
        board.marker_at(opposite, opposite) == marker
    } else {
        // (0,2) pairs with (2,0)
        board.marker_at(location.column(), location.row()) == marker
    }
}
