//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if every square is marked.
///
/// A full board with no winner is a tie.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().all(|square| square.is_marked())
}

#[cfg(test)]
mod tests {
    use super::super::super::{Location, Marker};
    use super::super::win::winning_marker;
    use super::*;

    fn is_tie(board: &Board) -> bool {
        is_full(board) && winning_marker(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place_marker(Marker::X, Location::CENTER).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        // X O X / O X O / O X O
        #[rustfmt::skip]
        let layout = [
            Marker::X, Marker::O, Marker::X,
            Marker::O, Marker::X, Marker::O,
            Marker::O, Marker::X, Marker::O,
        ];
        let mut board = Board::new();
        for (location, marker) in Location::ALL.into_iter().zip(layout) {
            board.place_marker(marker, location).unwrap();
        }

        assert!(is_tie(&board));
    }

    #[test]
    fn test_not_tie_if_winner() {
        let mut board = Board::new();
        for location in Location::ALL {
            board.place_marker(Marker::X, location).unwrap();
        }
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}
