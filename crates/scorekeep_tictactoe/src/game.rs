//! Match orchestration: two contestants, one board, alternating turns.
//!
//! A [`Match`] runs any number of games between the same two contestants.
//! Each call to [`Match::play_round`] handles one move and reports what
//! happened; the caller renders the result and then calls
//! [`Match::swap_active`] for every round that was processed, terminal or
//! not. Invalid moves are never followed by a swap, so the same contestant
//! gets to try again.

use super::board::{Board, PlaceError};
use super::contestant::Contestant;
use super::location::{Location, LocationError};
use super::phases::{Outcome, Phase};
use super::types::Marker;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Why a move was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the location is already marked.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Location),

    /// The requested coordinates are not on the board.
    #[display("{}", _0)]
    OutOfRange(LocationError),

    /// The current game already has a result; reset before moving again.
    #[display("This game is already over")]
    RoundConcluded,
}

impl std::error::Error for MoveError {}

impl From<PlaceError> for MoveError {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::SquareOccupied(location) => Self::SquareOccupied(location),
            PlaceError::OutOfRange(err) => Self::OutOfRange(err),
        }
    }
}

/// What a single round produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundResult<'a> {
    /// The move was refused and nothing changed.
    InvalidMove(MoveError),
    /// The move stood and the game goes on.
    Continue,
    /// The move filled the board without a winner.
    Tie,
    /// The move completed a line; the contestant's score already counts it.
    Winner(&'a Contestant),
}

impl RoundResult<'_> {
    /// True for a win or tie.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundResult::Tie | RoundResult::Winner(_))
    }
}

/// Both contestants plus the one whose turn it is.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Contestants<'a> {
    /// The contestant placing X.
    pub x: &'a Contestant,
    /// The contestant placing O.
    pub o: &'a Contestant,
    /// The contestant due to move.
    pub active: &'a Contestant,
}

/// A series of games between two contestants sharing one board.
#[derive(Debug, Clone)]
pub struct Match {
    contestant_x: Contestant,
    contestant_o: Contestant,
    active: Marker,
    board: Board,
    phase: Phase,
}

impl Match {
    /// Creates a match; X moves first in the opening game.
    #[instrument(skip_all, fields(x = %name_x.as_ref(), o = %name_o.as_ref()))]
    pub fn new(name_x: impl AsRef<str>, name_o: impl AsRef<str>) -> Self {
        info!("Creating match");
        Self {
            contestant_x: Contestant::new(name_x, Marker::X),
            contestant_o: Contestant::new(name_o, Marker::O),
            active: Marker::X,
            board: Board::new(),
            phase: Phase::AwaitingMove,
        }
    }

    /// Plays the active contestant's marker at `location`.
    ///
    /// An occupied square, or a move after the game already ended, yields
    /// [`RoundResult::InvalidMove`] and leaves everything untouched. A
    /// winning move bumps the winner's score before it is returned.
    #[instrument(skip(self), fields(active = %self.active))]
    pub fn play_round(&mut self, location: Location) -> RoundResult<'_> {
        if self.phase == Phase::RoundConcluded {
            warn!("Move attempted after the game ended");
            return RoundResult::InvalidMove(MoveError::RoundConcluded);
        }

        if let Err(err) = self.board.place_marker(self.active, location) {
            return RoundResult::InvalidMove(err.into());
        }

        match self.board.check_outcome() {
            Outcome::Winner(marker) => {
                self.phase = Phase::RoundConcluded;
                let winner = self.contestant_mut(marker);
                winner.increase_score();
                info!(winner = %winner.name(), score = winner.score(), "Game won");
                RoundResult::Winner(self.contestant(marker))
            }
            Outcome::Tie => {
                self.phase = Phase::RoundConcluded;
                info!("Game tied");
                RoundResult::Tie
            }
            Outcome::Pending => {
                debug!("Game continues");
                RoundResult::Continue
            }
        }
    }

    /// Plays the active contestant's marker at raw coordinates.
    ///
    /// Coordinates off the board come back as
    /// [`MoveError::OutOfRange`] inside [`RoundResult::InvalidMove`].
    pub fn play_round_at(&mut self, row: usize, column: usize) -> RoundResult<'_> {
        match Location::new(row, column) {
            Ok(location) => self.play_round(location),
            Err(err) => {
                warn!(%err, "Move off the board");
                RoundResult::InvalidMove(MoveError::OutOfRange(err))
            }
        }
    }

    /// Hands the turn to the other contestant.
    #[instrument(skip(self), fields(from = %self.active))]
    pub fn swap_active(&mut self) {
        self.active = self.active.opponent();
        debug!(to = %self.active, "Active contestant swapped");
    }

    /// Clears the board for a new game.
    ///
    /// Contestants, scores and the active contestant carry over, so the
    /// contestant who didn't open the last game opens the next one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.phase = Phase::AwaitingMove;
        info!(first = %self.active, "New game");
    }

    /// Both contestants and the active one.
    pub fn contestants(&self) -> Contestants<'_> {
        Contestants {
            x: &self.contestant_x,
            o: &self.contestant_o,
            active: self.active_contestant(),
        }
    }

    /// The contestant due to move.
    pub fn active_contestant(&self) -> &Contestant {
        self.contestant(self.active)
    }

    /// The contestant playing `marker`.
    pub fn contestant(&self, marker: Marker) -> &Contestant {
        match marker {
            Marker::X => &self.contestant_x,
            Marker::O => &self.contestant_o,
        }
    }

    /// Mutable access for renaming; scores can still only go up.
    pub fn contestant_mut(&mut self, marker: Marker) -> &mut Contestant {
        match marker {
            Marker::X => &mut self.contestant_x,
            Marker::O => &mut self.contestant_o,
        }
    }

    /// The shared board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether the current game is still accepting moves.
    pub fn phase(&self) -> Phase {
        self.phase
    }
}
