//! Non-interactive play from a list of moves.

use scorekeep_tictactoe::{BoardSnapshot, Contestant, Location, Match, Outcome, RoundResult};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// A move that couldn't be played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedMove {
    /// The move as given.
    pub input: String,
    /// Why it was refused.
    pub reason: String,
}

/// Everything a scripted game produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptReport {
    /// Final board.
    pub board: BoardSnapshot,
    /// Final outcome.
    pub outcome: Outcome,
    /// Winner's name, if the game was won.
    pub winner: Option<String>,
    /// Contestant X then contestant O.
    pub contestants: [Contestant; 2],
    /// Moves that were skipped.
    pub rejected: Vec<RejectedMove>,
    /// Board as printed on the console.
    #[serde(skip)]
    pub rendered: String,
}

/// Plays `moves` as a single game, X first.
///
/// Unreadable or illegal moves are recorded and skipped without passing
/// the turn. Moves after the game ends are rejected.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn run_script(name_x: &str, name_o: &str, moves: &[String]) -> ScriptReport {
    let mut game = Match::new(name_x, name_o);
    let mut rejected = Vec::new();
    let mut winner = None;

    for input in moves {
        let location = match input.parse::<Location>() {
            Ok(location) => location,
            Err(err) => {
                warn!(%input, %err, "Unreadable move");
                rejected.push(RejectedMove {
                    input: input.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        match game.play_round(location) {
            RoundResult::InvalidMove(err) => {
                warn!(%input, %err, "Move refused");
                rejected.push(RejectedMove {
                    input: input.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
            RoundResult::Winner(contestant) => winner = Some(contestant.name().to_string()),
            RoundResult::Continue | RoundResult::Tie => {}
        }
        game.swap_active();
    }

    let board = game.board();
    let contestants = game.contestants();
    let report = ScriptReport {
        board: board.snapshot(),
        outcome: board.check_outcome(),
        winner,
        contestants: [contestants.x.clone(), contestants.o.clone()],
        rejected,
        rendered: board.to_string(),
    };
    info!(outcome = %report.outcome, rejected = report.rejected.len(), "Script finished");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorekeep_tictactoe::Marker;

    fn moves(list: &[&str]) -> Vec<String> {
        list.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_script_win() {
        let report = run_script("Ada", "Grace", &moves(&["00", "10", "01", "11", "02"]));
        assert_eq!(report.outcome, Outcome::Winner(Marker::X));
        assert_eq!(report.winner.as_deref(), Some("Ada"));
        assert_eq!(report.contestants[0].score(), 1);
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn test_script_skips_bad_moves_without_passing_turn() {
        let report = run_script("Ada", "Grace", &moves(&["00", "00", "zz", "11"]));
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.board.get(Location::CENTER), Some(Marker::O));
        assert_eq!(report.outcome, Outcome::Pending);
    }

    #[test]
    fn test_moves_after_win_rejected() {
        let report = run_script("Ada", "Grace", &moves(&["00", "10", "01", "11", "02", "22"]));
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].input, "22");
        assert_eq!(report.board.get(Location::new(2, 2).unwrap()), None);
    }
}
