//! Interactive terminal session.
//!
//! Reads names and moves line by line and writes the board and
//! announcements back. Generic over the reader and writer so the whole
//! session can be driven from memory.

use crate::config::ConsoleConfig;
use anyhow::{Context, Result};
use scorekeep_tictactoe::{Location, Marker, Match, RoundResult};
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// How a single game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEnd {
    /// A contestant completed a line.
    Won {
        /// Winner's name.
        name: String,
        /// Winner's score including this game.
        score: u32,
    },
    /// The board filled up.
    Tie,
    /// Input ran out before the game finished.
    Abandoned,
}

/// Line-oriented console front end.
pub struct Console<R, W> {
    input: R,
    output: W,
    config: ConsoleConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one trimmed line; `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks for the name of the contestant playing `marker`.
    ///
    /// An empty answer, or no answer at all, gets the configured default.
    #[instrument(skip(self))]
    pub fn prompt_name(&mut self, marker: Marker) -> Result<String> {
        writeln!(self.output, "Player {}, what is your name?", marker)?;
        let name = match self.read_line()? {
            Some(name) if !name.is_empty() => name,
            _ => self.config.default_name(marker).to_string(),
        };
        debug!(%name, "Name chosen");
        Ok(name)
    }

    /// Builds the match, prompting for any name not given up front.
    #[instrument(skip(self))]
    pub fn setup(&mut self, name_x: Option<String>, name_o: Option<String>) -> Result<Match> {
        let name_x = match name_x {
            Some(name) => name,
            None => self.prompt_name(Marker::X)?,
        };
        let name_o = match name_o {
            Some(name) => name,
            None => self.prompt_name(Marker::O)?,
        };
        Ok(Match::new(name_x, name_o))
    }

    /// Asks the active contestant for a location until one parses.
    fn prompt_location(&mut self, name: &str, marker: Marker) -> Result<Option<Location>> {
        loop {
            writeln!(
                self.output,
                "{}, it's your turn! Where would you like to place your {}? (row then column, e.g. 02)",
                name, marker
            )?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<Location>() {
                Ok(location) => return Ok(Some(location)),
                Err(err) => writeln!(self.output, "{}. Please try again.", err)?,
            }
        }
    }

    /// Plays one game to a win, a tie, or the end of input.
    #[instrument(skip_all)]
    pub fn play_game(&mut self, game: &mut Match) -> Result<GameEnd> {
        loop {
            write!(self.output, "{}", game.board())?;

            let active = game.active_contestant();
            let (name, marker) = (active.name().to_string(), active.marker());
            let Some(location) = self.prompt_location(&name, marker)? else {
                info!("Input closed mid-game");
                return Ok(GameEnd::Abandoned);
            };

            let end = match game.play_round(location) {
                RoundResult::InvalidMove(err) => {
                    writeln!(self.output, "{}. Please try again.", err)?;
                    continue;
                }
                RoundResult::Continue => None,
                RoundResult::Tie => Some(GameEnd::Tie),
                RoundResult::Winner(winner) => Some(GameEnd::Won {
                    name: winner.name().to_string(),
                    score: winner.score(),
                }),
            };

            // The loser of this game, or the alternate after a tie, opens the next.
            game.swap_active();

            if let Some(end) = end {
                write!(self.output, "{}", game.board())?;
                self.announce(&end)?;
                return Ok(end);
            }
        }
    }

    fn announce(&mut self, end: &GameEnd) -> Result<()> {
        match end {
            GameEnd::Won { name, score } => writeln!(
                self.output,
                "{} wins the game! Your score is now {}.",
                name, score
            )?,
            GameEnd::Tie => writeln!(self.output, "It's a tie!")?,
            GameEnd::Abandoned => {}
        }
        Ok(())
    }

    /// Asks whether to start another game; anything but yes means no.
    fn ask_play_again(&mut self) -> Result<bool> {
        writeln!(self.output, "Play again? (y/n)")?;
        let answer = self.read_line()?.unwrap_or_default().to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }

    /// Writes both contestants' scores.
    pub fn print_scoreboard(&mut self, game: &Match) -> Result<()> {
        let scores: Vec<String> = Marker::iter()
            .map(|marker| {
                let contestant = game.contestant(marker);
                format!("{} ({}) {}", contestant.name(), marker, contestant.score())
            })
            .collect();
        writeln!(self.output, "Scores: {}", scores.join(" - "))?;
        Ok(())
    }

    /// Plays games until the players stop or input runs out.
    ///
    /// Returns how many games reached a result.
    #[instrument(skip_all)]
    pub fn run(&mut self, game: &mut Match) -> Result<usize> {
        let mut finished = 0;
        loop {
            let end = self.play_game(game)?;
            if end == GameEnd::Abandoned {
                break;
            }
            finished += 1;

            if !self.ask_play_again()? {
                break;
            }
            game.reset();
        }

        self.print_scoreboard(game)?;
        self.output.flush()?;
        info!(finished, "Session over");
        Ok(finished)
    }
}
