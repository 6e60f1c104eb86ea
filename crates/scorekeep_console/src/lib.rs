//! Terminal front end for scorekeep tic-tac-toe.
//!
//! - **Console**: interactive play over any line reader and writer
//! - **Script**: one game from a list of moves, with a serializable report
//! - **Config**: default names and log filter from TOML

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod console;
mod script;

pub use config::{ConfigError, ConsoleConfig};
pub use console::{Console, GameEnd};
pub use script::{RejectedMove, ScriptReport, run_script};
