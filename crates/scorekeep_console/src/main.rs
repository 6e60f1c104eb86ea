//! Scorekeep - terminal tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use scorekeep_console::cli::{Cli, Command};
use scorekeep_console::{Console, ConsoleConfig, run_script};
use scorekeep_tictactoe::Marker;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    // The filter comes from the config, so the subscriber is installed after
    // loading it.
    let config = ConsoleConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    // Logs go to stderr so prompts on stdout stay readable.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        path = %cli.config.display(),
        found = cli.config.exists(),
        log_filter = %config.log_filter(),
        "Config loaded"
    );

    match cli.command {
        Command::Play { player_x, player_o } => run_play(config, player_x, player_o),
        Command::Script {
            json,
            player_x,
            player_o,
            moves,
        } => run_scripted(config, json, player_x, player_o, moves),
    }
}

/// Run an interactive session on stdin/stdout
#[instrument(skip(config))]
fn run_play(
    config: ConsoleConfig,
    player_x: Option<String>,
    player_o: Option<String>,
) -> Result<()> {
    info!("Starting interactive session");
    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout(), config);

    let mut game = console.setup(player_x, player_o)?;
    console.run(&mut game)?;
    Ok(())
}

/// Play one game from the command line and print the report
#[instrument(skip(config, moves))]
fn run_scripted(
    config: ConsoleConfig,
    json: bool,
    player_x: Option<String>,
    player_o: Option<String>,
    moves: Vec<String>,
) -> Result<()> {
    let name_x = player_x.unwrap_or_else(|| config.default_name(Marker::X).to_string());
    let name_o = player_o.unwrap_or_else(|| config.default_name(Marker::O).to_string());
    let report = run_script(&name_x, &name_o, &moves);

    if json {
        let text =
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", text);
        return Ok(());
    }

    for rejected in &report.rejected {
        println!("Skipped {}: {}", rejected.input, rejected.reason);
    }
    print!("{}", report.rendered);
    match &report.winner {
        Some(name) => println!("{} wins the game!", name),
        None if report.outcome.is_terminal() => println!("It's a tie!"),
        None => println!("No result yet."),
    }
    Ok(())
}
