//! Tests for the interactive console session.

use scorekeep_console::{Console, ConsoleConfig, GameEnd};
use scorekeep_tictactoe::Marker;
use std::io::Cursor;

/// Runs a full session from scripted input and returns everything printed.
fn run_session(input: &str) -> (usize, String, scorekeep_tictactoe::Match) {
    let mut console = Console::new(
        Cursor::new(input.to_string()),
        Vec::new(),
        ConsoleConfig::default(),
    );
    let mut game = console.setup(None, None).expect("Setup failed");
    let finished = console.run(&mut game).expect("Session failed");
    let output = String::from_utf8(console.into_output()).expect("Output not UTF-8");
    (finished, output, game)
}

#[test]
fn test_win_is_announced_with_score() {
    let input = "Ada\nGrace\n00\n10\n01\n11\n02\nn\n";
    let (finished, output, game) = run_session(input);

    assert_eq!(finished, 1);
    assert!(output.contains("Player X, what is your name?"));
    assert!(output.contains("Ada, it's your turn! Where would you like to place your X?"));
    assert!(output.contains("Ada wins the game! Your score is now 1."));
    assert!(output.contains("Scores: Ada (X) 1 - Grace (O) 0"));
    assert_eq!(game.contestant(Marker::X).score(), 1);
}

#[test]
fn test_empty_names_fall_back_to_defaults() {
    let input = "\n\n";
    let (finished, output, game) = run_session(input);

    assert_eq!(finished, 0);
    assert_eq!(game.contestant(Marker::X).name(), "Player X");
    assert_eq!(game.contestant(Marker::O).name(), "Player O");
    assert!(output.contains("Scores: Player X (X) 0 - Player O (O) 0"));
}

#[test]
fn test_bad_input_reprompts_same_contestant() {
    // Off-board, unreadable, then occupied: Grace keeps the turn throughout.
    let input = "Ada\nGrace\n11\n33\nhello\n11\n00\n";
    let (_, output, game) = run_session(input);

    assert!(output.contains("is off the board"));
    assert!(output.contains("Can't read \"hello\" as a location"));
    assert!(output.contains("Square 11 is already occupied. Please try again."));
    assert_eq!(output.matches("Grace, it's your turn!").count(), 4);
    assert_eq!(game.board().marked_count(), 2);
}

#[test]
fn test_tie_then_second_game_opened_by_o() {
    // X O X / X O O / O X X, then O opens game two and wins the left column.
    let input = "Ada\nGrace\n00\n01\n02\n11\n10\n12\n21\n20\n22\ny\n00\n01\n10\n02\n20\nno\n";
    let (finished, output, game) = run_session(input);

    assert_eq!(finished, 2);
    assert!(output.contains("It's a tie!"));
    assert!(output.contains("Grace wins the game! Your score is now 1."));
    assert!(output.contains("Scores: Ada (X) 0 - Grace (O) 1"));
    assert_eq!(game.contestant(Marker::O).score(), 1);
}

#[test]
fn test_play_game_reports_abandoned_on_closed_input() {
    let mut console = Console::new(Cursor::new("00\n"), Vec::new(), ConsoleConfig::default());
    let mut game = console
        .setup(Some("Ada".to_string()), Some("Grace".to_string()))
        .expect("Setup failed");

    let end = console.play_game(&mut game).expect("Game failed");
    assert_eq!(end, GameEnd::Abandoned);
    assert_eq!(game.board().marked_count(), 1);
}

#[test]
fn test_board_printed_with_coordinates() {
    let input = "Ada\nGrace\n11\n";
    let (_, output, _) = run_session(input);
    assert!(output.contains("   0   1   2\n0  _ | _ | _\n1  _ | X | _\n2  _ | _ | _\n"));
}
