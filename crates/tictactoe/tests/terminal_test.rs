//! Scripted terminal sessions.

use std::io::Cursor;
use tictactoe::{AppConfig, HistoryStore, MemoryHistory, Terminal};
use tictactoe_core::{Board, GameMode, Outcome, Player};

fn run(
    mode: GameMode,
    config: AppConfig,
    script: &str,
    store: &mut MemoryHistory,
) -> (usize, String) {
    let mut terminal = Terminal::new(Cursor::new(script.to_string()), Vec::new(), config);
    let games = terminal.play(mode, store).unwrap();
    let output = String::from_utf8(terminal.into_output()).unwrap();
    (games, output)
}

#[test]
fn test_two_player_win_is_saved() {
    let mut store = MemoryHistory::new();
    let (games, output) = run(
        GameMode::HumanVsHuman,
        AppConfig::default().without_delays(),
        "0 0\n1 0\n0 1\n1 1\n0 2\nn\n",
        &mut store,
    );

    assert_eq!(games, 1);
    assert!(output.contains("Player 1 win!"), "{output}");
    assert!(output.contains("Play again? [y/N]"));

    let records = store.records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].summary(1), "Game 1: Mode: PvP, Winner: Player 1");
    assert_eq!(records[0].moves().len(), 5);
}

#[test]
fn test_bad_input_is_reported_and_ignored() {
    let mut store = MemoryHistory::new();
    let (games, output) = run(
        GameMode::HumanVsHuman,
        AppConfig::default().without_delays(),
        "hello\n1 1\n1 1\n3 3\nq\n",
        &mut store,
    );

    assert_eq!(games, 0);
    assert!(output.contains("Enter a row and a column"));
    assert!(output.contains("Player 2 (O) to move"));
    assert!(store.records().unwrap().is_empty());
}

#[test]
fn test_computer_never_loses_scripted_game() {
    // Try every cell in order; occupied cells are rejected and skipped.
    let script = "0 0\n0 1\n0 2\n1 0\n1 1\n1 2\n2 0\n2 1\n2 2\n";
    let mut store = MemoryHistory::new();
    let (games, output) = run(
        GameMode::HumanVsComputer,
        AppConfig::default().without_delays(),
        script,
        &mut store,
    );

    assert_eq!(games, 1);
    assert!(output.contains("AI (O) plays"));
    assert!(!output.contains("You win!"));
    let records = store.records().unwrap();
    assert_ne!(records[0].outcome(), Outcome::Win(Player::X));
    assert_eq!(records[0].mode(), GameMode::HumanVsComputer);
}

#[test]
fn test_computer_opens_as_x() {
    let mut store = MemoryHistory::new();
    let config = AppConfig::default()
        .without_delays()
        .with_computer_player(Player::X);
    let (games, output) = run(GameMode::HumanVsComputer, config, "q\n", &mut store);

    assert_eq!(games, 0);
    assert!(output.contains("AI (X) plays (0, 0)"), "{output}");
    assert!(output.contains("You (O) to move"));
}

#[test]
fn test_play_again_starts_fresh_game() {
    let mut store = MemoryHistory::new();
    let script = "0 0\n1 0\n0 1\n1 1\n0 2\ny\n1 1\n0 0\n2 2\n0 2\n0 1\n2 1\n2 0\n1 0\n1 2\nn\n";
    let (games, output) = run(
        GameMode::HumanVsHuman,
        AppConfig::default().without_delays(),
        script,
        &mut store,
    );

    assert_eq!(games, 2);
    assert!(output.contains("It's a draw!"), "{output}");
    let winners: Vec<String> = store
        .records()
        .unwrap()
        .iter()
        .map(|r| r.winner().to_string())
        .collect();
    assert_eq!(winners, ["Player 1", "Draw"]);
}

#[test]
fn test_history_and_replay_output() {
    let mut store = MemoryHistory::new();
    run(
        GameMode::HumanVsHuman,
        AppConfig::default().without_delays(),
        "0 0\n1 0\n0 1\n1 1\n0 2\nn\n",
        &mut store,
    );

    let mut terminal = Terminal::new(Cursor::new(String::new()), Vec::new(), AppConfig::default().without_delays());
    terminal.show_history(&store).unwrap();
    terminal.replay(&store, 1).unwrap();
    assert!(terminal.replay(&store, 0).is_err());
    assert!(terminal.replay(&store, 2).is_err());

    let output = String::from_utf8(terminal.into_output()).unwrap();
    assert!(output.contains("Game 1: Mode: PvP, Winner: Player 1"));
    assert!(output.contains("Move 1: X -> (0, 0)"));
    assert!(output.contains("Move 5: X -> (0, 2)"));
    assert!(output.contains("X|X|X"));
}

#[test]
fn test_empty_history() {
    let store = MemoryHistory::new();
    let mut terminal = Terminal::new(Cursor::new(String::new()), Vec::new(), AppConfig::default());
    terminal.show_history(&store).unwrap();
    assert!(terminal.replay(&store, 1).is_err());
    let output = String::from_utf8(terminal.into_output()).unwrap();
    assert!(output.contains("No games have been played yet."));
}

#[test]
fn test_suggest_prints_best_move() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let mut terminal = Terminal::new(Cursor::new(String::new()), Vec::new(), AppConfig::default());
    terminal.suggest(&board, Player::X).unwrap();
    let output = String::from_utf8(terminal.into_output()).unwrap();
    assert_eq!(output, "Best move for X: (0, 2) (score 10)\n");
}
