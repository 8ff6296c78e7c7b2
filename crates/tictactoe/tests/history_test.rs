//! Tests for history storage and config files.

use std::io::Write;
use tictactoe::{AppConfig, HistoryStore, JsonLinesHistory, MemoryHistory};
use tictactoe_core::{GameMode, GameRecord, Move, Outcome, Player};

fn sample_record(winner: &str) -> GameRecord {
    GameRecord::new(
        GameMode::HumanVsHuman,
        Outcome::Win(Player::X),
        winner,
        vec![
            Move::new(0, 0, Player::X),
            Move::new(1, 0, Player::O),
            Move::new(0, 1, Player::X),
            Move::new(1, 1, Player::O),
            Move::new(0, 2, Player::X),
        ],
    )
}

#[test]
fn test_json_lines_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonLinesHistory::new(dir.path().join("history.jsonl"));
    assert!(store.records().unwrap().is_empty());

    store.append(sample_record("Player 1")).unwrap();
    store.append(sample_record("Ada")).unwrap();

    let records = store.records().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], sample_record("Player 1"));
    assert_eq!(records[1].summary(2), "Game 2: Mode: PvP, Winner: Ada");
}

#[test]
fn test_unreadable_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.jsonl");
    let mut store = JsonLinesHistory::new(&path);
    store.append(sample_record("Player 1")).unwrap();

    let mut file = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
    writeln!(file, "not json").unwrap();
    writeln!(file).unwrap();
    drop(file);
    store.append(sample_record("Player 2")).unwrap();

    let winners: Vec<String> = store
        .records()
        .unwrap()
        .iter()
        .map(|r| r.winner().to_string())
        .collect();
    assert_eq!(winners, ["Player 1", "Player 2"]);
}

#[test]
fn test_memory_history_keeps_order() {
    let mut store = MemoryHistory::new();
    store.append(sample_record("first")).unwrap();
    store.append(sample_record("second")).unwrap();
    let records = store.records().unwrap();
    assert_eq!(records[0].winner(), "first");
    assert_eq!(records[1].winner(), "second");
}

#[test]
fn test_config_file_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "history_path = \"games.jsonl\"\ncomputer_delay_ms = 0\ncomputer_player = \"X\"\nplayer_o_name = \"Grace\""
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(config.history_path().to_str(), Some("games.jsonl"));
    assert_eq!(*config.computer_delay_ms(), 0);
    assert_eq!(*config.replay_delay_ms(), 500);
    assert_eq!(*config.computer_player(), Player::X);

    let labels = config.side_labels(GameMode::HumanVsComputer);
    assert_eq!(labels.x, "AI");
    assert_eq!(labels.o, "Grace");
}

#[test]
fn test_missing_config_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
    assert!(AppConfig::from_file(dir.path().join("absent.toml")).is_err());
}
