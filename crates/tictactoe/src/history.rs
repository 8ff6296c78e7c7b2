//! Game history sinks.
//!
//! The engine never persists anything. Finished records are handed to a
//! [`HistoryStore`] passed in explicitly by whoever runs the game.

use derive_more::{Display, Error};
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tictactoe_core::GameRecord;
use tracing::{debug, info, instrument, warn};

/// Where finished games go.
pub trait HistoryStore {
    /// Appends one finished game.
    fn append(&mut self, record: GameRecord) -> Result<(), HistoryError>;

    /// Returns every stored game, oldest first.
    fn records(&self) -> Result<Vec<GameRecord>, HistoryError>;
}

/// History kept in memory for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    records: Vec<GameRecord>,
}

impl MemoryHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&mut self, record: GameRecord) -> Result<(), HistoryError> {
        self.records.push(record);
        Ok(())
    }

    fn records(&self) -> Result<Vec<GameRecord>, HistoryError> {
        Ok(self.records.clone())
    }
}

/// History stored as one JSON record per line.
#[derive(Debug, Clone)]
pub struct JsonLinesHistory {
    path: PathBuf,
}

impl JsonLinesHistory {
    /// Uses the file at `path`; it is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonLinesHistory {
    #[instrument(skip(self, record), fields(path = %self.path.display()))]
    fn append(&mut self, record: GameRecord) -> Result<(), HistoryError> {
        let line = serde_json::to_string(&record)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        info!(winner = record.winner(), moves = record.moves().len(), "Game saved");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn records(&self) -> Result<Vec<GameRecord>, HistoryError> {
        if !self.path.exists() {
            debug!("No history file yet");
            return Ok(Vec::new());
        }
        let reader = BufReader::new(std::fs::File::open(&self.path)?);
        let mut records = Vec::new();
        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(record) => records.push(record),
                Err(e) => warn!(line = number + 1, error = %e, "Skipping unreadable record"),
            }
        }
        debug!(count = records.len(), "History loaded");
        Ok(records)
    }
}

/// History error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("History error: {} at {}:{}", message, file, line)]
pub struct HistoryError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl HistoryError {
    /// Creates a new history error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for HistoryError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for HistoryError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Serialization error: {}", err))
    }
}
