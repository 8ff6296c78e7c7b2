//! Game records built from engine events.
//!
//! The engine hands moves off through events; a [`RecordBuilder`] turns
//! that stream into one [`GameRecord`] per finished game. Persisting the
//! record is the caller's business.

use super::{GameEvent, GameMode, Move, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A finished game: mode, result and every move in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    mode: GameMode,
    outcome: Outcome,
    winner: String,
    moves: Vec<Move>,
}

impl GameRecord {
    /// Creates a record.
    pub fn new(mode: GameMode, outcome: Outcome, winner: impl Into<String>, moves: Vec<Move>) -> Self {
        Self {
            mode,
            outcome,
            winner: winner.into(),
            moves,
        }
    }

    /// Returns the mode the game was played in.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the final outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the winner's display label ("Draw" for a draw).
    pub fn winner(&self) -> &str {
        &self.winner
    }

    /// Returns the moves in the order they were played.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// One-line summary, numbered from 1.
    pub fn summary(&self, number: usize) -> String {
        format!(
            "Game {}: Mode: {}, Winner: {}",
            number, self.mode, self.winner
        )
    }
}

/// Display names for the two sides of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideLabels {
    /// Label for the X side.
    pub x: String,
    /// Label for the O side.
    pub o: String,
}

impl SideLabels {
    /// Default labels: "Player 1"/"Player 2" between humans, "You"/"AI"
    /// against the computer.
    pub fn for_mode(mode: GameMode, computer: Player) -> Self {
        let (x, o) = match (mode, computer) {
            (GameMode::HumanVsHuman, _) => ("Player 1", "Player 2"),
            (GameMode::HumanVsComputer, Player::O) => ("You", "AI"),
            (GameMode::HumanVsComputer, Player::X) => ("AI", "You"),
        };
        Self {
            x: x.to_string(),
            o: o.to_string(),
        }
    }

    /// Label for `player`.
    pub fn label(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// Winner label for `outcome`.
    pub fn winner_label(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::Win(player) => self.label(player).to_string(),
            Outcome::Draw => "Draw".to_string(),
            Outcome::InProgress => "None".to_string(),
        }
    }
}

/// Accumulates events into records.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    mode: GameMode,
    labels: SideLabels,
    moves: Vec<Move>,
}

impl RecordBuilder {
    /// Creates a builder for games in `mode` with the given labels.
    pub fn new(mode: GameMode, labels: SideLabels) -> Self {
        Self {
            mode,
            labels,
            moves: Vec::new(),
        }
    }

    /// Feeds one event. Returns the finished record on `GameOver`.
    #[instrument(skip(self))]
    pub fn observe(&mut self, event: &GameEvent) -> Option<GameRecord> {
        match event {
            GameEvent::MoveApplied(applied) => {
                self.moves.push(*applied);
                None
            }
            GameEvent::GameOver(outcome) => {
                let moves = std::mem::take(&mut self.moves);
                debug!(%outcome, moves = moves.len(), "Record complete");
                Some(GameRecord::new(
                    self.mode,
                    *outcome,
                    self.labels.winner_label(*outcome),
                    moves,
                ))
            }
        }
    }

    /// Drops any partial game and switches to `mode`.
    pub fn reset(&mut self, mode: GameMode, labels: SideLabels) {
        self.mode = mode;
        self.labels = labels;
        self.moves.clear();
    }

    /// Moves seen since the last finished game.
    pub fn pending(&self) -> &[Move] {
        &self.moves
    }
}
