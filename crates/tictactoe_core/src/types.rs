//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player marker.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (always moves first).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Single-character form used by the board renderer.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }
}

/// Game mode, fixed for the lifetime of one game.
///
/// Displays as the short label stored in game records.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[serde(rename = "PvP")]
    #[strum(to_string = "PvP", serialize = "pvp", serialize = "human-vs-human")]
    HumanVsHuman,
    /// A human plays the minimax opponent.
    #[serde(rename = "PvAI")]
    #[strum(to_string = "PvAI", serialize = "pvai", serialize = "human-vs-computer")]
    HumanVsComputer,
}

impl GameMode {
    /// Returns true if the computer takes part in this mode.
    pub fn has_computer(self) -> bool {
        matches!(self, GameMode::HumanVsComputer)
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and at least one empty cell.
    InProgress,
    /// The player completed a line.
    Win(Player),
    /// The board is full with no winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the game can accept no more moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Engine state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineState {
    /// Waiting for the given player to place a mark.
    AwaitingMove(Player),
    /// No further placements until reset. Never holds `Outcome::InProgress`.
    GameOver(Outcome),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_toggles() {
        for player in Player::iter() {
            assert_ne!(player, player.opponent());
            assert_eq!(player, player.opponent().opponent());
        }
    }

    #[test]
    fn test_player_parses_case_insensitive() {
        assert_eq!(Player::from_str("x"), Ok(Player::X));
        assert_eq!(Player::from_str("O"), Ok(Player::O));
        assert!(Player::from_str("z").is_err());
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(GameMode::HumanVsHuman.to_string(), "PvP");
        assert_eq!(GameMode::HumanVsComputer.to_string(), "PvAI");
        assert_eq!(GameMode::from_str("pvai"), Ok(GameMode::HumanVsComputer));
        assert_eq!(GameMode::from_str("PvP"), Ok(GameMode::HumanVsHuman));
    }

    #[test]
    fn test_cell_player_and_symbol() {
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Cell::Occupied(Player::X).player(), Some(Player::X));
        assert_eq!(Cell::Occupied(Player::O).symbol(), 'O');
        assert_eq!(Cell::default().symbol(), '.');
    }

    #[test]
    fn test_outcome_terminal() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert_eq!(Outcome::Win(Player::O).winner(), Some(Player::O));
    }
}
