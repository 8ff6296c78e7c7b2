//! Line-based terminal front end.
//!
//! Renders the board, reads `row col` moves and turns engine events into
//! output and saved records. Input and output are generic so sessions can
//! be scripted.

use crate::config::AppConfig;
use crate::history::HistoryStore;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use std::sync::mpsc::Receiver;
use std::time::Duration;
use tictactoe_core::{
    Board, ChannelObserver, GameEngine, GameEvent, GameMode, Minimax, Outcome, Player,
    RecordBuilder, SideLabels, replay,
};
use tracing::{debug, info, instrument};

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark at (row, col).
    Move(usize, usize),
    /// Leave the session.
    Quit,
    /// Anything else.
    Invalid,
}

impl Command {
    /// Parses `row col`, `row,col` or `q`.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            return Command::Quit;
        }
        let parts: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        match parts.as_slice() {
            [row, col] => match (row.parse(), col.parse()) {
                (Ok(row), Ok(col)) => Command::Move(row, col),
                _ => Command::Invalid,
            },
            _ => Command::Invalid,
        }
    }
}

/// Interactive session over any reader and writer.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    config: AppConfig,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a session.
    pub fn new(input: R, output: W, config: AppConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Returns the writer, consuming the session.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays games in `mode` until the player quits or input ends.
    ///
    /// Returns the number of games finished and saved.
    #[instrument(skip(self, store))]
    pub fn play(&mut self, mode: GameMode, store: &mut dyn HistoryStore) -> Result<usize> {
        let labels = self.config.side_labels(mode);
        let (observer, events) = ChannelObserver::channel();
        let mut engine = GameEngine::builder(mode)
            .computer(*self.config.computer_player())
            .observer(Box::new(observer))
            .build();
        let mut records = RecordBuilder::new(mode, labels.clone());

        writeln!(self.output, "New {} game. Enter moves as `row col` (0-2), `q` to quit.", mode)?;
        let mut completed = self.drain(&events, &mut records, store, &engine, &labels)?;

        loop {
            if engine.is_over() {
                if !self.confirm("Play again? [y/N] ")? {
                    break;
                }
                engine.reset(mode);
                records.reset(mode, labels.clone());
                completed += self.drain(&events, &mut records, store, &engine, &labels)?;
                continue;
            }

            let Some(active) = engine.active_player() else {
                break;
            };
            writeln!(self.output, "\n{}\n", engine.board())?;
            write!(self.output, "{} ({}) to move: ", labels.label(active), active)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed");
                break;
            };
            match Command::parse(&line) {
                Command::Quit => break,
                Command::Move(row, col) => {
                    if let Err(e) = engine.try_move(row, col) {
                        writeln!(self.output, "{}", e)?;
                    }
                }
                Command::Invalid => {
                    writeln!(self.output, "Enter a row and a column between 0 and 2, e.g. `1 1`.")?;
                }
            }
            completed += self.drain(&events, &mut records, store, &engine, &labels)?;
        }

        info!(completed, "Session finished");
        Ok(completed)
    }

    /// Prints a one-line summary of every stored game.
    pub fn show_history(&mut self, store: &dyn HistoryStore) -> Result<()> {
        let records = store.records()?;
        if records.is_empty() {
            writeln!(self.output, "No games have been played yet.")?;
        }
        for (i, record) in records.iter().enumerate() {
            writeln!(self.output, "{}", record.summary(i + 1))?;
        }
        Ok(())
    }

    /// Steps through stored game `number` (1-based), one board per move.
    #[instrument(skip(self, store))]
    pub fn replay(&mut self, store: &dyn HistoryStore, number: usize) -> Result<()> {
        let records = store.records()?;
        if records.is_empty() {
            bail!("No games have been played yet.");
        }
        let Some(record) = number.checked_sub(1).and_then(|i| records.get(i)) else {
            bail!("Please select a valid game number (1-{}).", records.len());
        };
        if record.moves().is_empty() {
            bail!("No move data available for game {}.", number);
        }

        let frames = replay(record.moves())
            .with_context(|| format!("Game {} has an invalid move list", number))?;
        writeln!(self.output, "{}", record.summary(number))?;
        for (step, (played, frame)) in record.moves().iter().zip(&frames).enumerate() {
            if step > 0 {
                pause(*self.config.replay_delay_ms());
            }
            writeln!(self.output, "\nMove {}: {}\n{}", step + 1, played, frame)?;
        }
        Ok(())
    }

    /// Prints the optimal move for `player` on `board`.
    pub fn suggest(&mut self, board: &Board, player: Player) -> Result<()> {
        match Minimax::new().search(board, player).0 {
            Some(best) => writeln!(
                self.output,
                "Best move for {}: {} (score {})",
                player, best.coord, best.score
            )?,
            None => writeln!(self.output, "The board is full; no move for {}.", player)?,
        }
        Ok(())
    }

    fn drain(
        &mut self,
        events: &Receiver<GameEvent>,
        records: &mut RecordBuilder,
        store: &mut dyn HistoryStore,
        engine: &GameEngine,
        labels: &SideLabels,
    ) -> Result<usize> {
        let mut saved = 0;
        for event in events.try_iter() {
            match event {
                GameEvent::MoveApplied(applied) => {
                    let player = applied.player();
                    if engine.mode().has_computer() && player == engine.computer() {
                        pause(*self.config.computer_delay_ms());
                    }
                    writeln!(
                        self.output,
                        "{} ({}) plays {}",
                        labels.label(player),
                        player,
                        applied.coord()
                    )?;
                }
                GameEvent::GameOver(outcome) => {
                    writeln!(self.output, "\n{}\n", engine.board())?;
                    writeln!(self.output, "{}", game_over_message(labels, outcome))?;
                }
            }
            if let Some(record) = records.observe(&event) {
                store.append(record).context("Failed to save game")?;
                saved += 1;
            }
        }
        Ok(saved)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y")))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read input")?;
        Ok((read > 0).then_some(line))
    }
}

fn game_over_message(labels: &SideLabels, outcome: Outcome) -> String {
    match outcome {
        Outcome::Draw => "It's a draw!".to_string(),
        Outcome::Win(player) => format!("{} win!", labels.label(player)),
        Outcome::InProgress => String::new(),
    }
}

fn pause(ms: u64) {
    if ms > 0 {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("1 2\n"), Command::Move(1, 2));
        assert_eq!(Command::parse(" 0,0 "), Command::Move(0, 0));
        assert_eq!(Command::parse("Q"), Command::Quit);
        assert_eq!(Command::parse("x y"), Command::Invalid);
        assert_eq!(Command::parse("1"), Command::Invalid);
        assert_eq!(Command::parse("1 2 3"), Command::Invalid);
    }

    #[test]
    fn test_game_over_messages() {
        let labels = SideLabels::for_mode(GameMode::HumanVsComputer, Player::O);
        assert_eq!(game_over_message(&labels, Outcome::Draw), "It's a draw!");
        assert_eq!(game_over_message(&labels, Outcome::Win(Player::X)), "You win!");
        assert_eq!(game_over_message(&labels, Outcome::Win(Player::O)), "AI win!");

        let labels = SideLabels::for_mode(GameMode::HumanVsHuman, Player::O);
        assert_eq!(
            game_over_message(&labels, Outcome::Win(Player::X)),
            "Player 1 win!"
        );
    }
}
