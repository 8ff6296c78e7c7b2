//! Turn sequencing and the legality gate.
//!
//! The engine owns the live board. Every placement, human or computer,
//! goes through the same path so outcome checks run uniformly. Rejected
//! requests change nothing and emit nothing.

use super::events::{GameEvent, GameObserver};
use super::invariants::{EngineInvariants, InvariantSet};
use super::search::{Minimax, Strategy};
use super::{Board, Coord, EngineState, GameMode, Move, MoveError, Outcome, Player};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
pub struct GameEngine {
    board: Board,
    mode: GameMode,
    state: EngineState,
    moves: Vec<Move>,
    computer: Player,
    strategy: Box<dyn Strategy>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board)
            .field("mode", &self.mode)
            .field("state", &self.state)
            .field("moves", &self.moves)
            .field("computer", &self.computer)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

/// Configures a [`GameEngine`] before the first move.
pub struct EngineBuilder {
    mode: GameMode,
    computer: Player,
    strategy: Box<dyn Strategy>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl EngineBuilder {
    /// Sets which marker the computer plays. Defaults to O.
    pub fn computer(mut self, player: Player) -> Self {
        self.computer = player;
        self
    }

    /// Replaces the minimax search with another move source.
    pub fn strategy(mut self, strategy: Box<dyn Strategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Registers an observer.
    pub fn observer(mut self, observer: Box<dyn GameObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Builds the engine. If the computer plays X it opens immediately.
    #[instrument(skip(self), fields(mode = %self.mode, computer = %self.computer))]
    pub fn build(self) -> GameEngine {
        let mut engine = GameEngine {
            board: Board::new(),
            mode: self.mode,
            state: EngineState::AwaitingMove(Player::X),
            moves: Vec::new(),
            computer: self.computer,
            strategy: self.strategy,
            observers: self.observers,
        };
        engine.play_computer_turn();
        engine
    }
}

impl GameEngine {
    /// Creates an engine for `mode` with default settings.
    pub fn new(mode: GameMode) -> Self {
        Self::builder(mode).build()
    }

    /// Starts configuring an engine for `mode`.
    pub fn builder(mode: GameMode) -> EngineBuilder {
        EngineBuilder {
            mode,
            computer: Player::O,
            strategy: Box::new(Minimax::new()),
            observers: Vec::new(),
        }
    }

    /// Registers an observer for all future events.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Requests a placement for the active player.
    ///
    /// Returns whether the request was accepted. In computer mode an
    /// accepted move is followed by the computer's reply before returning.
    pub fn request_move(&mut self, row: usize, col: usize) -> bool {
        self.try_move(row, col).is_ok()
    }

    /// Like [`request_move`](Self::request_move), reporting why a request
    /// was rejected.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn try_move(&mut self, row: usize, col: usize) -> Result<Move, MoveError> {
        if let EngineState::AwaitingMove(active) = self.state
            && self.is_computer(active)
        {
            debug!(%active, "Rejected move on the computer's turn");
            return Err(MoveError::NotYourTurn(active));
        }

        let applied = self.apply(row, col)?;
        self.play_computer_turn();
        Ok(applied)
    }

    /// Plays the computer's move if it is the computer's turn.
    ///
    /// Returns the move played, or `None` if it was not the computer's
    /// turn or the strategy produced nothing usable.
    #[instrument(skip(self))]
    pub fn play_computer_turn(&mut self) -> Option<Move> {
        let EngineState::AwaitingMove(active) = self.state else {
            return None;
        };
        if !self.is_computer(active) {
            return None;
        }

        let Some(Coord { row, col }) = self.strategy.choose_move(&self.board.snapshot(), active)
        else {
            warn!(%active, "Search found no move on a live board");
            return None;
        };

        match self.apply(row, col) {
            Ok(applied) => {
                info!(row, col, player = %active, "Computer moved");
                Some(applied)
            }
            Err(e) => {
                warn!(row, col, error = %e, "Strategy chose an illegal move");
                None
            }
        }
    }

    /// Starts a fresh game in `mode`.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: GameMode) {
        info!(%mode, "Resetting game");
        self.board = Board::new();
        self.moves.clear();
        self.mode = mode;
        self.state = EngineState::AwaitingMove(Player::X);
        self.play_computer_turn();
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the state machine position.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Returns the outcome so far.
    pub fn outcome(&self) -> Outcome {
        match self.state {
            EngineState::AwaitingMove(_) => Outcome::InProgress,
            EngineState::GameOver(outcome) => outcome,
        }
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn active_player(&self) -> Option<Player> {
        match self.state {
            EngineState::AwaitingMove(player) => Some(player),
            EngineState::GameOver(_) => None,
        }
    }

    /// Returns the computer's marker (meaningful in computer mode only).
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Returns the moves of the current game, in order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// True once no further placements are accepted.
    pub fn is_over(&self) -> bool {
        matches!(self.state, EngineState::GameOver(_))
    }

    fn is_computer(&self, player: Player) -> bool {
        self.mode.has_computer() && player == self.computer
    }

    fn apply(&mut self, row: usize, col: usize) -> Result<Move, MoveError> {
        let active = match self.state {
            EngineState::AwaitingMove(player) => player,
            EngineState::GameOver(_) => return Err(MoveError::GameOver),
        };
        let coord = Coord::new(row, col);
        if !coord.in_bounds() {
            return Err(MoveError::OutOfBounds(coord));
        }
        if !self.board.place(row, col, active) {
            return Err(MoveError::CellOccupied(coord));
        }

        let applied = Move::new(row, col, active);
        self.moves.push(applied);
        debug!(%applied, "Move applied");
        self.emit(GameEvent::MoveApplied(applied));

        if self.board.is_winner(active) {
            self.finish(Outcome::Win(active));
        } else if self.board.is_full() {
            self.finish(Outcome::Draw);
        } else {
            self.state = EngineState::AwaitingMove(active.opponent());
        }

        debug_assert!(
            EngineInvariants::check_all(&*self).is_ok(),
            "Engine invariants violated after {applied}"
        );
        Ok(applied)
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(%outcome, moves = self.moves.len(), "Game over");
        self.state = EngineState::GameOver(outcome);
        self.emit(GameEvent::GameOver(outcome));
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}
