//! Tic-tac-toe core - rules, turn engine and a perfect opponent
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid and its structural queries (no turn logic)
//! - **Rules**: win and draw detection over a board
//! - **Engine**: turn sequencing, the legality gate and outcome detection
//! - **Search**: exhaustive minimax that picks the computer's moves
//! - **Events**: `MoveApplied` / `GameOver` delivered to observers
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{EventLog, GameEngine, GameMode, Player};
//!
//! let log = EventLog::new();
//! let mut engine = GameEngine::builder(GameMode::HumanVsComputer)
//!     .observer(Box::new(log.clone()))
//!     .build();
//!
//! // The computer (O) answers before request_move returns.
//! assert!(engine.request_move(1, 1));
//! assert_eq!(engine.active_player(), Some(Player::X));
//! assert_eq!(log.len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod engine;
mod events;
mod invariants;
mod record;
mod replay;
mod rules;
mod search;
mod types;

pub use action::{BOARD_SIZE, Coord, Move, MoveError};
pub use board::{Board, BoardParseError};
pub use engine::{EngineBuilder, GameEngine};
pub use events::{ChannelObserver, EventLog, GameEvent, GameObserver};
pub use invariants::{
    AlternatingTurnInvariant, BalancedMarksInvariant, EngineInvariants,
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
};
pub use record::{GameRecord, RecordBuilder, SideLabels};
pub use replay::{ReplayError, replay};
pub use rules::{LINES, is_draw, is_full, is_winner, outcome, winner};
pub use search::{
    DRAW_SCORE, LOSS_SCORE, Minimax, ScoredMove, SearchStats, Strategy, WIN_SCORE, choose_move,
};
pub use types::{Cell, EngineState, GameMode, Outcome, Player};
