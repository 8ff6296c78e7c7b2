//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Rules are kept apart from board
//! storage so the engine and the search share one definition of a win.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, is_winner, winner};

use super::{Board, Outcome};
use tracing::instrument;

/// Derives the outcome of a board.
///
/// A board holding a line for both players cannot arise from legal play;
/// X is reported first in that case.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(player) = winner(board) {
        Outcome::Win(player)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
