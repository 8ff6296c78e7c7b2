//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use super::win::winner;

/// Checks if the board is full (no empty cell).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().flatten().all(|c| *c != Cell::Empty)
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
