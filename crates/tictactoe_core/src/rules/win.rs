//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Coord, Player};
use strum::IntoEnumIterator;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
    [Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)],
    [Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 2)],
    // Columns
    [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)],
    [Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)],
    [Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)],
    // Diagonals
    [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)],
    [Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)],
];

/// Returns true if `player` occupies every cell of any winning line.
///
/// Every line is checked; nothing is assumed about move order.
pub fn is_winner(board: &Board, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|c| board.get(c.row, c.col) == Some(mark)))
}

/// Returns the player holding a complete line, if any.
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|&player| is_winner(board, player))
}
