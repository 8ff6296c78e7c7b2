//! The 3x3 grid and its structural queries.
//!
//! The board knows nothing about turns. It is a `Copy` value so the
//! search can explore on private copies without touching the live game.

use super::action::BOARD_SIZE;
use super::{Cell, Coord, Outcome, Player, rules};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from rows of cells.
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the cell at (row, col), or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns all cells, row-major.
    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// True iff (row, col) is on the board and empty.
    ///
    /// Out-of-range coordinates are not an error; they are simply not empty.
    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Cell::Empty)
    }

    /// Places `player`'s mark at (row, col).
    ///
    /// Returns false and leaves the board untouched if the cell is off the
    /// board or already occupied.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> bool {
        if !self.is_empty_cell(row, col) {
            trace!(row, col, %player, "Placement refused");
            return false;
        }
        self.cells[row][col] = Cell::Occupied(player);
        true
    }

    /// True iff `player` holds any of the eight winning lines.
    pub fn is_winner(&self, player: Player) -> bool {
        rules::is_winner(self, player)
    }

    /// Returns the player holding a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::winner(self)
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Derives the outcome from the current grid.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(self)
    }

    /// Returns an independent copy of the grid.
    pub fn snapshot(&self) -> Board {
        *self
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(|c| self.is_empty_cell(c.row, c.col))
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.player() == Some(player))
            .count()
    }

    /// Number of occupied cells.
    pub fn filled(&self) -> usize {
        self.count(Player::X) + self.count(Player::O)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
            if r + 1 < BOARD_SIZE {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing the compact board form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// A character that is neither a mark nor an empty cell.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(#[error(not(source))] char),
    /// The input did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),
}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells row-major: `X`, `O`, and `.`, `_` or `-` for empty.
    /// Slashes, pipes and whitespace are separators and ignored.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for ch in s.chars() {
            match ch {
                'X' | 'x' => cells.push(Cell::Occupied(Player::X)),
                'O' | 'o' => cells.push(Cell::Occupied(Player::O)),
                '.' | '_' | '-' => cells.push(Cell::Empty),
                '/' | '|' => {}
                c if c.is_whitespace() => {}
                c => return Err(BoardParseError::UnexpectedChar(c)),
            }
        }
        if cells.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(BoardParseError::WrongCellCount(cells.len()));
        }
        let mut board = Board::new();
        for (i, cell) in cells.into_iter().enumerate() {
            board.cells[i / BOARD_SIZE][i % BOARD_SIZE] = cell;
        }
        Ok(board)
    }
}
