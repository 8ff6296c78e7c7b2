//! Exhaustive minimax search.
//!
//! Every node of the remaining game tree is visited. There is no pruning,
//! no depth discount and no heuristic: a position scores +10 if the
//! maximizing player has won, -10 if the opponent has, and 0 for a full
//! board without a line.
//!
//! Among equally scored moves the first one in row-major order wins. The
//! engine's behavior (and its tests) depend on this tie-break.

use super::{Board, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a node won by the maximizing player.
pub const WIN_SCORE: i32 = 10;
/// Score of a node won by the minimizing player.
pub const LOSS_SCORE: i32 = -10;
/// Score of a drawn node.
pub const DRAW_SCORE: i32 = 0;

/// A source of moves for the computer's turn.
pub trait Strategy {
    /// Picks a move for `player` on `board`, or `None` if none exists.
    fn choose_move(&self, board: &Board, player: Player) -> Option<Coord>;
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited, the root's children included.
    pub nodes: u64,
    /// Terminal nodes scored.
    pub leaves: u64,
}

/// A legal move and its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Where the mark goes.
    pub coord: Coord,
    /// Value of the position after the move, from the mover's side.
    pub score: i32,
}

/// Full-depth minimax player.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl Minimax {
    /// Creates the search engine.
    pub fn new() -> Self {
        Self
    }

    /// Value of `board` with `to_move` to play, seen by `maximizer`.
    #[instrument(skip(self))]
    pub fn evaluate(&self, board: &Board, to_move: Player, maximizer: Player) -> i32 {
        let mut stats = SearchStats::default();
        minimax(*board, to_move, maximizer, &mut stats)
    }

    /// Every legal move for `player` with its score, row-major.
    #[instrument(skip(self))]
    pub fn score_moves(&self, board: &Board, player: Player) -> Vec<ScoredMove> {
        let mut stats = SearchStats::default();
        let scored = score_children(board, player, &mut stats);
        debug!(nodes = stats.nodes, leaves = stats.leaves, "Scored moves");
        scored
    }

    /// Picks the optimal move and reports the search effort.
    #[instrument(skip(self))]
    pub fn search(&self, board: &Board, player: Player) -> (Option<ScoredMove>, SearchStats) {
        let mut stats = SearchStats::default();
        let mut best: Option<ScoredMove> = None;
        for candidate in score_children(board, player, &mut stats) {
            // Strict comparison keeps the earliest cell on ties.
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }
        match best {
            Some(chosen) => debug!(
                row = chosen.coord.row,
                col = chosen.coord.col,
                score = chosen.score,
                nodes = stats.nodes,
                "Chose move"
            ),
            None => debug!("No empty cell to play"),
        }
        (best, stats)
    }
}

impl Strategy for Minimax {
    fn choose_move(&self, board: &Board, player: Player) -> Option<Coord> {
        self.search(board, player).0.map(|m| m.coord)
    }
}

/// Optimal move for `player`, or `None` if the board is full.
///
/// The caller's board is never modified.
pub fn choose_move(board: &Board, player: Player) -> Option<Coord> {
    Minimax.choose_move(board, player)
}

fn score_children(board: &Board, player: Player, stats: &mut SearchStats) -> Vec<ScoredMove> {
    board
        .empty_cells()
        .map(|coord| {
            let mut child = board.snapshot();
            child.place(coord.row, coord.col, player);
            let score = minimax(child, player.opponent(), player, stats);
            ScoredMove { coord, score }
        })
        .collect()
}

fn minimax(board: Board, to_move: Player, maximizer: Player, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;

    if board.is_winner(maximizer) {
        stats.leaves += 1;
        return WIN_SCORE;
    }
    if board.is_winner(maximizer.opponent()) {
        stats.leaves += 1;
        return LOSS_SCORE;
    }
    if board.is_full() {
        stats.leaves += 1;
        return DRAW_SCORE;
    }

    let children = board.empty_cells().map(|coord| {
        let mut child = board;
        child.place(coord.row, coord.col, to_move);
        minimax(child, to_move.opponent(), maximizer, stats)
    });

    if to_move == maximizer {
        children.fold(i32::MIN, i32::max)
    } else {
        children.fold(i32::MAX, i32::min)
    }
}
