//! Re-validating replay of a recorded move list.

use super::{Board, Move, MoveError, Outcome, Player};
use tracing::instrument;

/// Why a recorded move list could not be replayed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ReplayError {
    /// A move was played out of turn.
    #[display("Move {} was played by {} but {} was due", index, found, expected)]
    WrongPlayer {
        /// Zero-based index into the move list.
        index: usize,
        /// Player that should have moved.
        expected: Player,
        /// Player recorded on the move.
        found: Player,
    },
    /// A move could not be placed.
    #[display("Move {} is illegal: {}", index, source)]
    IllegalMove {
        /// Zero-based index into the move list.
        index: usize,
        /// Why the placement failed.
        source: MoveError,
    },
}

/// Replays `moves` from an empty board.
///
/// Returns the board after each move, so a viewer can step through the
/// game. Moves after the game ended are rejected like any other illegal
/// placement.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(moves: &[Move]) -> Result<Vec<Board>, ReplayError> {
    let mut board = Board::new();
    let mut frames = Vec::with_capacity(moves.len());
    let mut expected = Player::X;

    for (index, recorded) in moves.iter().enumerate() {
        if board.outcome() != Outcome::InProgress {
            return Err(ReplayError::IllegalMove {
                index,
                source: MoveError::GameOver,
            });
        }
        if recorded.player() != expected {
            return Err(ReplayError::WrongPlayer {
                index,
                expected,
                found: recorded.player(),
            });
        }
        if !recorded.coord().in_bounds() {
            return Err(ReplayError::IllegalMove {
                index,
                source: MoveError::OutOfBounds(recorded.coord()),
            });
        }
        if !board.place(recorded.row(), recorded.col(), recorded.player()) {
            return Err(ReplayError::IllegalMove {
                index,
                source: MoveError::CellOccupied(recorded.coord()),
            });
        }
        frames.push(board.snapshot());
        expected = expected.opponent();
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;

    #[test]
    fn test_replay_frames() {
        let moves = [
            Move::new(1, 1, Player::X),
            Move::new(0, 0, Player::O),
            Move::new(2, 2, Player::X),
        ];
        let frames = replay(&moves).unwrap();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].filled(), 1);
        assert!(frames[0].is_empty_cell(0, 0));
        assert!(!frames[2].is_empty_cell(2, 2));
    }

    #[test]
    fn test_replay_rejects_wrong_player() {
        let moves = [Move::new(1, 1, Player::X), Move::new(0, 0, Player::X)];
        assert_eq!(
            replay(&moves),
            Err(ReplayError::WrongPlayer {
                index: 1,
                expected: Player::O,
                found: Player::X,
            })
        );
    }

    #[test]
    fn test_replay_rejects_occupied() {
        let moves = [Move::new(1, 1, Player::X), Move::new(1, 1, Player::O)];
        assert_eq!(
            replay(&moves),
            Err(ReplayError::IllegalMove {
                index: 1,
                source: MoveError::CellOccupied(Coord::new(1, 1)),
            })
        );
    }

    #[test]
    fn test_replay_rejects_moves_after_win() {
        let moves = [
            Move::new(0, 0, Player::X),
            Move::new(1, 0, Player::O),
            Move::new(0, 1, Player::X),
            Move::new(1, 1, Player::O),
            Move::new(0, 2, Player::X),
            Move::new(1, 2, Player::O),
        ];
        assert!(matches!(
            replay(&moves),
            Err(ReplayError::IllegalMove {
                index: 5,
                source: MoveError::GameOver,
            })
        ));
    }
}
