//! First-class invariants for the live game.
//!
//! Invariants are logical properties that hold after every accepted move.
//! The engine checks them in debug builds; tests check them directly.

use super::{Cell, EngineState, GameEngine, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Players alternate X, O, X, ... and the active player follows the history.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let moves = engine.moves();
        let alternates = moves
            .iter()
            .enumerate()
            .all(|(i, m)| m.player() == if i % 2 == 0 { Player::X } else { Player::O });
        if !alternates {
            return false;
        }
        match engine.state() {
            EngineState::AwaitingMove(active) => {
                let expected = if moves.len() % 2 == 0 {
                    Player::X
                } else {
                    Player::O
                };
                active == expected
            }
            EngineState::GameOver(_) => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Every recorded move is on the board and nothing else is.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let moves = engine.moves();
        board.filled() == moves.len()
            && moves
                .iter()
                .all(|m| board.get(m.row(), m.col()) == Some(Cell::Occupied(m.player())))
    }

    fn description() -> &'static str {
        "Move history matches the marks on the board"
    }
}

/// X has as many marks as O, or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<GameEngine> for BalancedMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    BalancedMarksInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameMode;

    #[test]
    fn test_invariants_hold_for_new_game() {
        let engine = GameEngine::new(GameMode::HumanVsHuman);
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariants_hold_through_a_game() {
        let mut engine = GameEngine::new(GameMode::HumanVsHuman);
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            assert!(engine.request_move(row, col));
            assert!(EngineInvariants::check_all(&engine).is_ok());
        }
        assert!(engine.is_over());
    }

    #[test]
    fn test_invariants_hold_against_computer() {
        let mut engine = GameEngine::new(GameMode::HumanVsComputer);
        engine.request_move(0, 0);
        engine.request_move(2, 2);
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert!(HistoryConsistentInvariant::holds(&engine));
        assert!(BalancedMarksInvariant::holds(&engine));
    }
}
