//! Error types for the turn engine.

use crate::error::{BattleError, ErrorSeverity};
use crate::state::{Outcome, Side};

/// Errors surfaced while stepping a battle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepError {
    #[error("battle already resolved ({})", .outcome.as_str())]
    AlreadyResolved { outcome: Outcome },

    #[error("{attempted:?} cannot act: it is the {expected:?} turn")]
    OutOfTurn { expected: Side, attempted: Side },
}

impl StepError {
    pub fn already_resolved(outcome: Outcome) -> Self {
        Self::AlreadyResolved { outcome }
    }

    pub fn out_of_turn(expected: Side, attempted: Side) -> Self {
        Self::OutOfTurn {
            expected,
            attempted,
        }
    }
}

impl BattleError for StepError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // the caller can start a new battle
            Self::AlreadyResolved { .. } => ErrorSeverity::Recoverable,
            Self::OutOfTurn { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyResolved { .. } => "STEP_ALREADY_RESOLVED",
            Self::OutOfTurn { .. } => "STEP_OUT_OF_TURN",
        }
    }
}
