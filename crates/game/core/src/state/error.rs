//! Errors raised while building combatants from external records.

use crate::error::{BattleError, ErrorSeverity};

/// A combatant record could not be turned into a [`Combatant`](super::Combatant).
///
/// Out-of-range values are clamped rather than rejected; only records missing
/// required fields or carrying non-numeric values end up here.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatantError {
    #[error("combatant record is missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("combatant record has a blank `{field}`")]
    BlankField { field: &'static str },

    #[error("combatant record field `{field}` is not a number: {value}")]
    InvalidNumber { field: &'static str, value: String },
}

impl BattleError for CombatantError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "COMBATANT_MISSING_FIELD",
            Self::BlankField { .. } => "COMBATANT_BLANK_FIELD",
            Self::InvalidNumber { .. } => "COMBATANT_INVALID_NUMBER",
        }
    }
}
