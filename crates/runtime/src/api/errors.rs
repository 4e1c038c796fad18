//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the pet service, record validation and the turn engine
//! so clients can bubble them up with consistent context.
use battle_core::{BattleError, CombatantError, ErrorSeverity, Outcome, Side, StepError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Failures talking to the pet service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("malformed response from {url}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("pet {pet_id} not found")]
    PetNotFound { pet_id: String },

    #[error("pet service unavailable: {reason}")]
    Unavailable { reason: String },
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to fetch an enemy for pet {pet_id}")]
    EnemyFetch {
        pet_id: String,
        #[source]
        source: ServiceError,
    },

    #[error("failed to list pets")]
    ListPets(#[source] ServiceError),

    #[error("invalid {} record", .side.as_str())]
    InvalidCombatant {
        side: Side,
        #[source]
        source: CombatantError,
    },

    #[error("battle session already resolved ({})", .outcome.as_str())]
    SessionAlreadyResolved { outcome: Outcome },

    #[error(transparent)]
    Step(StepError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

impl From<StepError> for RuntimeError {
    fn from(error: StepError) -> Self {
        match error {
            StepError::AlreadyResolved { outcome } => Self::SessionAlreadyResolved { outcome },
            other => Self::Step(other),
        }
    }
}

impl BattleError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EnemyFetch { .. } | Self::ListPets(_) | Self::SessionAlreadyResolved { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::InvalidCombatant { source, .. } => source.severity(),
            Self::Step(source) => source.severity(),
            Self::InvalidConfig(_) | Self::HttpClient(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EnemyFetch { .. } => "ENEMY_FETCH",
            Self::ListPets(_) => "LIST_PETS",
            Self::InvalidCombatant { .. } => "INVALID_COMBATANT",
            Self::SessionAlreadyResolved { .. } => "SESSION_ALREADY_RESOLVED",
            Self::Step(source) => source.error_code(),
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::HttpClient(_) => "HTTP_CLIENT",
        }
    }
}
