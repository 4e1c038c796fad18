//! Battle state types.
//!
//! [`BattleState`] is owned exclusively by one battle and mutated only by the
//! [`TurnEngine`](crate::engine::TurnEngine). Frontends observe it through the
//! read-only accessors and the append-only [`BattleLog`].
mod battle;
mod combatant;
mod error;
mod log;

pub use battle::{BattleState, Outcome, TurnPhase};
pub use combatant::{CombatStats, Combatant, CombatantId, Side};
pub use error::CombatantError;
pub use log::{BattleEvent, BattleLog, LogEntry};
