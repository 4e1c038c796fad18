//! Deterministic battle rules for the pet-vs-environment minigame.
//!
//! `battle-core` defines the canonical combat rules (damage, critical and dodge
//! rolls, type advantages, turn sequencing, rewards) and exposes pure APIs that
//! the runtime and any frontend can reuse. All state mutation flows through
//! [`engine::TurnEngine`]; randomness always comes from an injected
//! [`env::RandomSource`].
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod reward;
pub mod state;

pub use action::{Action, choose_enemy_action};
pub use combat::{AttackOutcome, HitKind, resolve_attack, win_probability};
pub use config::BattleConfig;
pub use engine::{StepError, TurnEngine, TurnSummary};
pub use env::{
    CreatureType, FixedRolls, PcgRng, RandomSource, Roll, TypeAdvantageTable, TypeMultiplier,
    TypeRelation, multiplier_for,
};
pub use error::{BattleError, ErrorSeverity};
pub use reward::{BattleResult, StatGains, compute_reward};
pub use state::{
    BattleEvent, BattleLog, BattleState, CombatStats, Combatant, CombatantError, CombatantId,
    LogEntry, Outcome, Side, TurnPhase,
};
