//! Combat resolution.
//!
//! Pure functions for one attacker → defender exchange. Nothing here touches
//! battle state; the [`TurnEngine`](crate::engine::TurnEngine) applies the
//! returned [`AttackOutcome`] to health pools.
//!
//! # Core Functions
//!
//! - `resolve_attack`: dodge roll, crit roll and damage in one call
//! - `calculate_damage`: fixed-point damage formula
//! - `apply_defending`: stance mitigation applied by the engine
//! - `win_probability`: pre-battle forecast shown by result screens

pub mod damage;
pub mod forecast;
pub mod hit;
pub mod result;

pub use damage::{apply_damage, apply_defending, base_damage_tenths, calculate_damage};
pub use forecast::win_probability;
pub use hit::{check_critical, check_dodge};
pub use result::{AttackOutcome, HitKind, resolve_attack};
