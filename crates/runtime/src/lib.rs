//! Runtime orchestration for pet battles.
//!
//! This crate wires the pure rules from `battle-core` to the outside world:
//! the pet service that supplies pets and enemies, environment-driven
//! configuration, and the [`BattleSession`] that owns one battle from enemy
//! fetch to reward.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the error taxonomy and the [`PetService`] trait
//! - [`records`] holds the wire records and their validation
//! - [`providers`] contains the HTTP and in-memory pet services
//! - [`session`] hosts the battle orchestrator
//! - [`config`] loads runtime settings from the environment
pub mod api;
pub mod config;
pub mod providers;
pub mod records;
pub mod session;

pub use api::{PetService, Result, RuntimeError, ServiceError, ServiceResult};
pub use config::{RuntimeConfig, ServiceConfig, SessionConfig};
pub use providers::{HttpPetService, StaticPetService};
pub use records::{
    DEFAULT_ENEMY_NAME, DEFAULT_PET_NAME, EnemyRecord, PetRecord, PveResponse, Rarity, WireNumber,
};
pub use session::{BattleSession, StepReport};
