//! Read-only rule data and the random source.
//!
//! The creature roster and the type advantage table are static data defined
//! once. Randomness is an injected oracle so every roll can be reproduced or
//! forced in tests.
mod creature;
mod rng;
mod tables;

pub use creature::CreatureType;
pub use rng::{FixedRolls, PcgRng, RandomSource, Roll, mix_seed};
pub use tables::{TypeAdvantageTable, TypeMultiplier, TypeRelation, multiplier_for};
