//! Combatant (pet or enemy) state.

use crate::config::BattleConfig;
use crate::env::CreatureType;

/// Which side of the battle a combatant fights on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub const fn opponent(&self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Enemy => "enemy",
        }
    }

    /// Side acting on the given turn: even turns belong to the player.
    pub const fn for_turn(turn_index: u32) -> Self {
        if turn_index % 2 == 0 {
            Self::Player
        } else {
            Self::Enemy
        }
    }
}

/// Identifier of a combatant.
///
/// Pets keep the persistent identifier issued by the pet service; enemies get
/// an ephemeral number that is only meaningful inside one battle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatantId {
    Pet(String),
    Enemy(u64),
}

impl core::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pet(id) => write!(f, "pet:{id}"),
            Self::Enemy(id) => write!(f, "enemy:{id}"),
        }
    }
}

/// Battle-relevant attributes of a combatant.
///
/// Values coming from the pet service are clamped to `[0, MAX_STAT]` with
/// [`CombatStats::clamped`]; the combat formulas accept any value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub strength: u32,
    pub agility: u32,
    pub intelligence: u32,
}

impl CombatStats {
    pub const fn new(strength: u32, agility: u32, intelligence: u32) -> Self {
        Self {
            strength,
            agility,
            intelligence,
        }
    }

    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            strength: self.strength.min(BattleConfig::MAX_STAT),
            agility: self.agility.min(BattleConfig::MAX_STAT),
            intelligence: self.intelligence.min(BattleConfig::MAX_STAT),
        }
    }

    /// Sum of all stats, used for win-probability forecasts.
    pub const fn power(&self) -> u64 {
        self.strength as u64 + self.agility as u64 + self.intelligence as u64
    }
}

/// A pet or enemy taking part in a battle.
///
/// # Invariants
///
/// - `level >= 1`
/// - `current_health <= max_health`, where `max_health = 100 + level * 5`
/// - health changes only through [`Combatant::take_damage`] and
///   [`Combatant::heal`], both of which clamp
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub creature: CreatureType,
    level: u32,
    pub stats: CombatStats,
    max_health: u32,
    current_health: u32,

    /// Set by a defend action; consumed by the next hit against this combatant.
    pub defending: bool,

    /// Healing items available to this combatant.
    pub(crate) items: u32,
}

impl Combatant {
    /// Creates a combatant at full health. A level of zero is raised to one.
    pub fn new(
        id: CombatantId,
        name: impl Into<String>,
        creature: CreatureType,
        level: u32,
        stats: CombatStats,
    ) -> Self {
        let level = level.max(1);
        let max_health = Self::max_health_for(level);
        Self {
            id,
            name: name.into(),
            creature,
            level,
            stats,
            max_health,
            current_health: max_health,
            defending: false,
            items: 0,
        }
    }

    /// Derived health pool: `100 + level * 5`.
    pub const fn max_health_for(level: u32) -> u32 {
        BattleConfig::BASE_HEALTH.saturating_add(level.saturating_mul(BattleConfig::HEALTH_PER_LEVEL))
    }

    /// Returns a copy with current health set (clamped to the pool).
    #[must_use]
    pub fn with_health(mut self, health: u32) -> Self {
        self.current_health = health.min(self.max_health);
        self
    }

    pub const fn level(&self) -> u32 {
        self.level
    }

    pub const fn max_health(&self) -> u32 {
        self.max_health
    }

    pub const fn current_health(&self) -> u32 {
        self.current_health
    }

    pub const fn items(&self) -> u32 {
        self.items
    }

    #[inline]
    pub const fn is_fainted(&self) -> bool {
        self.current_health == 0
    }

    /// Returns true if remaining health is below `percent` of the pool.
    pub fn health_below_percent(&self, percent: u32) -> bool {
        u64::from(self.current_health) * 100 < u64::from(self.max_health) * u64::from(percent)
    }

    /// Resets health to full and drops any stance.
    pub(crate) fn restore(&mut self) {
        self.current_health = self.max_health;
        self.defending = false;
    }

    /// Subtracts damage (clamped at zero) and returns the amount removed.
    pub(crate) fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.current_health;
        self.current_health = before.saturating_sub(amount);
        before - self.current_health
    }

    /// Restores health (capped at the pool) and returns the amount restored.
    pub(crate) fn heal(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_health - self.current_health);
        self.current_health += restored;
        restored
    }
}
