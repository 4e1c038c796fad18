/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Total combatant actions allowed before the battle is decided on
    /// remaining health. Player and enemy actions each count as one turn.
    pub turn_limit: u32,

    /// Healing items the player starts each battle with.
    pub starting_items: u32,

    /// Heal amount of the standard potion offered by frontends.
    pub potion_heal: u32,
}

impl BattleConfig {
    // ===== fixed rule constants =====
    /// Base of the derived health pool.
    pub const BASE_HEALTH: u32 = 100;
    /// Health gained per level.
    pub const HEALTH_PER_LEVEL: u32 = 5;
    /// Upper bound for strength, agility and intelligence from the pet service.
    pub const MAX_STAT: u32 = 100;

    /// Critical chance is `attacker.agility / CRIT_AGILITY_DIVISOR`.
    pub const CRIT_AGILITY_DIVISOR: u32 = 100;
    /// Dodge chance is `defender.agility / DODGE_AGILITY_DIVISOR`.
    pub const DODGE_AGILITY_DIVISOR: u32 = 150;
    /// Critical damage multiplier, in percent.
    pub const CRIT_MULTIPLIER_PERCENT: u32 = 150;
    /// Share of incoming damage a defending combatant still takes, in percent.
    pub const DEFEND_DAMAGE_PERCENT: u32 = 60;

    // enemy policy thresholds (percentiles of a single intent roll)
    pub const ENEMY_ATTACK_BELOW: u32 = 70;
    pub const ENEMY_DEFEND_BELOW: u32 = 90;
    /// Enemies below this share of their pool always attack.
    pub const ENEMY_DESPERATE_HEALTH_PERCENT: u32 = 30;

    // rewards
    pub const XP_BASE: u32 = 50;
    pub const XP_PER_ENEMY_LEVEL: u32 = 5;
    pub const LEVEL_UP_XP: u32 = 100;
    pub const STRENGTH_GAIN: (u32, u32) = (1, 3);
    pub const AGILITY_GAIN: (u32, u32) = (1, 3);
    pub const INTELLIGENCE_GAIN: (u32, u32) = (1, 2);

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TURN_LIMIT: u32 = 10;
    pub const DEFAULT_STARTING_ITEMS: u32 = 3;
    pub const DEFAULT_POTION_HEAL: u32 = 30;

    pub fn new() -> Self {
        Self {
            turn_limit: Self::DEFAULT_TURN_LIMIT,
            starting_items: Self::DEFAULT_STARTING_ITEMS,
            potion_heal: Self::DEFAULT_POTION_HEAL,
        }
    }

    /// Overrides the turn cap. A cap of zero would end every battle before it
    /// starts, so it is raised to one.
    #[must_use]
    pub fn with_turn_limit(mut self, turn_limit: u32) -> Self {
        self.turn_limit = turn_limit.max(1);
        self
    }

    #[must_use]
    pub fn with_starting_items(mut self, starting_items: u32) -> Self {
        self.starting_items = starting_items;
        self
    }

    #[must_use]
    pub fn with_potion_heal(mut self, potion_heal: u32) -> Self {
        self.potion_heal = potion_heal;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
