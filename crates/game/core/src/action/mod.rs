//! Battle actions and the automated enemy policy.

use crate::config::BattleConfig;
use crate::env::{RandomSource, Roll};
use crate::state::Combatant;

/// Action a combatant takes on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    // ========================================================================
    // Offensive
    // ========================================================================
    /// Strength-weighted attack.
    Attack,

    /// Intelligence-weighted attack.
    SpecialAttack,

    // ========================================================================
    // Support
    // ========================================================================
    /// Mitigate the next incoming hit.
    Defend,

    /// Consume one healing item restoring up to `heal` health.
    UseItem { heal: u32 },
}

impl Action {
    /// The standard potion, healing the configured amount.
    pub fn potion(config: &BattleConfig) -> Self {
        Self::UseItem {
            heal: config.potion_heal,
        }
    }

    pub const fn is_attack(&self) -> bool {
        matches!(self, Self::Attack | Self::SpecialAttack)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::SpecialAttack => "special_attack",
            Self::Defend => "defend",
            Self::UseItem { .. } => "use_item",
        }
    }
}

/// Picks the enemy's action for its turn.
///
/// One intent roll `r` in `0..100`: attack when `r < 70` or the enemy is
/// below 30% health, defend when `r < 90`, otherwise special attack. The roll
/// is always drawn, even when low health forces the attack.
pub fn choose_enemy_action(enemy: &Combatant, rng: &mut impl RandomSource) -> Action {
    let roll = rng.percentile(Roll::EnemyIntent);
    let desperate = enemy.health_below_percent(BattleConfig::ENEMY_DESPERATE_HEALTH_PERCENT);

    if roll < BattleConfig::ENEMY_ATTACK_BELOW || desperate {
        Action::Attack
    } else if roll < BattleConfig::ENEMY_DEFEND_BELOW {
        Action::Defend
    } else {
        Action::SpecialAttack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CreatureType, FixedRolls};
    use crate::state::{CombatStats, CombatantId};

    fn enemy() -> Combatant {
        Combatant::new(
            CombatantId::Enemy(1),
            "Rex",
            CreatureType::Dinosaur,
            3,
            CombatStats::new(40, 5, 10),
        )
    }

    fn choose(enemy: &Combatant, percentile: u32) -> Action {
        let mut rolls = FixedRolls::never().with_enemy_percentile(percentile);
        choose_enemy_action(enemy, &mut rolls)
    }

    #[test]
    fn intent_thresholds() {
        let rex = enemy();
        assert_eq!(choose(&rex, 0), Action::Attack);
        assert_eq!(choose(&rex, 69), Action::Attack);
        assert_eq!(choose(&rex, 70), Action::Defend);
        assert_eq!(choose(&rex, 89), Action::Defend);
        assert_eq!(choose(&rex, 90), Action::SpecialAttack);
        assert_eq!(choose(&rex, 99), Action::SpecialAttack);
    }

    #[test]
    fn low_health_enemy_always_attacks() {
        // 34 / 115 is below 30%
        let rex = enemy().with_health(34);
        assert_eq!(choose(&rex, 75), Action::Attack);
        assert_eq!(choose(&rex, 95), Action::Attack);
    }

    #[test]
    fn potion_uses_configured_heal() {
        let config = BattleConfig::default().with_potion_heal(45);
        assert_eq!(Action::potion(&config), Action::UseItem { heal: 45 });
        assert!(!Action::potion(&config).is_attack());
        assert!(Action::SpecialAttack.is_attack());
    }
}
