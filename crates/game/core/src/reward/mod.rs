//! Experience and stat growth after a battle.

use crate::config::BattleConfig;
use crate::env::{RandomSource, Roll, TypeMultiplier};
use crate::state::{Combatant, Outcome};

/// Stat increments granted by a level-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatGains {
    pub strength: u32,
    pub agility: u32,
    pub intelligence: u32,
}

impl StatGains {
    /// Draws each gain independently from its configured range.
    pub fn roll(rng: &mut impl RandomSource) -> Self {
        let (str_min, str_max) = BattleConfig::STRENGTH_GAIN;
        let (agi_min, agi_max) = BattleConfig::AGILITY_GAIN;
        let (int_min, int_max) = BattleConfig::INTELLIGENCE_GAIN;
        Self {
            strength: rng.range(Roll::StatGain, str_min, str_max),
            agility: rng.range(Roll::StatGain, agi_min, agi_max),
            intelligence: rng.range(Roll::StatGain, int_min, int_max),
        }
    }
}

/// Final record of a battle. Produced once; persisting it is the caller's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    pub outcome: Outcome,
    pub xp_gained: u32,
    pub leveled_up: bool,
    /// Present only when `leveled_up`.
    pub stat_gains: Option<StatGains>,
    /// `level + 1` when `leveled_up`.
    pub next_level: Option<u32>,
    /// Multiplier applied to the experience, player type against enemy type.
    pub type_multiplier: TypeMultiplier,
}

impl BattleResult {
    pub fn is_victory(&self) -> bool {
        self.outcome == Outcome::PlayerWon
    }
}

/// Computes experience and level-up gains for the player.
///
/// ```text
/// loss: xp = 0
/// win:  xp = floor((50 + enemy.level * 5) * type_multiplier)
/// leveled_up = xp >= 100
/// ```
///
/// Stat gains are only drawn on a level-up.
pub fn compute_reward(
    outcome: Outcome,
    player: &Combatant,
    enemy: &Combatant,
    type_multiplier: TypeMultiplier,
    rng: &mut impl RandomSource,
) -> BattleResult {
    if outcome != Outcome::PlayerWon {
        return BattleResult {
            outcome,
            xp_gained: 0,
            leveled_up: false,
            stat_gains: None,
            next_level: None,
            type_multiplier,
        };
    }

    let base = BattleConfig::XP_BASE
        .saturating_add(enemy.level().saturating_mul(BattleConfig::XP_PER_ENEMY_LEVEL));
    let xp_gained = type_multiplier.apply(base);
    let leveled_up = xp_gained >= BattleConfig::LEVEL_UP_XP;

    BattleResult {
        outcome,
        xp_gained,
        leveled_up,
        stat_gains: leveled_up.then(|| StatGains::roll(rng)),
        next_level: leveled_up.then(|| player.level().saturating_add(1)),
        type_multiplier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CreatureType, FixedRolls, PcgRng};
    use crate::state::{CombatStats, CombatantId};

    fn combatant(creature: CreatureType, level: u32) -> Combatant {
        Combatant::new(
            CombatantId::Enemy(u64::from(level)),
            creature.as_str(),
            creature,
            level,
            CombatStats::new(30, 30, 30),
        )
    }

    #[test]
    fn win_against_level_ten_levels_up() {
        let player = combatant(CreatureType::Dog, 4);
        let enemy = combatant(CreatureType::Cat, 10);
        let mut rolls = FixedRolls::never();

        let result = compute_reward(
            Outcome::PlayerWon,
            &player,
            &enemy,
            TypeMultiplier::NEUTRAL,
            &mut rolls,
        );

        assert_eq!(result.xp_gained, 100);
        assert!(result.leveled_up);
        assert_eq!(result.next_level, Some(5));
        assert_eq!(
            result.stat_gains,
            Some(StatGains {
                strength: 1,
                agility: 1,
                intelligence: 1,
            })
        );
    }

    #[test]
    fn loss_grants_nothing() {
        let player = combatant(CreatureType::Dragon, 4);
        let enemy = combatant(CreatureType::Dinosaur, 30);
        let mut rolls = FixedRolls::never();

        let result = compute_reward(
            Outcome::PlayerLost,
            &player,
            &enemy,
            TypeMultiplier::ADVANTAGE,
            &mut rolls,
        );

        assert_eq!(result.xp_gained, 0);
        assert!(!result.leveled_up);
        assert_eq!(result.stat_gains, None);
        assert_eq!(result.next_level, None);
        assert!(!result.is_victory());
    }

    #[test]
    fn type_multiplier_scales_experience() {
        let player = combatant(CreatureType::Dinosaur, 2);
        let enemy = combatant(CreatureType::Dragon, 3);
        let mut rolls = FixedRolls::never();

        // (50 + 15) * 0.8 = 52
        let result = compute_reward(
            Outcome::PlayerWon,
            &player,
            &enemy,
            TypeMultiplier::DISADVANTAGE,
            &mut rolls,
        );
        assert_eq!(result.xp_gained, 52);
        assert!(!result.leveled_up);
        assert_eq!(result.stat_gains, None);

        // (50 + 45) * 1.2 = 114
        let enemy = combatant(CreatureType::Dinosaur, 9);
        let result = compute_reward(
            Outcome::PlayerWon,
            &combatant(CreatureType::Dragon, 2),
            &enemy,
            TypeMultiplier::ADVANTAGE,
            &mut rolls,
        );
        assert_eq!(result.xp_gained, 114);
        assert!(result.leveled_up);
    }

    #[test]
    fn huge_enemy_level_saturates_experience() {
        let player = combatant(CreatureType::Dragon, 5);
        let mut rolls = FixedRolls::never();

        for level in [800_000_000, u32::MAX] {
            let enemy = combatant(CreatureType::Dinosaur, level);
            let result = compute_reward(
                Outcome::PlayerWon,
                &player,
                &enemy,
                TypeMultiplier::ADVANTAGE,
                &mut rolls,
            );
            assert_eq!(result.xp_gained, u32::MAX);
            assert!(result.leveled_up);
        }
    }

    #[test]
    fn stat_gains_stay_in_range() {
        let mut rng = PcgRng::seeded(21);
        for _ in 0..500 {
            let gains = StatGains::roll(&mut rng);
            assert!((1..=3).contains(&gains.strength));
            assert!((1..=3).contains(&gains.agility));
            assert!((1..=2).contains(&gains.intelligence));
        }

        let mut max = FixedRolls::never().with_stat_gain_draw(u32::MAX);
        assert_eq!(
            StatGains::roll(&mut max),
            StatGains {
                strength: 3,
                agility: 3,
                intelligence: 2,
            }
        );
    }
}
