//! Damage calculation and application.
//!
//! All arithmetic is integer: stat weights are tenths, multipliers percent.

use crate::config::BattleConfig;
use crate::env::TypeMultiplier;
use crate::state::CombatStats;

/// Weighted stat sum in tenths of a damage point.
///
/// # Formula
///
/// ```text
/// normal:  strength * 0.7 + agility * 0.3
/// special: strength * 0.3 + agility * 0.2 + intelligence * 0.5
/// ```
pub fn base_damage_tenths(stats: &CombatStats, is_special: bool) -> u64 {
    let strength = u64::from(stats.strength);
    let agility = u64::from(stats.agility);
    let intelligence = u64::from(stats.intelligence);

    if is_special {
        strength * 3 + agility * 2 + intelligence * 5
    } else {
        strength * 7 + agility * 3
    }
}

/// Calculate damage for a landed hit.
///
/// ```text
/// final = floor(max(1, base * type_multiplier * crit_multiplier))
/// ```
///
/// Never returns less than 1; dodges are handled by the caller.
pub fn calculate_damage(
    attacker: &CombatStats,
    is_special: bool,
    type_multiplier: TypeMultiplier,
    is_critical: bool,
) -> u32 {
    let crit_percent = if is_critical {
        BattleConfig::CRIT_MULTIPLIER_PERCENT
    } else {
        100
    };

    // tenths * percent * percent
    let scaled = base_damage_tenths(attacker, is_special)
        * u64::from(type_multiplier.percent())
        * u64::from(crit_percent);
    let damage = scaled / 100_000;

    u32::try_from(damage).unwrap_or(u32::MAX).max(1)
}

/// Reduces incoming damage for a defending combatant.
///
/// A landed hit still deals at least 1; zero stays zero.
pub fn apply_defending(damage: u32) -> u32 {
    if damage == 0 {
        return 0;
    }
    let reduced = u64::from(damage) * u64::from(BattleConfig::DEFEND_DAMAGE_PERCENT) / 100;
    (reduced as u32).max(1)
}

/// Apply damage to current HP, clamped to 0.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn advantage_normal_attack() {
        let stats = CombatStats::new(80, 10, 20);
        assert_eq!(base_damage_tenths(&stats, false), 590);
        // floor(59.0 * 1.2) = floor(70.8)
        assert_eq!(
            calculate_damage(&stats, false, TypeMultiplier::ADVANTAGE, false),
            70
        );
    }

    #[test]
    fn special_attack_weights_intelligence() {
        let stats = CombatStats::new(10, 10, 80);
        // 3 + 2 + 40 = 45
        assert_eq!(
            calculate_damage(&stats, true, TypeMultiplier::NEUTRAL, false),
            45
        );
        assert_eq!(
            calculate_damage(&stats, false, TypeMultiplier::NEUTRAL, false),
            10
        );
    }

    #[test]
    fn critical_multiplies_by_one_and_a_half() {
        let stats = CombatStats::new(40, 5, 10);
        // 29.5 * 1.5 = 44.25
        assert_eq!(
            calculate_damage(&stats, false, TypeMultiplier::NEUTRAL, true),
            44
        );
        // 29.5 * 0.8 * 1.5 = 35.4
        assert_eq!(
            calculate_damage(&stats, false, TypeMultiplier::DISADVANTAGE, true),
            35
        );
    }

    #[test]
    fn zero_stats_still_deal_one() {
        let stats = CombatStats::default();
        assert_eq!(
            calculate_damage(&stats, false, TypeMultiplier::DISADVANTAGE, false),
            1
        );
        assert_eq!(
            calculate_damage(&stats, true, TypeMultiplier::NEUTRAL, false),
            1
        );
    }

    #[test]
    fn defending_mitigation() {
        assert_eq!(apply_defending(70), 42);
        assert_eq!(apply_defending(1), 1);
        assert_eq!(apply_defending(0), 0);
        assert_eq!(apply_damage(10, 42), 0);
    }

    proptest! {
        #[test]
        fn landed_hits_deal_at_least_one(
            strength in 0u32..1_000,
            agility in 0u32..1_000,
            intelligence in 0u32..1_000,
            is_special in any::<bool>(),
            is_critical in any::<bool>(),
            percent in prop::sample::select(vec![80u32, 100, 120]),
        ) {
            let stats = CombatStats::new(strength, agility, intelligence);
            let damage = calculate_damage(
                &stats,
                is_special,
                TypeMultiplier::from_percent(percent),
                is_critical,
            );
            prop_assert!(damage >= 1);
            prop_assert!(apply_defending(damage) >= 1);
            prop_assert!(apply_defending(damage) <= damage);
        }
    }
}
