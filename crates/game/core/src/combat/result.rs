//! Attack resolution and its result types.

use crate::env::{RandomSource, TypeMultiplier};
use crate::state::Combatant;

use super::damage::calculate_damage;
use super::hit::{check_critical, check_dodge};

/// Classification of a resolved attack, used to pick log messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitKind {
    Dodged,
    Critical,
    Normal,
}

/// Result of one attacker → defender exchange, before stance mitigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub damage: u32,
    pub is_critical: bool,
    pub is_dodged: bool,
}

impl AttackOutcome {
    pub const fn dodged() -> Self {
        Self {
            damage: 0,
            is_critical: false,
            is_dodged: true,
        }
    }

    pub const fn kind(&self) -> HitKind {
        if self.is_dodged {
            HitKind::Dodged
        } else if self.is_critical {
            HitKind::Critical
        } else {
            HitKind::Normal
        }
    }
}

/// Resolve a complete attack: dodge roll, crit roll, damage.
///
/// Both rolls are always drawn (dodge first) so a seeded stream advances the
/// same way regardless of the outcome. A dodge overrides the crit roll.
pub fn resolve_attack(
    attacker: &Combatant,
    defender: &Combatant,
    is_special: bool,
    type_multiplier: TypeMultiplier,
    rng: &mut impl RandomSource,
) -> AttackOutcome {
    let dodged = check_dodge(defender.stats.agility, rng);
    let critical = check_critical(attacker.stats.agility, rng);

    if dodged {
        return AttackOutcome::dodged();
    }

    AttackOutcome {
        damage: calculate_damage(&attacker.stats, is_special, type_multiplier, critical),
        is_critical: critical,
        is_dodged: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CreatureType, FixedRolls, PcgRng, multiplier_for};
    use crate::state::{CombatStats, CombatantId};

    fn combatant(creature: CreatureType, level: u32, stats: CombatStats) -> Combatant {
        Combatant::new(CombatantId::Enemy(1), creature.as_str(), creature, level, stats)
    }

    #[test]
    fn dragon_hits_dinosaur_for_seventy() {
        let dragon = combatant(CreatureType::Dragon, 5, CombatStats::new(80, 10, 20));
        let dino = combatant(CreatureType::Dinosaur, 3, CombatStats::new(40, 5, 10));
        let mut rolls = FixedRolls::never();

        let outcome = resolve_attack(
            &dragon,
            &dino,
            false,
            multiplier_for(dragon.creature, dino.creature),
            &mut rolls,
        );

        assert_eq!(outcome.damage, 70);
        assert_eq!(outcome.kind(), HitKind::Normal);
    }

    #[test]
    fn dodge_overrides_critical() {
        let attacker = combatant(CreatureType::Cat, 1, CombatStats::new(50, 100, 0));
        let defender = combatant(CreatureType::Dog, 1, CombatStats::new(50, 10, 0));
        let mut rolls = FixedRolls::never().with_critical(true).with_dodge(true);

        let outcome = resolve_attack(
            &attacker,
            &defender,
            false,
            TypeMultiplier::NEUTRAL,
            &mut rolls,
        );

        assert_eq!(outcome, AttackOutcome::dodged());
        assert_eq!(outcome.kind(), HitKind::Dodged);
    }

    #[test]
    fn high_agility_defender_always_dodges() {
        let attacker = combatant(CreatureType::Wolf, 10, CombatStats::new(100, 100, 100));
        let defender = combatant(CreatureType::Bat, 1, CombatStats::new(0, 150, 0));
        let mut rng = PcgRng::seeded(5);

        for _ in 0..500 {
            let outcome = resolve_attack(
                &attacker,
                &defender,
                false,
                TypeMultiplier::NEUTRAL,
                &mut rng,
            );
            assert!(outcome.is_dodged);
            assert_eq!(outcome.damage, 0);
            assert!(!outcome.is_critical);
        }
    }

    #[test]
    fn zero_agility_attacker_never_crits() {
        let attacker = combatant(CreatureType::Turtle, 1, CombatStats::new(60, 0, 0));
        let defender = combatant(CreatureType::Frog, 1, CombatStats::new(10, 0, 0));
        let mut rng = PcgRng::seeded(8);

        for _ in 0..500 {
            let outcome =
                resolve_attack(&attacker, &defender, true, TypeMultiplier::NEUTRAL, &mut rng);
            assert!(!outcome.is_critical);
            assert!(!outcome.is_dodged);
            assert!(outcome.damage >= 1);
        }
    }
}
