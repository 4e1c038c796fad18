//! Type advantage table.
//!
//! Static, read-only data: each entry lists the creature types an attacker is
//! strong against. Most pairs are neutral.

use super::creature::CreatureType;
use CreatureType::*;

/// Attacker type → types it is strong against.
const ADVANTAGES: &[(CreatureType, &[CreatureType])] = &[
    (Dragon, &[Dinosaur, Slime]),
    (Unicorn, &[Ghost, Demon]),
    (Phoenix, &[Treant, Yeti]),
    (Vampire, &[Angel, Fairy]),
    (Robot, &[Ghost, Zombie]),
];

/// Relationship between an attacker's type and a defender's type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeRelation {
    /// Attacker is strong against the defender.
    Advantage,
    /// Defender is strong against the attacker.
    Disadvantage,
    Neutral,
}

impl TypeRelation {
    /// Damage multiplier for this relation.
    pub const fn multiplier(&self) -> TypeMultiplier {
        match self {
            Self::Advantage => TypeMultiplier::ADVANTAGE,
            Self::Disadvantage => TypeMultiplier::DISADVANTAGE,
            Self::Neutral => TypeMultiplier::NEUTRAL,
        }
    }
}

/// Damage multiplier stored as a whole percentage (120 = ×1.2).
///
/// Kept in fixed point so damage and XP formulas stay exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeMultiplier(u32);

impl TypeMultiplier {
    pub const ADVANTAGE: Self = Self(120);
    pub const DISADVANTAGE: Self = Self(80);
    pub const NEUTRAL: Self = Self(100);

    pub const fn from_percent(percent: u32) -> Self {
        Self(percent)
    }

    pub const fn percent(&self) -> u32 {
        self.0
    }

    /// Applies the multiplier to an integer amount, rounding down and
    /// saturating at `u32::MAX`.
    pub const fn apply(&self, amount: u32) -> u32 {
        let scaled = (amount as u64 * self.0 as u64) / 100;
        if scaled > u32::MAX as u64 {
            u32::MAX
        } else {
            scaled as u32
        }
    }
}

impl Default for TypeMultiplier {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl core::fmt::Display for TypeMultiplier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "x{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Lookup façade over the static advantage table.
#[derive(Clone, Copy, Debug, Default)]
pub struct TypeAdvantageTable;

impl TypeAdvantageTable {
    /// Types `attacker` is strong against (empty for types without an entry).
    pub fn strong_against(attacker: CreatureType) -> &'static [CreatureType] {
        ADVANTAGES
            .iter()
            .find(|(kind, _)| *kind == attacker)
            .map(|(_, targets)| *targets)
            .unwrap_or(&[])
    }

    /// Returns true if `attacker` is listed as strong against `defender`.
    pub fn beats(attacker: CreatureType, defender: CreatureType) -> bool {
        Self::strong_against(attacker).contains(&defender)
    }

    pub fn relation(attacker: CreatureType, defender: CreatureType) -> TypeRelation {
        if attacker == defender {
            TypeRelation::Neutral
        } else if Self::beats(attacker, defender) {
            TypeRelation::Advantage
        } else if Self::beats(defender, attacker) {
            TypeRelation::Disadvantage
        } else {
            TypeRelation::Neutral
        }
    }

    pub fn multiplier_for(attacker: CreatureType, defender: CreatureType) -> TypeMultiplier {
        Self::relation(attacker, defender).multiplier()
    }
}

/// Damage multiplier for an attacker type hitting a defender type.
///
/// Returns ×1.2 when the attacker is strong against the defender, ×0.8 when
/// the relationship is reversed and ×1.0 otherwise.
pub fn multiplier_for(attacker: CreatureType, defender: CreatureType) -> TypeMultiplier {
    TypeAdvantageTable::multiplier_for(attacker, defender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use proptest::sample::select;
    use strum::IntoEnumIterator;

    fn any_creature() -> impl Strategy<Value = CreatureType> {
        select(CreatureType::iter().collect::<Vec<_>>())
    }

    #[test]
    fn dragon_beats_dinosaur() {
        assert_eq!(multiplier_for(Dragon, Dinosaur), TypeMultiplier::ADVANTAGE);
        assert_eq!(multiplier_for(Dinosaur, Dragon), TypeMultiplier::DISADVANTAGE);
        assert_eq!(
            TypeAdvantageTable::relation(Robot, Ghost),
            TypeRelation::Advantage
        );
    }

    #[test]
    fn unlisted_pairs_are_neutral() {
        assert_eq!(multiplier_for(Dog, Cat), TypeMultiplier::NEUTRAL);
        assert_eq!(multiplier_for(Unknown, Dragon), TypeMultiplier::NEUTRAL);
        assert!(TypeAdvantageTable::strong_against(Dog).is_empty());
    }

    #[test]
    fn multiplier_applies_in_fixed_point() {
        assert_eq!(TypeMultiplier::ADVANTAGE.apply(100), 120);
        assert_eq!(TypeMultiplier::DISADVANTAGE.apply(75), 60);
        assert_eq!(TypeMultiplier::ADVANTAGE.to_string(), "x1.20");
    }

    #[test]
    fn multiplier_saturates_instead_of_wrapping() {
        assert_eq!(TypeMultiplier::ADVANTAGE.apply(u32::MAX), u32::MAX);
        assert_eq!(TypeMultiplier::ADVANTAGE.apply(4_000_000_050), u32::MAX);
        assert_eq!(
            TypeMultiplier::DISADVANTAGE.apply(u32::MAX),
            3_435_973_836
        );
    }

    proptest! {
        #[test]
        fn advantage_is_antisymmetric(a in any_creature(), b in any_creature()) {
            let forward = multiplier_for(a, b);
            let backward = multiplier_for(b, a);
            if forward == TypeMultiplier::ADVANTAGE {
                prop_assert_eq!(backward, TypeMultiplier::DISADVANTAGE);
            }
            if forward == TypeMultiplier::NEUTRAL {
                prop_assert_eq!(backward, TypeMultiplier::NEUTRAL);
            }
        }

        #[test]
        fn same_type_is_neutral(a in any_creature()) {
            prop_assert_eq!(multiplier_for(a, a), TypeMultiplier::NEUTRAL);
        }
    }
}
