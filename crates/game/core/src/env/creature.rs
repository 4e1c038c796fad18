//! Creature roster.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Creature type of a pet or enemy.
///
/// Drives type advantage lookups. Names match the strings used by the pet
/// service; parsing is case-insensitive. Strings outside the roster map to
/// [`CreatureType::Unknown`], which is neutral against everything.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CreatureType {
    // Common animals
    Dog,
    Cat,
    Bird,
    Rabbit,
    Fox,
    Wolf,
    Turtle,
    Lizard,
    Tiger,
    Lion,
    Bear,
    Penguin,
    Frog,
    Dolphin,
    Shark,
    Octopus,
    Deer,
    Bat,
    Panda,
    Raccoon,
    Koala,
    Hedgehog,
    Chameleon,
    Squirrel,
    Snake,
    Crocodile,
    Horse,
    Elephant,
    Bee,
    Ant,
    Spider,
    Rat,
    Hamster,
    Giraffe,
    Zebra,
    Leopard,
    Cheetah,
    Eagle,
    Parrot,
    Seahorse,
    Crab,
    Moose,
    Goat,
    Ox,
    Jellyfish,

    // Mythical creatures
    Dragon,
    Unicorn,
    Phoenix,
    Griffin,
    Manticore,
    Basilisk,
    Chimera,
    Kraken,
    Yeti,
    Minotaur,
    Pegasus,
    Cerberus,
    Hydra,
    Golem,
    Fairy,
    Imp,

    // Supernatural beings
    Ghost,
    Vampire,
    Werewolf,
    Zombie,
    Skeleton,
    Demon,
    Angel,
    Alien,
    Robot,

    // Other
    Dinosaur,
    Treant,
    Slime,

    /// Placeholder for type names the roster does not know.
    Unknown,
}

impl CreatureType {
    /// Parses a service-provided type name, falling back to `Unknown`.
    pub fn from_name(name: &str) -> Self {
        name.trim().parse().unwrap_or(Self::Unknown)
    }

    /// Returns the canonical type name.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_service_names() {
        assert_eq!(CreatureType::from_name("Dragon"), CreatureType::Dragon);
        assert_eq!(CreatureType::from_name("dinosaur"), CreatureType::Dinosaur);
        assert_eq!(CreatureType::from_name("  Slime "), CreatureType::Slime);
    }

    #[test]
    fn unrecognized_names_are_unknown() {
        let parsed = CreatureType::from_name("Moth");
        assert_eq!(parsed, CreatureType::Unknown);
        assert!(!parsed.is_known());
    }

    #[test]
    fn display_round_trips_every_type() {
        for creature in CreatureType::iter() {
            assert_eq!(CreatureType::from_name(creature.as_str()), creature);
            assert_eq!(creature.to_string(), creature.as_str());
        }
    }
}
