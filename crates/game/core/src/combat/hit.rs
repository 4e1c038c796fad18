//! Critical and dodge rolls.

use crate::config::BattleConfig;
use crate::env::{RandomSource, Roll};

/// Rolls for a critical hit with probability `agility / 100`.
///
/// Agility of 100 or more always crits; agility 0 never does.
pub fn check_critical(attacker_agility: u32, rng: &mut impl RandomSource) -> bool {
    rng.chance(
        Roll::Critical,
        attacker_agility,
        BattleConfig::CRIT_AGILITY_DIVISOR,
    )
}

/// Rolls for a dodge with probability `agility / 150`.
pub fn check_dodge(defender_agility: u32, rng: &mut impl RandomSource) -> bool {
    rng.chance(
        Roll::Dodge,
        defender_agility,
        BattleConfig::DODGE_AGILITY_DIVISOR,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn zero_agility_never_crits() {
        let mut rng = PcgRng::seeded(99);
        assert!((0..1_000).all(|_| !check_critical(0, &mut rng)));
    }

    #[test]
    fn agility_150_always_dodges() {
        let mut rng = PcgRng::seeded(3);
        assert!((0..1_000).all(|_| check_dodge(150, &mut rng)));
    }

    #[test]
    fn dodge_rate_tracks_agility() {
        let mut rng = PcgRng::seeded(11);
        let dodges = (0..10_000).filter(|_| check_dodge(75, &mut rng)).count();
        // expected 5000
        assert!((4_500..5_500).contains(&dodges), "dodges = {dodges}");
    }
}
