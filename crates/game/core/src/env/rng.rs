//! Random source abstraction for battle rolls.
//!
//! Every random decision in a battle (critical hits, dodges, the enemy's
//! choice of action, stat gains on level-up, the enemy's ephemeral id) is
//! drawn through
//! [`RandomSource`] and tagged with the [`Roll`] it serves. Tests inject
//! [`FixedRolls`] to force specific outcomes; production code uses the
//! seedable [`PcgRng`].
//!
//! # Draw convention
//!
//! A draw is a `u32` interpreted as the fraction `draw / 2^32` in `[0, 1)`.
//! A draw of `0` therefore passes every chance with non-zero probability and
//! `u32::MAX` fails every chance below 100%.

/// Purpose of a single draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Roll {
    Critical,
    Dodge,
    EnemyIntent,
    StatGain,
    /// Ephemeral id for a freshly generated enemy.
    Identity,
}

/// Source of randomness for battle mechanics.
pub trait RandomSource {
    /// Draws the next raw value for the given roll.
    fn next_u32(&mut self, roll: Roll) -> u32;

    /// Returns true with probability `numerator / denominator`.
    ///
    /// Always consumes exactly one draw so the stream stays aligned whether or
    /// not the outcome was certain. Probabilities at or above one always pass;
    /// a zero numerator or denominator never passes.
    fn chance(&mut self, roll: Roll, numerator: u32, denominator: u32) -> bool {
        let draw = u64::from(self.next_u32(roll));
        if denominator == 0 {
            return false;
        }
        draw * u64::from(denominator) < u64::from(numerator) << 32
    }

    /// Draws a percentile in `0..100`.
    fn percentile(&mut self, roll: Roll) -> u32 {
        scale(self.next_u32(roll), 100)
    }

    /// Draws a value in `[min, max]` inclusive.
    fn range(&mut self, roll: Roll, min: u32, max: u32) -> u32 {
        let draw = self.next_u32(roll);
        if min >= max {
            return min;
        }
        min + scale(draw, max - min + 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self, roll: Roll) -> u32 {
        (**self).next_u32(roll)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u32(&mut self, roll: Roll) -> u32 {
        (**self).next_u32(roll)
    }
}

/// Maps a draw onto `0..span` using the high bits.
#[inline]
fn scale(draw: u32, span: u32) -> u32 {
    ((u64::from(draw) * u64::from(span)) >> 32) as u32
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 64-bit LCG state, 32-bit output through a xorshift
/// and a state-dependent rotation.
///
/// # Properties
///
/// - **Deterministic**: same seed always produces the same stream
/// - **Fast**: single multiply + xorshift + rotate
/// - **Small state**: only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a battle seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: mix_seed(seed),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRng {
    fn next_u32(&mut self, _roll: Roll) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// Spreads a user-provided seed over all 64 bits.
///
/// Small consecutive seeds (0, 1, 2, ...) would otherwise start the LCG in
/// nearly identical states.
pub fn mix_seed(seed: u64) -> u64 {
    // SplitMix64 finalizer
    let mut hash = seed.wrapping_add(0x9e3779b97f4a7c15);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;
    hash
}

/// Random source answering each roll kind with a fixed draw.
///
/// Used to force outcomes: [`FixedRolls::never`] yields no crits, no dodges,
/// an attacking enemy and minimum stat gains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedRolls {
    critical: u32,
    dodge: u32,
    enemy_intent: u32,
    stat_gain: u32,
}

impl FixedRolls {
    /// Draw that passes every chance with non-zero probability.
    pub const ALWAYS: u32 = 0;
    /// Draw that fails every chance below 100%.
    pub const NEVER: u32 = u32::MAX;

    pub const fn never() -> Self {
        Self {
            critical: Self::NEVER,
            dodge: Self::NEVER,
            enemy_intent: 0,
            stat_gain: 0,
        }
    }

    #[must_use]
    pub const fn with_critical(mut self, always: bool) -> Self {
        self.critical = if always { Self::ALWAYS } else { Self::NEVER };
        self
    }

    #[must_use]
    pub const fn with_dodge(mut self, always: bool) -> Self {
        self.dodge = if always { Self::ALWAYS } else { Self::NEVER };
        self
    }

    /// Makes every enemy intent roll land on the given percentile (0..100).
    #[must_use]
    pub const fn with_enemy_percentile(mut self, percentile: u32) -> Self {
        self.enemy_intent = percentile_draw(percentile);
        self
    }

    /// Sets the raw draw for stat gains (`0` = minimum, `u32::MAX` = maximum).
    #[must_use]
    pub const fn with_stat_gain_draw(mut self, draw: u32) -> Self {
        self.stat_gain = draw;
        self
    }
}

impl Default for FixedRolls {
    fn default() -> Self {
        Self::never()
    }
}

impl RandomSource for FixedRolls {
    fn next_u32(&mut self, roll: Roll) -> u32 {
        match roll {
            Roll::Critical => self.critical,
            Roll::Dodge => self.dodge,
            Roll::EnemyIntent => self.enemy_intent,
            Roll::StatGain => self.stat_gain,
            Roll::Identity => 0,
        }
    }
}

/// Smallest draw that scales onto `percentile`.
const fn percentile_draw(percentile: u32) -> u32 {
    let percentile = if percentile > 99 { 99 } else { percentile };
    (((percentile as u64) << 32).div_ceil(100)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let mut a = PcgRng::seeded(42);
        let mut b = PcgRng::seeded(42);
        for _ in 0..32 {
            assert_eq!(a.next_u32(Roll::Critical), b.next_u32(Roll::Critical));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = PcgRng::seeded(1);
        let mut b = PcgRng::seeded(2);
        let left: Vec<u32> = (0..8).map(|_| a.next_u32(Roll::Dodge)).collect();
        let right: Vec<u32> = (0..8).map(|_| b.next_u32(Roll::Dodge)).collect();
        assert_ne!(left, right);
    }

    #[test]
    fn chance_bounds() {
        let mut always = FixedRolls::never().with_critical(true);
        assert!(always.chance(Roll::Critical, 1, 100));
        assert!(!always.chance(Roll::Critical, 0, 100));

        let mut never = FixedRolls::never();
        assert!(!never.chance(Roll::Critical, 99, 100));
        assert!(never.chance(Roll::Critical, 100, 100));
        assert!(never.chance(Roll::Dodge, 150, 150));
        assert!(!never.chance(Roll::Dodge, 5, 0));
    }

    #[test]
    fn percentile_draws_land_on_target() {
        for target in [0, 1, 69, 70, 75, 89, 90, 99] {
            let mut rolls = FixedRolls::never().with_enemy_percentile(target);
            assert_eq!(rolls.percentile(Roll::EnemyIntent), target);
        }
    }

    #[test]
    fn range_is_inclusive() {
        let mut low = FixedRolls::never().with_stat_gain_draw(0);
        let mut high = FixedRolls::never().with_stat_gain_draw(u32::MAX);
        assert_eq!(low.range(Roll::StatGain, 1, 3), 1);
        assert_eq!(high.range(Roll::StatGain, 1, 3), 3);
        assert_eq!(high.range(Roll::StatGain, 4, 4), 4);

        let mut rng = PcgRng::seeded(7);
        for _ in 0..1_000 {
            let value = rng.range(Roll::StatGain, 1, 2);
            assert!((1..=2).contains(&value));
        }
    }
}
