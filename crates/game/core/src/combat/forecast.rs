//! Pre-battle forecast.

use crate::state::CombatStats;

/// Chance the player wins, in whole percent.
///
/// Compares total stat power: `round(100 * player / (player + enemy))`.
/// Returns 50 when neither side has any power.
pub fn win_probability(player: &CombatStats, enemy: &CombatStats) -> u32 {
    let player_power = player.power();
    let total = player_power + enemy.power();
    if total == 0 {
        return 50;
    }
    // round half up
    ((200 * player_power + total) / (2 * total)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_rounds() {
        let player = CombatStats::new(80, 10, 20);
        let enemy = CombatStats::new(40, 5, 10);
        // 110 / 165 = 66.67
        assert_eq!(win_probability(&player, &enemy), 67);
        assert_eq!(win_probability(&enemy, &player), 33);
    }

    #[test]
    fn forecast_edges() {
        let zero = CombatStats::default();
        let some = CombatStats::new(1, 0, 0);
        assert_eq!(win_probability(&zero, &zero), 50);
        assert_eq!(win_probability(&some, &zero), 100);
        assert_eq!(win_probability(&zero, &some), 0);
        assert_eq!(win_probability(&some, &some), 50);
    }
}
