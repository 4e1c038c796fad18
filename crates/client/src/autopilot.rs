//! Action policy for the demo client.

use battle_core::{Action, BattleConfig, BattleState};

/// Heals below 40% health while potions last, otherwise attacks with the
/// pet's stronger stat.
pub fn choose(state: &BattleState, config: &BattleConfig) -> Action {
    let pet = state.player();
    if pet.health_below_percent(40) && state.items_remaining() > 0 {
        return Action::potion(config);
    }
    if pet.stats.intelligence > pet.stats.strength {
        Action::SpecialAttack
    } else {
        Action::Attack
    }
}
