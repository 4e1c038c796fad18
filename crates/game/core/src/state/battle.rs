//! Battle state owned by one session.

use super::combatant::{Combatant, Side};
use super::log::{BattleEvent, BattleLog};
use crate::config::BattleConfig;

/// Result of a battle from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Ongoing,
    PlayerWon,
    PlayerLost,
}

impl Outcome {
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Ongoing)
    }

    /// Outcome when `side` is the one left standing.
    pub const fn winner(side: Side) -> Self {
        match side {
            Side::Player => Self::PlayerWon,
            Side::Enemy => Self::PlayerLost,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::PlayerWon => "player_won",
            Self::PlayerLost => "player_lost",
        }
    }
}

/// Turn engine state machine phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    PlayerTurn,
    EnemyTurn,
    /// Terminal phase. Always carries a terminal outcome.
    Resolved(Outcome),
}

impl TurnPhase {
    /// Side expected to act next, `None` once resolved.
    pub const fn acting_side(&self) -> Option<Side> {
        match self {
            Self::PlayerTurn => Some(Side::Player),
            Self::EnemyTurn => Some(Side::Enemy),
            Self::Resolved(_) => None,
        }
    }
}

/// Complete mutable state of one battle.
///
/// Attacker and defender are not stored: the side acting on a turn is the
/// attacker and its opponent the defender.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub(crate) player: Combatant,
    pub(crate) enemy: Combatant,
    pub(crate) phase: TurnPhase,
    pub(crate) turn_index: u32,
    pub(crate) log: BattleLog,
}

impl BattleState {
    /// Creates a fresh battle. Both combatants start at full health with no
    /// stance; the player receives the configured healing items.
    pub fn new(mut player: Combatant, mut enemy: Combatant, config: &BattleConfig) -> Self {
        player.restore();
        enemy.restore();
        player.items = config.starting_items;
        enemy.items = 0;

        let mut log = BattleLog::new();
        log.push(
            0,
            BattleEvent::BattleStarted {
                player: player.name.clone(),
                enemy: enemy.name.clone(),
                enemy_level: enemy.level(),
            },
        );

        Self {
            player,
            enemy,
            phase: TurnPhase::PlayerTurn,
            turn_index: 0,
            log,
        }
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub(crate) fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn turn_index(&self) -> u32 {
        self.turn_index
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// Healing items the player has left.
    pub fn items_remaining(&self) -> u32 {
        self.player.items
    }

    pub fn outcome(&self) -> Outcome {
        match self.phase {
            TurnPhase::Resolved(outcome) => outcome,
            TurnPhase::PlayerTurn | TurnPhase::EnemyTurn => Outcome::Ongoing,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.phase, TurnPhase::Resolved(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::CreatureType;
    use crate::state::{CombatStats, CombatantId};

    #[test]
    fn new_battle_starts_on_player_turn() {
        let player = Combatant::new(
            CombatantId::Pet("p".into()),
            "Ember",
            CreatureType::Dragon,
            5,
            CombatStats::new(80, 10, 20),
        )
        .with_health(3);
        let enemy = Combatant::new(
            CombatantId::Enemy(7),
            "Rex",
            CreatureType::Dinosaur,
            3,
            CombatStats::new(40, 5, 10),
        );

        let state = BattleState::new(player, enemy, &BattleConfig::default());

        assert_eq!(state.phase(), TurnPhase::PlayerTurn);
        assert_eq!(state.turn_index(), 0);
        assert_eq!(state.outcome(), Outcome::Ongoing);
        assert_eq!(state.player().current_health(), 125);
        assert_eq!(state.items_remaining(), BattleConfig::DEFAULT_STARTING_ITEMS);
        assert_eq!(state.enemy().items(), 0);
        assert_eq!(state.log().len(), 1);
    }
}
