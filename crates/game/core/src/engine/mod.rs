//! Turn sequencing.
//!
//! The [`TurnEngine`] is the only code that mutates a [`BattleState`]. Every
//! combatant action is one turn: even turns belong to the player, odd turns
//! to the enemy. A battle resolves when a combatant faints or when the turn
//! cap is reached, in which case remaining health fractions decide.

mod errors;

pub use errors::StepError;

use crate::action::{Action, choose_enemy_action};
use crate::combat::{apply_defending, resolve_attack};
use crate::config::BattleConfig;
use crate::env::{RandomSource, multiplier_for};
use crate::state::{BattleEvent, BattleState, Outcome, Side, TurnPhase};

/// Summary of one executed turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnSummary {
    pub turn: u32,
    pub side: Side,
    pub action: Action,
    /// Battle outcome after the turn (`Ongoing` if the battle continues).
    pub outcome: Outcome,
}

/// Battle state machine driving a borrowed [`BattleState`].
pub struct TurnEngine<'a> {
    state: &'a mut BattleState,
    config: &'a BattleConfig,
}

impl<'a> TurnEngine<'a> {
    pub fn new(state: &'a mut BattleState, config: &'a BattleConfig) -> Self {
        Self { state, config }
    }

    /// Executes the player's action. Fails unless it is the player's turn.
    pub fn submit_player_action(
        &mut self,
        action: Action,
        rng: &mut impl RandomSource,
    ) -> Result<TurnSummary, StepError> {
        self.execute(Side::Player, action, rng)
    }

    /// Lets the enemy policy pick and execute the enemy's action.
    pub fn run_enemy_turn(&mut self, rng: &mut impl RandomSource) -> Result<TurnSummary, StepError> {
        self.ensure_turn(Side::Enemy)?;
        let action = choose_enemy_action(&self.state.enemy, rng);
        self.execute(Side::Enemy, action, rng)
    }

    /// Player action followed by the enemy's reply, unless the player's
    /// action already ended the battle.
    pub fn play_round(
        &mut self,
        action: Action,
        rng: &mut impl RandomSource,
    ) -> Result<Outcome, StepError> {
        let summary = self.submit_player_action(action, rng)?;
        if summary.outcome.is_terminal() {
            return Ok(summary.outcome);
        }
        Ok(self.run_enemy_turn(rng)?.outcome)
    }

    /// Executes `action` for `side` as one turn.
    pub fn execute(
        &mut self,
        side: Side,
        action: Action,
        rng: &mut impl RandomSource,
    ) -> Result<TurnSummary, StepError> {
        self.ensure_turn(side)?;

        let turn = self.state.turn_index;
        match action {
            Action::Attack => self.attack(side, false, rng),
            Action::SpecialAttack => self.attack(side, true, rng),
            Action::Defend => self.defend(side),
            Action::UseItem { heal } => self.use_item(side, heal),
        }
        self.state.turn_index += 1;

        let outcome = self.advance(side, turn);
        Ok(TurnSummary {
            turn,
            side,
            action,
            outcome,
        })
    }

    fn ensure_turn(&self, side: Side) -> Result<(), StepError> {
        match self.state.phase {
            TurnPhase::Resolved(outcome) => Err(StepError::already_resolved(outcome)),
            phase => match phase.acting_side() {
                Some(expected) if expected != side => Err(StepError::out_of_turn(expected, side)),
                _ => Ok(()),
            },
        }
    }

    fn attack(&mut self, side: Side, special: bool, rng: &mut impl RandomSource) {
        let turn = self.state.turn_index;
        let attacker = self.state.combatant(side);
        let defender = self.state.combatant(side.opponent());

        let type_multiplier = multiplier_for(attacker.creature, defender.creature);
        let outcome = resolve_attack(attacker, defender, special, type_multiplier, rng);
        let attacker_name = attacker.name.clone();

        let target = self.state.combatant_mut(side.opponent());
        let mitigated = target.defending && outcome.damage > 0;
        let damage = if target.defending {
            apply_defending(outcome.damage)
        } else {
            outcome.damage
        };
        // stance is spent by the attempt, even on a dodge
        target.defending = false;
        target.take_damage(damage);

        let event = BattleEvent::Attack {
            actor: side,
            attacker: attacker_name,
            defender: target.name.clone(),
            special,
            hit: outcome.kind(),
            damage,
            mitigated,
        };
        self.state.log.push(turn, event);
        self.log_health(side.opponent());
    }

    fn defend(&mut self, side: Side) {
        let turn = self.state.turn_index;
        let actor = self.state.combatant_mut(side);
        actor.defending = true;
        let name = actor.name.clone();

        self.state.log.push(turn, BattleEvent::Defend { actor: side, name });
        self.log_health(side);
    }

    fn use_item(&mut self, side: Side, heal: u32) {
        let turn = self.state.turn_index;
        let actor = self.state.combatant_mut(side);
        let name = actor.name.clone();

        if actor.items == 0 {
            self.state.log.push(turn, BattleEvent::NoItems { actor: side, name });
            return;
        }

        actor.items -= 1;
        let healed = actor.heal(heal);
        let remaining = actor.items;
        self.state.log.push(
            turn,
            BattleEvent::ItemUsed {
                actor: side,
                name,
                healed,
                remaining,
            },
        );
        self.log_health(side);
    }

    fn log_health(&mut self, side: Side) {
        let combatant = self.state.combatant(side);
        let event = BattleEvent::Health {
            side,
            name: combatant.name.clone(),
            current: combatant.current_health(),
            max: combatant.max_health(),
        };
        let turn = self.state.turn_index;
        self.state.log.push(turn, event);
    }

    /// Checks for termination after `actor`'s turn and moves to the next phase.
    fn advance(&mut self, actor: Side, turn: u32) -> Outcome {
        let defender = actor.opponent();
        if self.state.combatant(defender).is_fainted() {
            let name = self.state.combatant(defender).name.clone();
            self.state.log.push(
                turn,
                BattleEvent::Fainted {
                    side: defender,
                    name,
                },
            );
            return self.resolve(Outcome::winner(actor), turn);
        }

        if self.state.turn_index >= self.config.turn_limit {
            self.state.log.push(
                turn,
                BattleEvent::TurnLimitReached {
                    turns: self.state.turn_index,
                },
            );
            let outcome = Outcome::winner(self.healthier_side());
            return self.resolve(outcome, turn);
        }

        self.state.phase = match Side::for_turn(self.state.turn_index) {
            Side::Player => TurnPhase::PlayerTurn,
            Side::Enemy => TurnPhase::EnemyTurn,
        };
        Outcome::Ongoing
    }

    /// Side with the larger remaining health fraction; the player wins ties.
    fn healthier_side(&self) -> Side {
        let player = &self.state.player;
        let enemy = &self.state.enemy;
        let player_share = u64::from(player.current_health()) * u64::from(enemy.max_health());
        let enemy_share = u64::from(enemy.current_health()) * u64::from(player.max_health());
        if player_share >= enemy_share {
            Side::Player
        } else {
            Side::Enemy
        }
    }

    fn resolve(&mut self, outcome: Outcome, turn: u32) -> Outcome {
        let winner = match outcome {
            Outcome::PlayerLost => self.state.enemy.name.clone(),
            Outcome::PlayerWon | Outcome::Ongoing => self.state.player.name.clone(),
        };
        self.state
            .log
            .push(turn, BattleEvent::Resolved { outcome, winner });
        self.state.phase = TurnPhase::Resolved(outcome);
        outcome
    }
}
