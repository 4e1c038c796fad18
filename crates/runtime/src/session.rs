//! Battle session orchestrator.
//!
//! A [`BattleSession`] owns everything for one battle: the player's pet
//! record, the fetched enemy, the [`BattleState`], the random source and,
//! once the battle resolves, the [`BattleResult`]. The enemy fetch in
//! [`BattleSession::start`] is the only I/O; stepping is synchronous.

use battle_core::{
    Action, BattleConfig, BattleResult, BattleState, LogEntry, Outcome, PcgRng, RandomSource,
    Roll, Side, TurnEngine, TurnSummary, compute_reward, multiplier_for, win_probability,
};
use tracing::{debug, info};

use crate::api::{PetService, Result, RuntimeError};
use crate::config::SessionConfig;
use crate::records::PetRecord;

/// What one call to [`BattleSession::step`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    pub player_turn: TurnSummary,
    /// `None` when the player's action ended the battle.
    pub enemy_turn: Option<TurnSummary>,
    /// Log entries appended by this step, in order.
    pub entries: Vec<LogEntry>,
    /// Battle state after the step.
    pub state: BattleState,
    /// Set once the battle is resolved.
    pub result: Option<BattleResult>,
}

impl StepReport {
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

/// One battle between a user's pet and a service-generated enemy.
pub struct BattleSession<R = PcgRng> {
    pet: PetRecord,
    config: BattleConfig,
    state: BattleState,
    rng: R,
    enemy_message: Option<String>,
    result: Option<BattleResult>,
}

impl BattleSession<PcgRng> {
    /// Starts a battle for `pet`, seeding the random source from the config
    /// or from `rand` when no seed is fixed.
    pub async fn start<S>(pet: &PetRecord, service: &S, config: &SessionConfig) -> Result<Self>
    where
        S: PetService + ?Sized,
    {
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        debug!(seed, "seeding battle random source");
        Self::start_with_rng(pet, service, config.battle.clone(), PcgRng::seeded(seed)).await
    }
}

impl<R: RandomSource> BattleSession<R> {
    /// Starts a battle with an explicit random source.
    ///
    /// Validates the pet record, requests an enemy (the single network call)
    /// and validates it. No session exists if any of these fail.
    pub async fn start_with_rng<S>(
        pet: &PetRecord,
        service: &S,
        config: BattleConfig,
        mut rng: R,
    ) -> Result<Self>
    where
        S: PetService + ?Sized,
    {
        let player = pet
            .to_combatant()
            .map_err(|source| RuntimeError::InvalidCombatant {
                side: Side::Player,
                source,
            })?;

        let response =
            service
                .request_enemy(&pet.id)
                .await
                .map_err(|source| RuntimeError::EnemyFetch {
                    pet_id: pet.id.clone(),
                    source,
                })?;

        let enemy_id = (u64::from(rng.next_u32(Roll::Identity)) << 32)
            | u64::from(rng.next_u32(Roll::Identity));
        let enemy = response
            .enemy
            .to_combatant(enemy_id)
            .map_err(|source| RuntimeError::InvalidCombatant {
                side: Side::Enemy,
                source,
            })?;

        info!(
            pet = %player.name,
            pet_level = player.level(),
            enemy = %enemy.name,
            enemy_kind = %enemy.creature,
            enemy_level = enemy.level(),
            "battle started"
        );

        let state = BattleState::new(player, enemy, &config);
        Ok(Self {
            pet: pet.clone(),
            config,
            state,
            rng,
            enemy_message: response.message,
            result: None,
        })
    }

    /// Runs one player action and, unless that ends the battle, the enemy's
    /// reply. Computes the reward when the battle resolves.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::SessionAlreadyResolved`] once the battle is over.
    pub fn step(&mut self, action: Action) -> Result<StepReport> {
        if let Some(result) = &self.result {
            return Err(RuntimeError::SessionAlreadyResolved {
                outcome: result.outcome,
            });
        }

        let log_start = self.state.log().len();
        let mut engine = TurnEngine::new(&mut self.state, &self.config);

        let player_turn = engine.submit_player_action(action, &mut self.rng)?;
        debug!(
            turn = player_turn.turn,
            action = player_turn.action.as_str(),
            "player acted"
        );

        let enemy_turn = if player_turn.outcome.is_terminal() {
            None
        } else {
            let summary = engine.run_enemy_turn(&mut self.rng)?;
            debug!(
                turn = summary.turn,
                action = summary.action.as_str(),
                "enemy acted"
            );
            Some(summary)
        };

        let outcome = self.state.outcome();
        if outcome.is_terminal() {
            self.resolve(outcome);
        }

        Ok(StepReport {
            player_turn,
            enemy_turn,
            entries: self.state.log().since(log_start).to_vec(),
            state: self.state.clone(),
            result: self.result,
        })
    }

    fn resolve(&mut self, outcome: Outcome) {
        let player = self.state.player();
        let enemy = self.state.enemy();
        let type_multiplier = multiplier_for(player.creature, enemy.creature);
        let result = compute_reward(outcome, player, enemy, type_multiplier, &mut self.rng);

        info!(
            outcome = outcome.as_str(),
            turns = self.state.turn_index(),
            xp = result.xp_gained,
            leveled_up = result.leveled_up,
            "battle resolved"
        );
        self.result = Some(result);
    }
}

impl<R> BattleSession<R> {
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn pet(&self) -> &PetRecord {
        &self.pet
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Flavor text the service sent with the enemy, if any.
    pub fn enemy_message(&self) -> Option<&str> {
        self.enemy_message.as_deref()
    }

    pub fn result(&self) -> Option<&BattleResult> {
        self.result.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.result.is_some()
    }

    /// Pre-battle win chance in whole percent.
    pub fn win_probability(&self) -> u32 {
        win_probability(&self.state.player().stats, &self.state.enemy().stats)
    }

    /// The pet record with the level-up applied, once the pet has leveled up.
    pub fn leveled_pet(&self) -> Option<PetRecord> {
        self.result
            .as_ref()
            .filter(|result| result.leveled_up)
            .map(|result| self.pet.leveled(result))
    }
}
