//! Pet battle demo client.
//!
//! Composition root: loads `.env`, sets up logging, lists the user's pets
//! from the pet service and fights one battle with a simple auto-pilot.
//!
//! ```bash
//! PET_API_URL=http://localhost:3000 BATTLE_PET_ID=64f1 cargo run -p battle-client
//! ```
mod autopilot;

use anyhow::{Context, Result, bail};
use battle_core::{BattleResult, TypeAdvantageTable, TypeRelation};
use battle_runtime::{BattleSession, HttpPetService, PetRecord, PetService, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RuntimeConfig::from_env();
    tracing::info!("Pet service: {}", config.service.base_url);

    let service = HttpPetService::new(&config.service)?;
    let pets = service.list_pets().await.context("failed to list pets")?;
    let pet = pick_pet(pets, std::env::var("BATTLE_PET_ID").ok().as_deref())?;

    println!(
        "{} the {} (Lv. {}{})",
        pet.name,
        pet.kind,
        pet.level,
        pet.rarity()
            .map(|rarity| format!(", {rarity}"))
            .unwrap_or_default()
    );

    let mut session = BattleSession::start(&pet, &service, &config.session).await?;
    if let Some(message) = session.enemy_message() {
        println!("{message}");
    }
    for entry in session.state().log().iter() {
        println!("{entry}");
    }
    println!("Win chance: {}%", session.win_probability());

    while !session.is_resolved() {
        let action = autopilot::choose(session.state(), session.config());
        tracing::debug!("auto-pilot chose {}", action.as_str());
        let report = session.step(action)?;
        for message in report.messages() {
            println!("{message}");
        }
    }

    if let Some(result) = session.result() {
        print_result(&session, result);
    }
    Ok(())
}

/// The pet named by `BATTLE_PET_ID`, or the first one.
fn pick_pet(pets: Vec<PetRecord>, wanted: Option<&str>) -> Result<PetRecord> {
    match wanted {
        Some(id) => pets
            .into_iter()
            .find(|pet| pet.id == id)
            .with_context(|| format!("no pet with id {id}")),
        None => match pets.into_iter().next() {
            Some(pet) => Ok(pet),
            None => bail!("the pet service returned no pets"),
        },
    }
}

fn print_result<R>(session: &BattleSession<R>, result: &BattleResult) {
    let state = session.state();
    let player = state.player();
    let enemy = state.enemy();

    println!();
    if result.is_victory() {
        println!("Victory! {} gained {} XP.", player.name, result.xp_gained);
    } else {
        println!("Defeat. {} gained no XP.", player.name);
    }

    match TypeAdvantageTable::relation(player.creature, enemy.creature) {
        TypeRelation::Advantage => println!(
            "Type Advantage: {} is strong against {} ({})",
            player.creature, enemy.creature, result.type_multiplier
        ),
        TypeRelation::Disadvantage => println!(
            "Type Disadvantage: {} is weak against {} ({})",
            player.creature, enemy.creature, result.type_multiplier
        ),
        TypeRelation::Neutral => {}
    }

    if let (Some(pet), Some(gains)) = (session.leveled_pet(), result.stat_gains) {
        println!("{} leveled up to Level {}!", pet.name, pet.level);
        println!(
            "Strength +{}, Agility +{}, Intelligence +{}",
            gains.strength, gains.agility, gains.intelligence
        );
    }

    tracing::debug!(
        "battle ended after {} of {} turns",
        state.turn_index(),
        session.config().turn_limit
    );
}
