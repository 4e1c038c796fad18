//! Wire records exchanged with the pet service and their validation.
//!
//! Enemy records are generated server-side and treated as untrusted: numbers
//! may arrive with any sign or magnitude, as floats or as numeric strings.
//! Out-of-range values are clamped and blank names or types fall back to
//! defaults (with a warning); only missing or non-numeric required fields
//! reject the record.

use std::str::FromStr;

use battle_core::{
    BattleConfig, BattleResult, CombatStats, Combatant, CombatantError, CombatantId, CreatureType,
};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Pet rarity tier as reported by the pet service.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

/// Display name given to enemies whose record carries a blank name.
pub const DEFAULT_ENEMY_NAME: &str = "Wild Pet";

/// Display name given to pets whose record carries a blank name.
pub const DEFAULT_PET_NAME: &str = "Pet";

/// A JSON number that may also arrive as a string.
///
/// Any other JSON value lands in `Other` so that the field is reported as
/// non-numeric instead of failing the whole response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireNumber {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl WireNumber {
    /// Integer value, truncating fractions and saturating at the `i64` range.
    /// Returns `None` for text that is not a number.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Float(value) => float_to_i64(*value),
            Self::Text(text) => {
                let text = text.trim();
                text.parse::<i64>()
                    .ok()
                    .or_else(|| text.parse::<f64>().ok().and_then(float_to_i64))
            }
            Self::Other(_) => None,
        }
    }
}

impl From<u32> for WireNumber {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

fn float_to_i64(value: f64) -> Option<i64> {
    // `as` saturates on overflow
    value.is_finite().then(|| value.trunc() as i64)
}

fn saturate_u32(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

/// Deserializes any [`WireNumber`] into a `u32`, saturating out-of-range values.
fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let number = WireNumber::deserialize(deserializer)?;
    number
        .as_i64()
        .map(saturate_u32)
        .ok_or_else(|| serde::de::Error::custom(format!("expected a number, got {number:?}")))
}

/// A pet owned by the user (`GET /pets`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(deserialize_with = "lenient_u32")]
    pub level: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub strength: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub agility: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub intelligence: u32,
}

impl PetRecord {
    pub fn creature(&self) -> CreatureType {
        CreatureType::from_name(&self.kind)
    }

    /// Parsed rarity, `None` when absent or not a known tier.
    pub fn rarity(&self) -> Option<Rarity> {
        self.rarity
            .as_deref()
            .and_then(|rarity| Rarity::from_str(rarity.trim()).ok())
    }

    /// Builds the player combatant, clamping level and stats into range.
    pub fn to_combatant(&self) -> Result<Combatant, CombatantError> {
        let id = non_blank("_id", &self.id)?;
        let name = display_name(&self.name, DEFAULT_PET_NAME);
        let creature = creature_or_unknown(name, &self.kind);

        let level = clamp_level(name, i64::from(self.level));
        let stats = CombatStats::new(
            clamp_stat(name, "strength", i64::from(self.strength)),
            clamp_stat(name, "agility", i64::from(self.agility)),
            clamp_stat(name, "intelligence", i64::from(self.intelligence)),
        );

        Ok(Combatant::new(
            CombatantId::Pet(id.to_string()),
            name,
            creature,
            level,
            stats,
        ))
    }

    /// Copy of this record with a battle result's level-up applied.
    ///
    /// Returns an unchanged copy when the pet did not level up. Stats are
    /// capped at [`BattleConfig::MAX_STAT`]. Persisting the copy is left to
    /// the caller.
    #[must_use]
    pub fn leveled(&self, result: &BattleResult) -> Self {
        let mut pet = self.clone();
        if let Some(next_level) = result.next_level {
            pet.level = next_level;
        }
        if let Some(gains) = result.stat_gains {
            let cap = BattleConfig::MAX_STAT;
            pet.strength = pet.strength.saturating_add(gains.strength).min(cap);
            pet.agility = pet.agility.saturating_add(gains.agility).min(cap);
            pet.intelligence = pet.intelligence.saturating_add(gains.intelligence).min(cap);
        }
        pet
    }
}

/// Enemy generated by the pet service for one battle.
///
/// Every field is optional on the wire so that a missing value can be
/// reported by name instead of failing the whole response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EnemyRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub level: Option<WireNumber>,
    #[serde(default)]
    pub strength: Option<WireNumber>,
    #[serde(default)]
    pub agility: Option<WireNumber>,
    #[serde(default)]
    pub intelligence: Option<WireNumber>,
}

impl EnemyRecord {
    /// Builds the enemy combatant under the given ephemeral id.
    pub fn to_combatant(&self, enemy_id: u64) -> Result<Combatant, CombatantError> {
        let name = display_name(required("name", self.name.as_deref())?, DEFAULT_ENEMY_NAME);
        let kind = required("type", self.kind.as_deref())?;
        let creature = creature_or_unknown(name, kind);

        let level = clamp_level(name, number("level", self.level.as_ref())?);
        let stats = CombatStats::new(
            clamp_stat(name, "strength", number("strength", self.strength.as_ref())?),
            clamp_stat(name, "agility", number("agility", self.agility.as_ref())?),
            clamp_stat(
                name,
                "intelligence",
                number("intelligence", self.intelligence.as_ref())?,
            ),
        );

        Ok(Combatant::new(
            CombatantId::Enemy(enemy_id),
            name,
            creature,
            level,
            stats,
        ))
    }
}

/// Response of `POST /pets/pve/{pet_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PveResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub enemy: EnemyRecord,
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, CombatantError> {
    value.ok_or(CombatantError::MissingField { field })
}

fn non_blank<'a>(field: &'static str, value: &'a str) -> Result<&'a str, CombatantError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CombatantError::BlankField { field });
    }
    Ok(value)
}

fn display_name<'a>(name: &'a str, default: &'static str) -> &'a str {
    let name = name.trim();
    if name.is_empty() {
        tracing::warn!(default, "blank combatant name, using default");
        return default;
    }
    name
}

fn number(field: &'static str, value: Option<&WireNumber>) -> Result<i64, CombatantError> {
    let value = value.ok_or(CombatantError::MissingField { field })?;
    value.as_i64().ok_or_else(|| CombatantError::InvalidNumber {
        field,
        value: format!("{value:?}"),
    })
}

fn creature_or_unknown(name: &str, kind: &str) -> CreatureType {
    let creature = CreatureType::from_name(kind);
    if !creature.is_known() {
        tracing::warn!(combatant = name, kind, "unknown creature type, treating as neutral");
    }
    creature
}

fn clamp_level(name: &str, level: i64) -> u32 {
    let clamped = level.clamp(1, i64::from(u32::MAX)) as u32;
    if i64::from(clamped) != level {
        tracing::warn!(combatant = name, level, clamped, "level out of range");
    }
    clamped
}

fn clamp_stat(name: &str, stat: &'static str, value: i64) -> u32 {
    let clamped = value.clamp(0, i64::from(BattleConfig::MAX_STAT)) as u32;
    if i64::from(clamped) != value {
        tracing::warn!(combatant = name, stat, value, clamped, "stat out of range");
    }
    clamped
}
