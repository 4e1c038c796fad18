//! Runtime configuration loaded from the environment.
//!
//! Unset or unparseable variables fall back to defaults.

use std::env;
use std::time::Duration;

use battle_core::BattleConfig;

/// Pet service connection settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ServiceConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3000";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

    /// Environment variables:
    /// - `PET_API_URL` - Pet service base URL (default: http://localhost:3000)
    /// - `PET_API_TIMEOUT_SECS` - Request timeout in seconds (default: 15)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(base_url) = read_env::<String>("PET_API_URL") {
            let base_url = base_url.trim();
            if !base_url.is_empty() {
                config.base_url = base_url.to_string();
            }
        }
        if let Some(secs) = read_env::<u64>("PET_API_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(secs.max(1));
        }

        config
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}

/// Per-battle settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub battle: BattleConfig,

    /// Fixed seed for the battle random source. `None` draws a fresh seed for
    /// every session.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Environment variables:
    /// - `BATTLE_TURN_LIMIT` - Total actions before health decides (default: 10)
    /// - `BATTLE_STARTING_ITEMS` - Potions per battle (default: 3)
    /// - `BATTLE_POTION_HEAL` - Potion heal amount (default: 30)
    /// - `BATTLE_SEED` - Fixed random seed (default: random per session)
    pub fn from_env() -> Self {
        let mut battle = BattleConfig::default();

        if let Some(limit) = read_env::<u32>("BATTLE_TURN_LIMIT") {
            battle = battle.with_turn_limit(limit);
        }
        if let Some(items) = read_env::<u32>("BATTLE_STARTING_ITEMS") {
            battle = battle.with_starting_items(items);
        }
        if let Some(heal) = read_env::<u32>("BATTLE_POTION_HEAL") {
            battle = battle.with_potion_heal(heal);
        }

        Self {
            battle,
            seed: read_env::<u64>("BATTLE_SEED"),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Everything the runtime reads from the environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub service: ServiceConfig,
    pub session: SessionConfig,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig::from_env(),
            session: SessionConfig::from_env(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_contract() {
        let config = RuntimeConfig::default();
        assert_eq!(config.service.base_url, "http://localhost:3000");
        assert_eq!(config.service.timeout, Duration::from_secs(15));
        assert_eq!(config.session.battle.turn_limit, 10);
        assert_eq!(config.session.battle.starting_items, 3);
        assert_eq!(config.session.seed, None);
    }

    #[test]
    fn unset_variables_read_as_none() {
        assert_eq!(read_env::<u32>("BATTLE_RUNTIME_TEST_UNSET"), None);
        assert_eq!(SessionConfig::default().with_seed(7).seed, Some(7));
    }
}
