use tracing::debug;

use crate::shared::AppError;

pub const DEFAULT_PREFIX: &str = ",";
pub const DEFAULT_STATUS: &str = "Deltanian cards";

/// Runtime configuration for the bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub prefix: String,
    /// Fixes the shuffles so every game can be replayed
    pub seed: Option<u64>,
    /// Presence text shown while the bot is online
    pub status: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            seed: None,
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

impl BotConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = lookup("DELTANIAN_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string());
        if prefix.trim().is_empty() {
            return Err(AppError::Config(
                "DELTANIAN_PREFIX cannot be empty".to_string(),
            ));
        }

        let seed = lookup("DELTANIAN_SEED")
            .map(|value| {
                value.trim().parse::<u64>().map_err(|_| {
                    AppError::Config(format!("DELTANIAN_SEED must be a u64, got {:?}", value))
                })
            })
            .transpose()?;

        let status = lookup("DELTANIAN_STATUS").unwrap_or_else(|| DEFAULT_STATUS.to_string());

        debug!(prefix = %prefix, seed = ?seed, status = %status, "Loaded bot configuration");

        Ok(Self {
            prefix,
            seed,
            status,
        })
    }
}
