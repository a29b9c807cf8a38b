use figment::{providers::Env, Figment};
use serde::Deserialize;

use crate::error::ConfigError;

/// Prefix shared by every environment variable the binary reads.
pub const ENV_PREFIX: &str = "HEARTCHASE_";

/// Runtime options for the headless driver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed for the game's random source; seeded from the OS when absent.
    pub seed: Option<u64>,
    /// Stop after this many ticks even if nobody quit.
    pub max_ticks: Option<u64>,
    /// How many finished sessions the autopilot restarts before quitting.
    pub restarts: u32,
    /// Pace the loop at the fixed tick rate instead of running flat out.
    pub realtime: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            max_ticks: None,
            restarts: 1,
            realtime: true,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::new().merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads the configuration from `HEARTCHASE_*` environment variables.
    pub fn load() -> Result<Config, ConfigError> {
        Ok(Self::figment().extract()?)
    }
}
