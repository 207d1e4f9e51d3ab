//! Application configuration
//!
//! Read from a TOML file, then adjusted by environment variables:
//!
//! ```toml
//! seed = 42
//!
//! [delays]
//! visual_ms = 1200
//! match_ms = 1000
//! sign_in_ms = 1000
//!
//! [scoring]
//! base_min = 55
//! base_max = 98
//! keyword_bonus = 3
//! max_score = 99
//!
//! [profile]
//! name = "Luna"
//! birth_date = "1994-04-16"
//! occupation = "Product Designer"
//! hobbies = ["Yoga", "Photography"]
//! ```

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::profile::UserProfile;
use crate::services::{DelayConfig, ScoringConfig, ServiceConfig};

/// Overrides the config file location
pub const CONFIG_PATH_ENV: &str = "WIYS_CONFIG";
/// Overrides the random seed
pub const SEED_ENV: &str = "WIYS_SEED";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fixed seed for reproducible scores and visuals
    pub seed: Option<u64>,
    pub delays: DelaySettings,
    pub scoring: ScoringConfig,
    /// The user's own profile; the sample profile is used when absent
    pub profile: Option<UserProfile>,
}

/// Simulated service latency in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelaySettings {
    pub visual_ms: u64,
    pub match_ms: u64,
    pub sign_in_ms: u64,
}

impl Default for DelaySettings {
    fn default() -> Self {
        let delays = DelayConfig::default();
        Self {
            visual_ms: delays.visual.as_millis() as u64,
            match_ms: delays.matching.as_millis() as u64,
            sign_in_ms: delays.sign_in.as_millis() as u64,
        }
    }
}

impl From<DelaySettings> for DelayConfig {
    fn from(settings: DelaySettings) -> Self {
        DelayConfig {
            visual: Duration::from_millis(settings.visual_ms),
            matching: Duration::from_millis(settings.match_ms),
            sign_in: Duration::from_millis(settings.sign_in_ms),
        }
    }
}

impl AppConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Service configuration derived from the file settings
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig::builder()
            .scoring_config(self.scoring)
            .delay_config(self.delays.into())
            .build()
    }

    /// Configured profile, validated, or the sample profile
    pub fn user_profile(&self) -> Result<UserProfile> {
        match &self.profile {
            Some(profile) => {
                profile
                    .validate()
                    .with_context(|| format!("Invalid [profile] in config: '{}'", profile.name))?;
                Ok(profile.clone())
            }
            None => Ok(UserProfile::sample()),
        }
    }

    /// Apply `WIYS_SEED` if set
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(raw) = std::env::var(SEED_ENV) {
            self.seed = Some(parse_seed(&raw)?);
            debug!("Seed overridden from {}", SEED_ENV);
        }
        Ok(())
    }
}

fn parse_seed(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("{} must be an unsigned integer, got '{}'", SEED_ENV, raw))
}

/// `$XDG_CONFIG_HOME/wiys/config.toml` or the platform equivalent
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wiys").join("config.toml"))
}

/// Load configuration
///
/// Path precedence: `explicit`, then `WIYS_CONFIG`, then the default path.
/// A missing file at an explicitly requested path is an error; a missing
/// default file yields the defaults.
pub fn load(explicit: Option<&Path>) -> Result<AppConfig> {
    let requested = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

    let mut config = match requested {
        Some(path) => read_config(&path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path)?,
            _ => {
                debug!("No config file found, using defaults");
                AppConfig::default()
            }
        },
    };

    config.apply_env_overrides()?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        anyhow::bail!("Config file does not exist: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    debug!("Loaded config from {}", path.display());

    AppConfig::from_toml_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}
