//! Profile and session configuration
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/purse/config.toml)
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Complexity, Profile, UserType};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/purse.toml");

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PurseConfig {
    pub profile: Profile,
    /// The config file set `profile.age` rather than taking the user type's default
    pub explicit_age: bool,
    pub complexity: Complexity,
    /// Use the sample transactions when no CSV is supplied
    pub use_sample: bool,
}

impl Default for PurseConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            explicit_age: false,
            complexity: Complexity::Auto,
            use_sample: true,
        }
    }
}

impl PurseConfig {
    /// Load from an explicit path, the data-dir override, or the embedded default
    ///
    /// An explicit path must exist; the data-dir override is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let content = match explicit {
            Some(path) => read_config(path)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => read_config(&path)?,
                None => {
                    debug!("Using embedded default config");
                    DEFAULT_CONFIG.to_string()
                }
            },
        };

        parse_config(&content)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("purse").join("config.toml"))
}

fn read_config(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "Loading config");
    fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    profile: Option<RawProfile>,
    session: Option<RawSession>,
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    name: Option<String>,
    user_type: Option<String>,
    age: Option<u32>,
    monthly_income: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawSession {
    complexity: Option<String>,
    use_sample: Option<bool>,
}

/// Parse config from TOML content
pub fn parse_config(content: &str) -> Result<PurseConfig> {
    let raw: RawConfig =
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = PurseConfig::default();

    if let Some(profile) = raw.profile {
        let defaults = Profile::default();
        let user_type: UserType = match profile.user_type {
            Some(s) => s.parse().map_err(Error::Config)?,
            None => defaults.user_type,
        };
        config.explicit_age = profile.age.is_some();
        config.profile = Profile::new(
            profile.name.unwrap_or(defaults.name),
            user_type,
            profile.age.unwrap_or_else(|| user_type.default_age()),
            profile.monthly_income.unwrap_or(defaults.monthly_income),
        )
        .map_err(|e| Error::Config(e.to_string()))?;
    }

    if let Some(session) = raw.session {
        if let Some(complexity) = session.complexity {
            config.complexity = complexity.parse().map_err(Error::Config)?;
        }
        if let Some(use_sample) = session.use_sample {
            config.use_sample = use_sample;
        }
    }

    Ok(config)
}
