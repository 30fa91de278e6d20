//! Shared setup for every command
//!
//! This module contains:
//! - `resolve_config` - Merge the config file with command-line overrides
//! - `open_transactions` - Resolve the starting transaction set
//! - `open_session` - Build the session handed to report and chat commands

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use purse_core::{
    models::{Complexity, Profile, Transaction, UserType},
    store::load_transactions,
    PurseConfig, Session,
};

/// Command-line values that take precedence over the config file
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub name: Option<String>,
    pub user_type: Option<String>,
    pub age: Option<u32>,
    pub income: Option<u64>,
    pub complexity: Option<String>,
    pub no_sample: bool,
}

/// Load config and apply overrides
pub fn resolve_config(config_path: Option<&Path>, overrides: &Overrides) -> Result<PurseConfig> {
    let mut config = PurseConfig::load(config_path).context("Failed to load config")?;

    let current = config.profile.clone();
    let user_type: UserType = match overrides.user_type.as_deref() {
        Some(s) => s.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        None => current.user_type,
    };
    // A changed user type brings its own default age unless one is given
    // on the command line or in the config file
    let age = overrides
        .age
        .unwrap_or(if user_type == current.user_type || config.explicit_age {
            current.age
        } else {
            user_type.default_age()
        });

    config.profile = Profile::new(
        overrides.name.clone().unwrap_or_else(|| current.name.clone()),
        user_type,
        age,
        overrides.income.unwrap_or(current.monthly_income),
    )
    .context("Invalid profile")?;

    if let Some(complexity) = overrides.complexity.as_deref() {
        config.complexity = complexity
            .parse::<Complexity>()
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    if overrides.no_sample {
        config.use_sample = false;
    }

    Ok(config)
}

/// Load transactions from a CSV, or fall back to sample/empty when none is given
pub fn open_transactions(file: Option<&Path>, use_sample: bool) -> Result<Vec<Transaction>> {
    let upload = file
        .map(|path| {
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))
        })
        .transpose()?;

    let transactions = load_transactions(upload, use_sample).with_context(|| match file {
        Some(path) => format!("Failed to import {}", path.display()),
        None => "Failed to load transactions".to_string(),
    })?;

    tracing::debug!(count = transactions.len(), "Loaded transactions");
    Ok(transactions)
}

/// Build a session from config, overrides and the transaction source
pub fn open_session(
    file: Option<&Path>,
    config_path: Option<&Path>,
    overrides: &Overrides,
) -> Result<Session> {
    let config = resolve_config(config_path, overrides)?;
    let transactions = open_transactions(file, config.use_sample)?;
    Ok(Session::new(config.profile, config.complexity, transactions))
}
