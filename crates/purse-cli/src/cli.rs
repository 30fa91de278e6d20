//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use purse_core::aggregate::DEFAULT_CHART_LIMIT;

/// Purse - Rule-based personal finance assistant
#[derive(Parser)]
#[command(name = "purse")]
#[command(about = "Rule-based personal finance assistant", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Transactions CSV (columns: date, category, amount, optional description)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Start with no transactions when no file is given (instead of sample data)
    #[arg(long, global = true)]
    pub no_sample: bool,

    /// Config file path (defaults to ~/.local/share/purse/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Your name
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// User type: student, professional
    #[arg(long, global = true)]
    pub user_type: Option<String>,

    /// Your age (15-80)
    #[arg(long, global = true)]
    pub age: Option<u32>,

    /// Monthly income
    #[arg(long, global = true)]
    pub income: Option<u64>,

    /// Response complexity for chat answers: auto, simple, detailed
    #[arg(long, global = true)]
    pub complexity: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Budget summary for the most recent 30 days
    Budget {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Top spending categories with tips
    Insights,

    /// General tax guidance for your user type
    Tax,

    /// General investment tips
    Invest,

    /// Bar chart of the largest categories
    Chart {
        /// Number of categories to show
        #[arg(short, long, default_value_t = DEFAULT_CHART_LIMIT)]
        limit: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List loaded transactions
    Transactions,

    /// Ask a single question
    Ask {
        /// Question text (e.g., "what's my budget?")
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Interactive chat (type /help for commands)
    Chat,
}
