//! Purse CLI - Rule-based personal finance assistant
//!
//! Usage:
//!   purse budget                   Budget summary (sample data by default)
//!   purse --file tx.csv insights   Spending insights for your own CSV
//!   purse ask "how can I save?"    One-shot question
//!   purse chat                     Interactive chat

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    let overrides = commands::Overrides {
        name: cli.name.clone(),
        user_type: cli.user_type.clone(),
        age: cli.age,
        income: cli.income,
        complexity: cli.complexity.clone(),
        no_sample: cli.no_sample,
    };
    let mut session =
        commands::open_session(cli.file.as_deref(), cli.config.as_deref(), &overrides)?;

    match cli.command {
        Commands::Budget { json } => commands::cmd_budget(session.transactions(), json),
        Commands::Insights => commands::cmd_insights(session.transactions(), session.profile()),
        Commands::Tax => commands::cmd_tax(session.profile()),
        Commands::Invest => commands::cmd_invest(),
        Commands::Chart { limit, json } => {
            commands::cmd_chart(session.transactions(), limit, json)
        }
        Commands::Transactions => commands::cmd_transactions(session.transactions()),
        Commands::Ask { message } => commands::cmd_ask(&mut session, &message.join(" ")),
        Commands::Chat => commands::cmd_chat(&mut session),
    }
}
