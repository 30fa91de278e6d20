//! Purse Core Library
//!
//! Shared functionality for the Purse personal finance assistant:
//! - Transaction store (sample data, CSV import, manual entry)
//! - Aggregation over a recent window (totals, category grouping)
//! - Report generators (budget summary, spending insights, tax, investment)
//! - Keyword intent router for chat-style questions
//! - Tone formatter for profile-aware responses
//! - Session state owned by the caller
//! - Profile/session configuration with file overrides

pub mod aggregate;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod router;
pub mod session;
pub mod store;
pub mod tone;

pub use aggregate::{CategoryTotal, DEFAULT_WINDOW_DAYS};
pub use config::PurseConfig;
pub use error::{Error, Result};
pub use models::{Complexity, Message, Profile, Role, Transaction, UserType};
pub use reports::{BudgetSummary, SpendingInsights};
pub use router::Intent;
pub use session::Session;
pub use store::CsvImport;
