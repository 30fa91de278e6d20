//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `setup` - Config/override resolution and session setup
//! - `reports` - Report commands (budget, insights, tax, invest, chart, transactions)
//! - `chat` - One-shot `ask` and the interactive chat loop

pub mod chat;
pub mod reports;
pub mod setup;

// Re-export command functions for main.rs
pub use chat::*;
pub use reports::*;
pub use setup::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
