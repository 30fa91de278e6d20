//! Report generators
//!
//! Every generator is a pure function from a transaction snapshot (and, where
//! relevant, the user's profile) to formatted text. Empty input never fails;
//! it produces a fixed placeholder message instead.
//!
//! ## Reports
//!
//! - **Budget Summary** - totals and a projected budget over the last 30 days
//! - **Spending Insights** - top categories with advisory tips
//! - **Tax Guidance** - static text by user type
//! - **Investment Tips** - static text

pub mod budget;
pub mod format;
pub mod guidance;
pub mod spending;

pub use budget::{summarize_budget, BudgetSummary, Period, EMPTY_BUDGET_MESSAGE};
pub use format::{format_currency, group_thousands, CURRENCY_SYMBOL};
pub use guidance::{generate_tax_guidance, investment_tips, HELP_MESSAGE};
pub use spending::{
    generate_spending_insights, CategoryShare, SpendingInsights, EMPTY_INSIGHTS_MESSAGE,
};
