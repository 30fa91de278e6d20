//! Budget summary over the most recent window

use serde::{Deserialize, Serialize};

use crate::aggregate::{
    date_span, group_sum_by_category, recent_window, sort_descending, total_saved, total_spent,
    CategoryTotal, DEFAULT_WINDOW_DAYS,
};
use crate::models::Transaction;

use super::format::format_currency;

/// Placeholder returned when there is nothing to summarize
pub const EMPTY_BUDGET_MESSAGE: &str = "No transactions to summarize.";

/// Number of expense categories listed in the summary
const TOP_CATEGORIES: usize = 5;

/// Flat reduction applied to projected monthly spend
const BUDGET_REDUCTION: f64 = 0.9;

/// Window date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub from: chrono::NaiveDate,
    pub to: chrono::NaiveDate,
}

/// Budget figures for the most recent 30-day window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub period: Period,
    /// Days between the first and last transaction in the window (at least 1)
    pub window_days: i64,
    pub total_spent: f64,
    pub total_saved: f64,
    /// Largest expense categories, descending
    pub top_categories: Vec<CategoryTotal>,
    pub avg_daily_spend: f64,
    pub suggested_monthly_budget: f64,
}

impl BudgetSummary {
    /// Compute the summary, or None when there are no transactions
    pub fn compute(transactions: &[Transaction]) -> Option<Self> {
        let window = recent_window(transactions, DEFAULT_WINDOW_DAYS);
        let (from, to) = date_span(window.iter().copied())?;
        let window_days = (to - from).num_days().max(1);

        let total_spent = total_spent(window.iter().copied());
        let total_saved = total_saved(window.iter().copied());

        let mut top_categories: Vec<CategoryTotal> = group_sum_by_category(window.iter().copied())
            .into_iter()
            .filter(|(_, amount)| *amount > 0.0)
            .map(|(category, amount)| CategoryTotal { category, amount })
            .collect();
        sort_descending(&mut top_categories);
        top_categories.truncate(TOP_CATEGORIES);

        let days = window_days as f64;
        Some(Self {
            period: Period { from, to },
            window_days,
            total_spent,
            total_saved,
            top_categories,
            avg_daily_spend: total_spent / days,
            suggested_monthly_budget: total_spent * 30.0 / days * BUDGET_REDUCTION,
        })
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("**Period:** {} → {}", self.period.from, self.period.to),
            format!("**Total Spending:** {}", format_currency(self.total_spent, 2)),
            format!(
                "**Total Savings/Investments:** {}",
                format_currency(self.total_saved, 2)
            ),
            "**Top Expense Categories:**".to_string(),
        ];
        for cat in &self.top_categories {
            lines.push(format!("- {}: {}", cat.category, format_currency(cat.amount, 2)));
        }
        lines.push(format!(
            "**Avg Daily Spend:** {}",
            format_currency(self.avg_daily_spend, 2)
        ));
        lines.push(format!(
            "**Suggested Monthly Budget:** {} (~10% reduction)",
            format_currency(self.suggested_monthly_budget, 0)
        ));
        lines.join("\n")
    }
}

/// Render the budget summary, or a placeholder for an empty set
pub fn summarize_budget(transactions: &[Transaction]) -> String {
    BudgetSummary::compute(transactions)
        .map(|summary| summary.render())
        .unwrap_or_else(|| EMPTY_BUDGET_MESSAGE.to_string())
}
