//! Spending insights: top categories with share of total and advisory tips

use serde::{Deserialize, Serialize};

use crate::aggregate::{category_totals, total_absolute};
use crate::models::{Profile, Transaction};

use super::format::format_currency;

/// Placeholder returned when there is nothing to analyze
pub const EMPTY_INSIGHTS_MESSAGE: &str = "No transactions to analyze.";

const TOP_CATEGORIES: usize = 3;

/// Category thresholds that trigger an advisory line, checked in order
const ADVISORIES: [(&str, f64, &str); 3] = [
    (
        "Subscriptions",
        500.0,
        "- Consider reviewing unused subscriptions.",
    ),
    ("Food", 2000.0, "- Set weekly limits for dining out."),
    ("Transport", 1000.0, "- Explore travel cards or carpooling."),
];

const STUDENT_TIP: &str = "- Build emergency buffer (₹2k–₹10k).";
const PROFESSIONAL_TIP: &str = "- Automate savings and tax-saving investments.";

/// A category's absolute total and its share of all activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    /// Percentage of total absolute amount, rounded to one decimal
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingInsights {
    pub top: Vec<CategoryShare>,
    pub advisories: Vec<String>,
    pub closing_tip: String,
}

impl SpendingInsights {
    /// Analyze the full transaction set, or None when it is empty
    pub fn compute(transactions: &[Transaction], profile: &Profile) -> Option<Self> {
        if transactions.is_empty() {
            return None;
        }

        let ranked = category_totals(transactions, usize::MAX);
        let total = total_absolute(transactions);

        let top = ranked
            .iter()
            .take(TOP_CATEGORIES)
            .map(|cat| CategoryShare {
                category: cat.category.clone(),
                amount: cat.amount,
                percentage: share_of(cat.amount, total),
            })
            .collect();

        let advisories = ADVISORIES
            .iter()
            .filter(|(category, threshold, _)| {
                ranked
                    .iter()
                    .any(|c| c.category == *category && c.amount > *threshold)
            })
            .map(|(_, _, line)| line.to_string())
            .collect();

        let closing_tip = if profile.is_student() {
            STUDENT_TIP
        } else {
            PROFESSIONAL_TIP
        };

        Some(Self {
            top,
            advisories,
            closing_tip: closing_tip.to_string(),
        })
    }

    pub fn render(&self) -> String {
        let mut lines = vec!["**Top Spending Categories:**".to_string()];
        for (i, share) in self.top.iter().enumerate() {
            lines.push(format!(
                "{}. {} — {} (~{:.1}%)",
                i + 1,
                share.category,
                format_currency(share.amount, 0),
                share.percentage
            ));
        }
        lines.extend(self.advisories.iter().cloned());
        lines.push(self.closing_tip.clone());
        lines.join("\n")
    }
}

fn share_of(amount: f64, total: f64) -> f64 {
    if total > 0.0 {
        (amount / total * 1000.0).round() / 10.0
    } else {
        0.0
    }
}

/// Render spending insights, or a placeholder for an empty set
pub fn generate_spending_insights(transactions: &[Transaction], profile: &Profile) -> String {
    SpendingInsights::compute(transactions, profile)
        .map(|insights| insights.render())
        .unwrap_or_else(|| EMPTY_INSIGHTS_MESSAGE.to_string())
}
