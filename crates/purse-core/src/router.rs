//! Keyword intent router for chat-style questions
//!
//! Routing is an ordered list of substring rules over the lower-cased input.
//! The first rule with a matching keyword wins, so "budget and spend" is a
//! budget question. Anything unmatched gets the help message.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Profile, Transaction};
use crate::reports::{
    generate_spending_insights, generate_tax_guidance, investment_tips, summarize_budget,
    HELP_MESSAGE,
};

/// Report selected for a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    BudgetSummary,
    SpendingInsights,
    TaxGuidance,
    InvestmentTips,
    /// No rule matched
    Help,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BudgetSummary => "budget_summary",
            Self::SpendingInsights => "spending_insights",
            Self::TaxGuidance => "tax_guidance",
            Self::InvestmentTips => "investment_tips",
            Self::Help => "help",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Routing rules in precedence order
pub const RULES: &[(Intent, &[&str])] = &[
    (Intent::BudgetSummary, &["budget"]),
    (Intent::SpendingInsights, &["spend", "insights", "save"]),
    (Intent::TaxGuidance, &["tax"]),
    (Intent::InvestmentTips, &["invest", "sip"]),
];

/// Pick the report for a free-text message
pub fn route(message: &str) -> Intent {
    let message = message.to_lowercase();
    let intent = RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| message.contains(k)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Help);

    debug!(intent = intent.as_str(), "Routed message");
    intent
}

/// Generate the response text for an intent
pub fn respond(intent: Intent, transactions: &[Transaction], profile: &Profile) -> String {
    match intent {
        Intent::BudgetSummary => summarize_budget(transactions),
        Intent::SpendingInsights => generate_spending_insights(transactions, profile),
        Intent::TaxGuidance => generate_tax_guidance(profile),
        Intent::InvestmentTips => investment_tips(),
        Intent::Help => HELP_MESSAGE.to_string(),
    }
}

/// Route a message and generate its response
pub fn answer(message: &str, transactions: &[Transaction], profile: &Profile) -> String {
    respond(route(message), transactions, profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::load_sample;

    #[test]
    fn test_route_single_keywords() {
        assert_eq!(route("Show my BUDGET"), Intent::BudgetSummary);
        assert_eq!(route("where do I spend most?"), Intent::SpendingInsights);
        assert_eq!(route("any insights?"), Intent::SpendingInsights);
        assert_eq!(route("how can I save"), Intent::SpendingInsights);
        assert_eq!(route("tax tips please"), Intent::TaxGuidance);
        assert_eq!(route("should I invest"), Intent::InvestmentTips);
        assert_eq!(route("start a SIP"), Intent::InvestmentTips);
    }

    #[test]
    fn test_route_first_match_wins() {
        assert_eq!(route("what's my budget and spend"), Intent::BudgetSummary);
        assert_eq!(route("save on tax"), Intent::SpendingInsights);
        assert_eq!(route("tax on investments"), Intent::TaxGuidance);
        assert_eq!(route("investment sip advice"), Intent::InvestmentTips);
    }

    #[test]
    fn test_route_substring_matching() {
        // Keywords match inside longer words
        assert_eq!(route("my spending habits"), Intent::SpendingInsights);
        assert_eq!(route("savings plan"), Intent::SpendingInsights);
        assert_eq!(route("taxes"), Intent::TaxGuidance);
    }

    #[test]
    fn test_route_default_help() {
        assert_eq!(route("hello"), Intent::Help);
        assert_eq!(route(""), Intent::Help);
    }

    #[test]
    fn test_respond_dispatch() {
        let sample = load_sample();
        let profile = Profile::default();

        assert!(respond(Intent::BudgetSummary, &sample, &profile).starts_with("**Period:**"));
        assert!(respond(Intent::SpendingInsights, &sample, &profile)
            .starts_with("**Top Spending Categories:**"));
        assert!(respond(Intent::TaxGuidance, &sample, &profile).starts_with("**Tax Guidance"));
        assert!(respond(Intent::InvestmentTips, &sample, &profile)
            .starts_with("General investment advice:"));
        assert_eq!(respond(Intent::Help, &sample, &profile), HELP_MESSAGE);
    }

    #[test]
    fn test_answer_on_empty_store() {
        let profile = Profile::default();
        assert_eq!(
            answer("budget please", &[], &profile),
            "No transactions to summarize."
        );
        assert_eq!(answer("spend", &[], &profile), "No transactions to analyze.");
    }
}
