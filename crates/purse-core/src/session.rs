//! Session state for one user interaction loop
//!
//! The caller owns the [`Session`] and passes it through each interaction.
//! Transactions and messages are append-only; reports only ever see a
//! borrowed snapshot.

use tracing::{debug, info};

use crate::models::{Complexity, Message, Profile, Transaction};
use crate::router::{respond, route};
use crate::store;
use crate::tone::format_response;

/// First assistant message of every session
pub const GREETING: &str = "Hi! I'm your Personal Finance Assistant. Ask me about budget, spending, tax, or investment tips.";

#[derive(Debug, Clone)]
pub struct Session {
    profile: Profile,
    complexity: Complexity,
    transactions: Vec<Transaction>,
    messages: Vec<Message>,
}

impl Session {
    pub fn new(profile: Profile, complexity: Complexity, transactions: Vec<Transaction>) -> Self {
        Self {
            profile,
            complexity,
            transactions,
            messages: vec![Message::assistant(GREETING)],
        }
    }

    /// Answer a chat message
    ///
    /// Blank input is ignored. Otherwise the user message and the tone-formatted
    /// reply are both recorded, and the reply is returned.
    pub fn ask(&mut self, text: &str) -> Option<&Message> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.messages.push(Message::user(text));

        let intent = route(text);
        let body = respond(intent, &self.transactions, &self.profile);
        let reply = format_response(&body, &self.profile, self.complexity);

        debug!(intent = intent.as_str(), "Answered chat message");
        self.messages.push(Message::assistant(reply));
        self.messages.last()
    }

    /// Append a transaction to the session's store
    pub fn add_transaction(&mut self, transaction: Transaction) {
        info!(
            date = %transaction.date,
            category = %transaction.category,
            amount = transaction.amount,
            "Transaction added"
        );
        let transactions = std::mem::take(&mut self.transactions);
        self.transactions = store::append(transactions, transaction);
    }

    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = profile;
    }

    pub fn set_complexity(&mut self, complexity: Complexity) {
        self.complexity = complexity;
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, UserType};
    use crate::store::load_sample;
    use crate::tone::{DETAILED_PREFIX, SIMPLE_PREFIX};
    use chrono::NaiveDate;

    #[test]
    fn test_new_session_greets() {
        let session = Session::new(Profile::default(), Complexity::Auto, load_sample());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert_eq!(session.messages()[0].text, GREETING);
    }

    #[test]
    fn test_ask_records_both_messages() {
        let mut session = Session::new(Profile::default(), Complexity::Auto, load_sample());
        let reply = session.ask("show my budget").unwrap().clone();

        assert_eq!(reply.role, Role::Assistant);
        assert!(reply.text.starts_with(SIMPLE_PREFIX));
        assert!(reply.text.contains("**Total Spending:** ₹4,969.00"));

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1], Message::user("show my budget"));
        assert_eq!(messages[2], reply);
    }

    #[test]
    fn test_ask_ignores_blank_input() {
        let mut session = Session::new(Profile::default(), Complexity::Auto, load_sample());
        assert!(session.ask("   ").is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_ask_uses_profile_complexity() {
        let profile = Profile::new("Priya", UserType::Professional, 30, 80_000).unwrap();
        let mut session = Session::new(profile, Complexity::Auto, Vec::new());
        let reply = session.ask("hello").unwrap();
        assert!(reply.text.starts_with(DETAILED_PREFIX));

        session.set_complexity(Complexity::Simple);
        let reply = session.ask("hello").unwrap();
        assert!(reply.text.starts_with(SIMPLE_PREFIX));
    }

    #[test]
    fn test_add_transaction_changes_reports() {
        let mut session = Session::new(Profile::default(), Complexity::Detailed, load_sample());
        session.add_transaction(Transaction::new(
            NaiveDate::from_ymd_opt(2025, 8, 21).unwrap(),
            "Food",
            31.0,
            "Dinner",
        ));

        assert_eq!(session.transactions().len(), 9);
        assert_eq!(session.transactions()[8].description, "Dinner");

        let reply = session.ask("budget").unwrap();
        assert!(reply.text.contains("₹5,000.00"));
    }
}
