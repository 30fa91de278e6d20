//! Domain models for Purse

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Category assigned to rows whose category cell is blank
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A dated, categorized, signed monetary record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub category: String,
    /// Positive = expense, negative = saving/investment
    pub amount: f64,
    pub description: String,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        let category = category.into();
        let category = if category.trim().is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            category.trim().to_string()
        };
        Self {
            date,
            category,
            amount,
            description: description.into(),
        }
    }

    pub fn is_expense(&self) -> bool {
        self.amount > 0.0
    }

    pub fn is_saving(&self) -> bool {
        self.amount < 0.0
    }
}

/// Kind of user the assistant is talking to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Student,
    Professional,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Professional => "professional",
        }
    }

    /// Age used when a profile does not specify one
    pub fn default_age(&self) -> u32 {
        match self {
            Self::Student => 23,
            Self::Professional => 30,
        }
    }
}

impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "professional" => Ok(Self::Professional),
            _ => Err(format!("Unknown user type: {}", s)),
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of the user for a single interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub user_type: UserType,
    pub age: u32,
    pub monthly_income: u64,
}

impl Profile {
    pub const MIN_AGE: u32 = 15;
    pub const MAX_AGE: u32 = 80;
    pub const MAX_MONTHLY_INCOME: u64 = 1_000_000;

    /// Build a validated profile
    pub fn new(
        name: impl Into<String>,
        user_type: UserType,
        age: u32,
        monthly_income: u64,
    ) -> Result<Self> {
        if !(Self::MIN_AGE..=Self::MAX_AGE).contains(&age) {
            return Err(Error::InvalidData(format!(
                "Age must be between {} and {}, got {}",
                Self::MIN_AGE,
                Self::MAX_AGE,
                age
            )));
        }
        if monthly_income > Self::MAX_MONTHLY_INCOME {
            return Err(Error::InvalidData(format!(
                "Monthly income must be at most {}, got {}",
                Self::MAX_MONTHLY_INCOME,
                monthly_income
            )));
        }
        Ok(Self {
            name: name.into(),
            user_type,
            age,
            monthly_income,
        })
    }

    pub fn is_student(&self) -> bool {
        self.user_type == UserType::Student
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Alex".to_string(),
            user_type: UserType::Student,
            age: UserType::Student.default_age(),
            monthly_income: 30_000,
        }
    }
}

/// Presentation-only verbosity setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Pick based on the profile's user type
    #[default]
    Auto,
    Simple,
    Detailed,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Simple => "simple",
            Self::Detailed => "detailed",
        }
    }
}

impl std::str::FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "simple" => Ok(Self::Simple),
            "detailed" => Ok(Self::Detailed),
            _ => Err(format!("Unknown complexity: {}", s)),
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single entry in the chat history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}
