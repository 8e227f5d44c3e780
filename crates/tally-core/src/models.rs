//! Domain models for Tally

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a transaction adds to or draws from the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded monetary event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    /// Negative = expense, positive = income
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// A transaction as submitted, before an id is assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// Per-month income/expense totals, derived at query time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Calendar month key, "YYYY-MM"
    pub month: String,
    pub total_income: f64,
    /// Absolute value of the month's expenses
    pub total_expense: f64,
    /// total_income - total_expense
    pub savings: f64,
}

/// Signed total for one (category, type) group, derived at query time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub total: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}
