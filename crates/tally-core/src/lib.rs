//! Tally Core Library
//!
//! Shared functionality for the Tally personal finance ledger:
//! - Database access and schema bootstrap
//! - CSV import/export of transactions
//! - Monthly and per-category summary queries

pub mod db;
pub mod error;
pub mod export;
pub mod import;
pub mod models;

pub use db::Database;
pub use error::{Error, Result};
pub use models::{
    CategorySummary, MonthlySummary, NewTransaction, Transaction, TransactionType,
};
