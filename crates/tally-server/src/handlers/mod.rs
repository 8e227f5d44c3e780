//! HTTP request handlers

mod export;
mod import;
mod summary;
mod transactions;

pub use export::export_transactions;
pub use import::import_transactions;
pub use summary::{category_summary, monthly_summary};
pub use transactions::{create_transaction, delete_transaction, list_transactions};
