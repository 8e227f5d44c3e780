//! Transaction operations

use rusqlite::params;
use tracing::debug;

use super::Database;
use crate::error::Result;
use crate::models::{NewTransaction, Transaction, TransactionType};

/// Expenses are stored negative. A positive expense amount is negated on
/// the way in; income amounts keep whatever sign was given.
fn normalize_amount(amount: f64, kind: TransactionType) -> f64 {
    if kind == TransactionType::Expense && amount > 0.0 {
        -amount
    } else {
        amount
    }
}

impl Database {
    /// Insert a transaction and return it with its assigned id
    pub fn insert_transaction(&self, tx: &NewTransaction) -> Result<Transaction> {
        let conn = self.conn()?;
        let amount = normalize_amount(tx.amount, tx.kind);

        conn.execute(
            r#"
            INSERT INTO transactions (date, amount, category, description, type)
            VALUES (?, ?, ?, ?, ?)
            "#,
            params![
                tx.date.to_string(),
                amount,
                tx.category,
                tx.description,
                tx.kind.as_str(),
            ],
        )?;

        Ok(Transaction {
            id: conn.last_insert_rowid(),
            date: tx.date,
            amount,
            category: tx.category.clone(),
            description: tx.description.clone(),
            kind: tx.kind,
        })
    }

    /// List every transaction, newest date first
    pub fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, date, amount, category, description, type
            FROM transactions
            ORDER BY date DESC, id DESC
            "#,
        )?;

        let transactions = stmt
            .query_map([], |row| Self::row_to_transaction(row))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Delete a transaction by id
    ///
    /// Deleting an id that does not exist is a successful no-op.
    pub fn delete_transaction(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM transactions WHERE id = ?", params![id])?;
        Ok(())
    }

    /// Insert a batch of transactions as a single SQLite transaction
    ///
    /// All rows persist or none do: any failure rolls the whole batch
    /// back. The same sign normalization as single insert applies.
    /// Returns the number of rows inserted.
    pub fn bulk_insert_transactions(&self, txs: &[NewTransaction]) -> Result<usize> {
        let mut conn = self.conn()?;
        let dbtx = conn.transaction()?;

        {
            let mut stmt = dbtx.prepare(
                r#"
                INSERT INTO transactions (date, amount, category, description, type)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )?;
            for tx in txs {
                stmt.execute(params![
                    tx.date.to_string(),
                    normalize_amount(tx.amount, tx.kind),
                    tx.category,
                    tx.description,
                    tx.kind.as_str(),
                ])?;
            }
        }

        dbtx.commit()?;
        debug!("Imported {} transactions", txs.len());
        Ok(txs.len())
    }

    pub(crate) fn row_to_transaction(row: &rusqlite::Row) -> rusqlite::Result<Transaction> {
        let date_str: String = row.get(1)?;
        let kind_str: String = row.get(5)?;
        Ok(Transaction {
            id: row.get(0)?,
            date: chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap_or_default(),
            amount: row.get(2)?,
            category: row.get(3)?,
            description: row.get(4)?,
            kind: super::parse_kind(5, &kind_str)?,
        })
    }
}
