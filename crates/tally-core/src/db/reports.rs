//! Aggregate summary queries
//!
//! Both reports are recomputed from the transactions table on every call;
//! nothing here is cached or stored.

use crate::error::Result;
use crate::models::{CategorySummary, MonthlySummary};

use super::Database;

impl Database {
    /// Per-month income/expense totals, most recent month first
    ///
    /// Truncated to the 12 most recent months. Totals are rounded to two
    /// decimal places in SQL before the savings subtraction.
    pub fn monthly_summary(&self) -> Result<Vec<MonthlySummary>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT
                strftime('%Y-%m', date) AS month,
                ROUND(SUM(CASE WHEN type = 'income' THEN amount ELSE 0 END), 2) AS income,
                ROUND(SUM(CASE WHEN type = 'expense' THEN ABS(amount) ELSE 0 END), 2) AS expense
            FROM transactions
            GROUP BY strftime('%Y-%m', date)
            ORDER BY month DESC
            LIMIT 12
            "#,
        )?;

        let summaries = stmt
            .query_map([], |row| {
                let total_income: f64 = row.get(1)?;
                let total_expense: f64 = row.get(2)?;
                Ok(MonthlySummary {
                    month: row.get(0)?,
                    total_income,
                    total_expense,
                    savings: total_income - total_expense,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(summaries)
    }

    /// Signed totals grouped by (category, type)
    ///
    /// Ordered by type ascending, then signed total descending. No
    /// rounding is applied.
    pub fn category_summary(&self) -> Result<Vec<CategorySummary>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT category, SUM(amount) AS total, type
            FROM transactions
            GROUP BY category, type
            ORDER BY type ASC, total DESC
            "#,
        )?;

        let summaries = stmt
            .query_map([], |row| {
                let kind_str: String = row.get(2)?;
                Ok(CategorySummary {
                    category: row.get(0)?,
                    total: row.get(1)?,
                    kind: super::parse_kind(2, &kind_str)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(summaries)
    }
}
