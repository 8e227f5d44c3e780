//! CSV export for transactions

use csv::Writer;

use crate::error::Result;
use crate::import::CSV_HEADERS;
use crate::models::Transaction;

/// Encode transactions as CSV in the fixed column order
///
/// The header row is always present, even for an empty set. A missing
/// description encodes as an empty field.
pub fn transactions_to_csv(transactions: &[Transaction]) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut wtr = Writer::from_writer(&mut buf);

        wtr.write_record(CSV_HEADERS)?;
        for tx in transactions {
            wtr.write_record([
                tx.id.to_string(),
                tx.date.to_string(),
                tx.amount.to_string(),
                tx.category.clone(),
                tx.description.clone().unwrap_or_default(),
                tx.kind.to_string(),
            ])?;
        }
        wtr.flush()?;
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTransaction, TransactionType};
    use chrono::NaiveDate;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction {
                id: 1,
                date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                amount: 2500.0,
                category: "Salary".to_string(),
                description: Some("Monthly pay".to_string()),
                kind: TransactionType::Income,
            },
            Transaction {
                id: 2,
                date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
                amount: -42.5,
                category: "Food".to_string(),
                description: None,
                kind: TransactionType::Expense,
            },
        ]
    }

    #[test]
    fn empty_set_is_header_only() {
        let csv = transactions_to_csv(&[]).unwrap();
        assert_eq!(csv, "id,date,amount,category,description,type\n");
    }

    #[test]
    fn encodes_rows_in_column_order() {
        let csv = transactions_to_csv(&sample()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("id,date,amount,category,description,type")
        );
        assert_eq!(lines.next(), Some("1,2024-01-15,2500,Salary,Monthly pay,income"));
        assert_eq!(lines.next(), Some("2,2024-01-20,-42.5,Food,,expense"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn round_trips_through_import() {
        let csv = transactions_to_csv(&sample()).unwrap();
        let decoded = crate::import::parse_csv(csv.as_bytes()).unwrap();

        let expected: Vec<NewTransaction> = sample()
            .into_iter()
            .map(|t| NewTransaction {
                date: t.date,
                amount: t.amount,
                category: t.category,
                description: t.description,
                kind: t.kind,
            })
            .collect();
        assert_eq!(decoded, expected);
    }
}
