//! CSV import parsing for bulk transaction upload

use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::io::Read;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{NewTransaction, TransactionType};

/// Column order shared by import and export
pub const CSV_HEADERS: [&str; 6] = ["id", "date", "amount", "category", "description", "type"];

/// Parse uploaded CSV data into transactions
///
/// The header row must match [`CSV_HEADERS`] exactly, and every row must
/// parse; one bad row fails the whole file. The id column exists for
/// round-trip compatibility with export, but its values are ignored:
/// imported rows are assigned fresh ids on insert.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<NewTransaction>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.iter().ne(CSV_HEADERS) {
        return Err(Error::Import(format!(
            "Unexpected CSV header '{}' (expected '{}')",
            headers.iter().collect::<Vec<_>>().join(","),
            CSV_HEADERS.join(","),
        )));
    }

    let mut transactions = Vec::new();
    for result in rdr.records() {
        let record = result?;

        let date_str = record
            .get(1)
            .ok_or_else(|| Error::Import("Missing date".into()))?;
        let date = parse_date(date_str)?;

        let amount_str = record
            .get(2)
            .ok_or_else(|| Error::Import("Missing amount".into()))?;
        let amount = parse_amount(amount_str)?;

        let category = record
            .get(3)
            .ok_or_else(|| Error::Import("Missing category".into()))?
            .to_string();

        let description = record
            .get(4)
            .map(|s| s.to_string())
            .filter(|s| !s.is_empty());

        let kind: TransactionType = record
            .get(5)
            .ok_or_else(|| Error::Import("Missing type".into()))?
            .parse()
            .map_err(Error::Import)?;

        transactions.push(NewTransaction {
            date,
            amount,
            category,
            description,
            kind,
        });
    }

    debug!("Parsed {} transactions from CSV", transactions.len());
    Ok(transactions)
}

/// Parse a calendar date in the export format (YYYY-MM-DD)
fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| Error::Import(format!("Invalid date: {}", s)))
}

fn parse_amount(s: &str) -> Result<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| Error::Import(format!("Invalid amount: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,date,amount,category,description,type
1,2024-01-15,2500.00,Salary,Monthly pay,income
2,2024-01-20,-42.50,Food,Groceries,expense
,2024-02-01,-9.99,Subscriptions,,expense
";

    #[test]
    fn parses_valid_rows() {
        let txs = parse_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(txs.len(), 3);

        assert_eq!(txs[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(txs[0].amount, 2500.00);
        assert_eq!(txs[0].category, "Salary");
        assert_eq!(txs[0].description.as_deref(), Some("Monthly pay"));
        assert_eq!(txs[0].kind, TransactionType::Income);

        // Empty id and description cells are accepted
        assert_eq!(txs[2].description, None);
        assert_eq!(txs[2].kind, TransactionType::Expense);
    }

    #[test]
    fn rejects_missing_header() {
        let data = "2024-01-15,50.0,Salary,,income\n";
        let err = parse_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Import(_)), "got {:?}", err);
    }

    #[test]
    fn rejects_wrong_header() {
        let data = "date,amount,category,description,type\n2024-01-15,50.0,Salary,,income\n";
        let err = parse_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Unexpected CSV header"));
    }

    #[test]
    fn rejects_malformed_date() {
        let data = "id,date,amount,category,description,type\n1,15/01/2024,50.0,Salary,,income\n";
        let err = parse_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let data = "id,date,amount,category,description,type\n1,2024-01-15,fifty,Salary,,income\n";
        let err = parse_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Invalid amount"));
    }

    #[test]
    fn rejects_unknown_type() {
        let data = "id,date,amount,category,description,type\n1,2024-01-15,50.0,Salary,,transfer\n";
        let err = parse_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Unknown transaction type"));
    }

    #[test]
    fn empty_file_is_a_header_error() {
        let err = parse_csv("".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Import(_)), "got {:?}", err);
    }
}
