//! CSV ledger format
//!
//! The one interchange format: a fixed `date,amount,category,description`
//! header, ISO dates, plain 2-decimal amounts with no currency symbol.
//! Exporting and re-importing reconstructs an equal record sequence.

use chrono::NaiveDate;
use std::io::{Read, Write};

use crate::error::{FinSmartError, FinSmartResult};
use crate::models::{ExpenseRecord, Money};

/// The fixed ledger header
pub const CSV_HEADER: &str = "date,amount,category,description";

/// Write records as CSV, one per line after the header
pub fn write_expenses_csv<W: Write>(records: &[ExpenseRecord], writer: &mut W) -> FinSmartResult<()> {
    writeln!(writer, "{}", CSV_HEADER)
        .map_err(|e| FinSmartError::Export(e.to_string()))?;

    for record in records {
        writeln!(
            writer,
            "{},{},{},{}",
            record.date.format("%Y-%m-%d"),
            record.amount.to_plain_string(),
            escape_csv(&record.category),
            escape_csv(&record.description),
        )
        .map_err(|e| FinSmartError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Render records to a CSV string
pub fn expenses_to_csv_string(records: &[ExpenseRecord]) -> FinSmartResult<String> {
    let mut buf = Vec::new();
    write_expenses_csv(records, &mut buf)?;
    String::from_utf8(buf).map_err(|e| FinSmartError::Export(e.to_string()))
}

/// Read records back from CSV
///
/// The header must match the ledger format exactly. An unparseable date or
/// amount, or a negative amount, is a validation error; field quoting is
/// handled by the reader.
pub fn read_expenses_csv<R: Read>(reader: R) -> FinSmartResult<Vec<ExpenseRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let expected: Vec<&str> = CSV_HEADER.split(',').collect();
    let actual: Vec<&str> = headers.iter().collect();
    if actual != expected {
        return Err(FinSmartError::Validation(format!(
            "Unexpected ledger header: {}",
            actual.join(",")
        )));
    }

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row?;
        let line = index + 2; // 1-based, after the header

        let date_field = row.get(0).unwrap_or_default();
        let date = NaiveDate::parse_from_str(date_field, "%Y-%m-%d")
            .map_err(|_| FinSmartError::bad_date(format!("{} (line {})", date_field, line)))?;

        let amount_field = row.get(1).unwrap_or_default();
        let amount = Money::parse(amount_field).map_err(|e| {
            FinSmartError::Validation(format!("{} (line {})", e, line))
        })?;

        let record = ExpenseRecord::new(
            date,
            amount,
            row.get(2).unwrap_or_default(),
            row.get(3).unwrap_or_default(),
        );
        record.validate().map_err(|e| {
            FinSmartError::Validation(format!("{} (line {})", e, line))
        })?;

        records.push(record);
    }

    Ok(records)
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_records() -> Vec<ExpenseRecord> {
        vec![
            ExpenseRecord::new(
                date(2026, 8, 1),
                Money::from_paise(12050),
                "Groceries",
                "weekly shop",
            ),
            ExpenseRecord::new(date(2026, 8, 3), Money::from_rupees(50), "Transportation", ""),
            ExpenseRecord::new(
                date(2026, 8, 5),
                Money::from_rupees(300),
                "Food & Drinks",
                "dinner, with friends",
            ),
        ]
    }

    #[test]
    fn test_write_format() {
        let csv = expenses_to_csv_string(&sample_records()).unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("date,amount,category,description"));
        assert_eq!(lines.next(), Some("2026-08-01,120.50,Groceries,weekly shop"));
        assert_eq!(lines.next(), Some("2026-08-03,50.00,Transportation,"));
        // Comma in the description forces quoting
        assert_eq!(
            lines.next(),
            Some("2026-08-05,300.00,Food & Drinks,\"dinner, with friends\"")
        );
    }

    #[test]
    fn test_round_trip() {
        let records = sample_records();
        let csv = expenses_to_csv_string(&records).unwrap();
        let parsed = read_expenses_csv(csv.as_bytes()).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_round_trip_quotes() {
        let records = vec![ExpenseRecord::new(
            date(2026, 8, 1),
            Money::from_rupees(75),
            "Other",
            "the \"good\" stuff",
        )];
        let csv = expenses_to_csv_string(&records).unwrap();
        let parsed = read_expenses_csv(csv.as_bytes()).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_read_empty_ledger() {
        let parsed = read_expenses_csv("date,amount,category,description\n".as_bytes()).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_read_rejects_wrong_header() {
        let err =
            read_expenses_csv("when,how_much,what,why\n".as_bytes()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_read_rejects_bad_date() {
        let input = "date,amount,category,description\n08/01/2026,100.00,Groceries,\n";
        let err = read_expenses_csv(input.as_bytes()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_read_rejects_bad_amount() {
        let input = "date,amount,category,description\n2026-08-01,lots,Groceries,\n";
        let err = read_expenses_csv(input.as_bytes()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_read_rejects_negative_amount() {
        let input = "date,amount,category,description\n2026-08-01,-5.00,Groceries,\n";
        let err = read_expenses_csv(input.as_bytes()).unwrap_err();
        assert!(err.is_validation());
    }
}
