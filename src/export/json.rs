//! JSON export
//!
//! Machine-readable alternative to the CSV ledger format: a pretty-printed
//! array of expense records.

use std::io::Write;

use crate::error::{FinSmartError, FinSmartResult};
use crate::models::ExpenseRecord;

/// Write records as a pretty-printed JSON array
pub fn write_expenses_json<W: Write>(records: &[ExpenseRecord], writer: &mut W) -> FinSmartResult<()> {
    serde_json::to_writer_pretty(&mut *writer, records)?;
    writeln!(writer).map_err(|e| FinSmartError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_json_round_trip() {
        let records = vec![ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            Money::from_paise(12050),
            "Groceries",
            "weekly shop",
        )];

        let mut buf = Vec::new();
        write_expenses_json(&records, &mut buf).unwrap();

        let parsed: Vec<ExpenseRecord> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_empty_ledger_is_empty_array() {
        let mut buf = Vec::new();
        write_expenses_json(&[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().trim(), "[]");
    }
}
