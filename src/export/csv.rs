//! CSV Export functionality
//!
//! Exports expenses as `Date,Description,Category,Amount` rows. Category ids
//! are resolved to names, amounts are plain two-decimal numbers. The exporter
//! never touches the file system itself; callers hand it a writer.

use std::io::Write;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Category, CategoryIndex, Expense};

/// Header row of an expense export
pub const EXPENSE_CSV_HEADER: [&str; 4] = ["Date", "Description", "Category", "Amount"];

/// Write `expenses` as CSV to `writer`, in input order
pub fn export_expenses_csv<'a, I, W>(
    expenses: I,
    categories: &[Category],
    writer: &mut W,
) -> PocketbookResult<usize>
where
    I: IntoIterator<Item = &'a Expense>,
    W: Write,
{
    let index = CategoryIndex::new(categories);
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    csv_writer.write_record(EXPENSE_CSV_HEADER)?;

    let mut rows = 0;
    for expense in expenses {
        let date = expense.date.format("%Y-%m-%d").to_string();
        let amount = expense.amount.to_plain_string();
        csv_writer.write_record([
            date.as_str(),
            expense.description.as_str(),
            index.resolve(&expense.category_id).name(),
            amount.as_str(),
        ])?;
        rows += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| PocketbookError::Export(e.to_string()))?;

    debug!(rows, "exported expenses to CSV");
    Ok(rows)
}

/// Render `expenses` as a CSV payload
pub fn expenses_csv_payload<'a, I>(expenses: I, categories: &[Category]) -> PocketbookResult<String>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut buffer = Vec::new();
    export_expenses_csv(expenses, categories, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| PocketbookError::Export(e.to_string()))
}

/// File name for an export made on `date`, e.g. `expenses-2024-06-15.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("expenses-{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, date, expense};

    #[test]
    fn test_export_scenario() {
        let snapshot = fixtures::small_snapshot();
        let payload = expenses_csv_payload(&snapshot.expenses, &snapshot.categories).unwrap();

        let lines: Vec<&str> = payload.lines().collect();
        assert_eq!(lines[0], "Date,Description,Category,Amount");
        assert_eq!(lines[1], "2024-06-15,Lunch at restaurant,Food & Dining,45.50");
        assert_eq!(lines[2], "2024-06-13,Grocery shopping,Food & Dining,120.00");
        assert_eq!(lines[3], "2024-06-12,Netflix subscription,Entertainment,15.99");
        assert_eq!(lines.len(), 4);
        assert!(payload.ends_with("15.99\n"));
    }

    #[test]
    fn test_export_quotes_special_characters() {
        let expenses = vec![
            expense("1", 2500, "Dinner, drinks", "1", date(2024, 6, 1)),
            expense("2", 1000, "The \"good\" coffee", "1", date(2024, 6, 2)),
        ];
        let payload = expenses_csv_payload(&expenses, &fixtures::categories()).unwrap();
        let lines: Vec<&str> = payload.lines().collect();
        assert_eq!(lines[1], "2024-06-01,\"Dinner, drinks\",Food & Dining,25.00");
        assert_eq!(lines[2], "2024-06-02,\"The \"\"good\"\" coffee\",Food & Dining,10.00");

        let mut categories = fixtures::categories();
        categories.push(fixtures::category("9", "Kids, \"Toys\"", "#f97316", 100));
        let expenses = vec![
            expense("3", 1999, "Line one\nline two", "1", date(2024, 6, 3)),
            expense("4", 500, "Blocks", "9", date(2024, 6, 4)),
        ];
        let payload = expenses_csv_payload(&expenses, &categories).unwrap();
        assert_eq!(
            payload,
            "Date,Description,Category,Amount\n\
             2024-06-03,\"Line one\nline two\",Food & Dining,19.99\n\
             2024-06-04,Blocks,\"Kids, \"\"Toys\"\"\",5.00\n"
        );

        let mut reader = csv::Reader::from_reader(payload.as_bytes());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(&records[0][1], "Line one\nline two");
        assert_eq!(&records[1][2], "Kids, \"Toys\"");
    }

    #[test]
    fn test_export_unknown_category() {
        let expenses = vec![expense("1", 700, "Mystery", "404", date(2024, 6, 1))];
        let payload = expenses_csv_payload(&expenses, &fixtures::categories()).unwrap();
        assert!(payload.contains("2024-06-01,Mystery,Unknown,7.00\n"));
    }

    #[test]
    fn test_export_empty_has_header_only() {
        let none: Vec<Expense> = Vec::new();
        let payload = expenses_csv_payload(&none, &fixtures::categories()).unwrap();
        assert_eq!(payload, "Date,Description,Category,Amount\n");
    }

    #[test]
    fn test_export_to_writer_counts_rows() {
        let snapshot = fixtures::snapshot();
        let mut output = Vec::new();
        let rows =
            export_expenses_csv(&snapshot.expenses, &snapshot.categories, &mut output).unwrap();
        assert_eq!(rows, 10);

        let mut reader = csv::Reader::from_reader(output.as_slice());
        assert_eq!(reader.records().count(), 10);
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(date(2024, 6, 5)), "expenses-2024-06-05.csv");
    }
}
