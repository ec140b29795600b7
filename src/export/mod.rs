//! Export module for Pocketbook
//!
//! Flat-file export of expense lists (spreadsheet-compatible CSV).

pub mod csv;

pub use self::csv::{
    expenses_csv_payload, export_expenses_csv, export_file_name, EXPENSE_CSV_HEADER,
};
