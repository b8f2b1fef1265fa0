//! Report export.
//!
//! Writes any [`Table`](crate::reporting::Table) to delimited text or to an
//! XLSX workbook. Values are encoded as-is; no transformation happens here.

mod delimited;
mod spreadsheet;

pub use delimited::{write_csv, write_delimited};
pub use spreadsheet::write_xlsx;
