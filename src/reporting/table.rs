//! Schema-stable report tables.
//!
//! A [`Table`] pairs a fixed, ordered column list with typed rows. The column
//! list comes from the row type, so an empty table still declares its full
//! schema.

use std::fmt;

use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Free text, such as a department name or period.
    Text(String),
    /// A count of employees or records.
    Count(usize),
    /// A monetary amount or percentage.
    Amount(Decimal),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Count(count) => write!(f, "{}", count),
            Cell::Amount(amount) => write!(f, "{}", amount),
        }
    }
}

/// A row type with a fixed column schema.
pub trait Tabular {
    /// Column names, in output order.
    const COLUMNS: &'static [&'static str];

    /// The row's values, one per entry in [`Tabular::COLUMNS`].
    fn cells(&self) -> Vec<Cell>;
}

/// An ordered collection of rows sharing the schema of `R`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<R> {
    rows: Vec<R>,
}

impl<R: Tabular> Table<R> {
    /// Creates a table from rows already in output order.
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    /// Creates a table with no rows.
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// The declared columns, present even when there are no rows.
    pub fn columns(&self) -> &'static [&'static str] {
        R::COLUMNS
    }

    /// The typed rows.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over each row's cells in column order.
    pub fn cell_rows(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        self.rows.iter().map(Tabular::cells)
    }
}

impl<R: Tabular + Serialize> Serialize for Table<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Table", 2)?;
        state.serialize_field("columns", R::COLUMNS)?;
        state.serialize_field("rows", &self.rows)?;
        state.end()
    }
}
