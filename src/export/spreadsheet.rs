//! Spreadsheet (XLSX) export.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::error::{CostError, CostResult};
use crate::reporting::{Cell, Table, Tabular};

/// Writes `table` to an XLSX workbook at `path` with a bold header row.
///
/// Text cells are written as strings; counts and amounts as numbers.
///
/// # Errors
///
/// Returns [`CostError::Export`] if the sheet name is invalid, an amount
/// cannot be represented as a number, or the file cannot be saved.
pub fn write_xlsx<R: Tabular>(
    table: &Table<R>,
    path: impl AsRef<Path>,
    sheet_name: &str,
) -> CostResult<()> {
    let path = path.as_ref();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    fill_worksheet(worksheet, table, sheet_name).map_err(|e| CostError::export(path, e))?;
    workbook.save(path).map_err(|e| CostError::export(path, e))
}

fn fill_worksheet<R: Tabular>(
    worksheet: &mut Worksheet,
    table: &Table<R>,
    sheet_name: &str,
) -> Result<(), XlsxError> {
    worksheet.set_name(sheet_name)?;

    let header = Format::new().set_bold();
    for (col, name) in table.columns().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header)?;
    }

    for (index, cells) in table.cell_rows().enumerate() {
        let row = index as u32 + 1;
        for (col, cell) in cells.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row, col, text)?;
                }
                Cell::Count(count) => {
                    worksheet.write_number(row, col, *count as f64)?;
                }
                Cell::Amount(amount) => {
                    let value = f64::try_from(*amount).map_err(|e| {
                        XlsxError::ParameterError(format!("amount {}: {}", amount, e))
                    })?;
                    worksheet.write_number(row, col, value)?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, PersonnelCost};
    use crate::reporting::{DepartmentRow, report_by_department};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_write_xlsx_creates_workbook() {
        let employee = Employee::new(
            "E001",
            "Ada Lovelace",
            "Tech",
            "Developer",
            Decimal::new(5000, 0),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        )
        .unwrap();
        let costs = vec![PersonnelCost::new("E001", "2024-11", Decimal::new(5000, 0))];
        let table = report_by_department(&[employee], &costs);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("departments.xlsx");
        write_xlsx(&table, &path, "Departments").unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // XLSX is a zip container.
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_invalid_sheet_name_is_export_error() {
        let table: Table<DepartmentRow> = Table::empty();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.xlsx");

        let result = write_xlsx(&table, &path, "bad/name");

        assert!(matches!(result, Err(CostError::Export { .. })));
    }
}
