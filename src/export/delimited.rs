//! Delimited-text (CSV) export.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::config::ExportConfig;
use crate::error::{CostError, CostResult};
use crate::reporting::{Table, Tabular};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes `table` as delimited text to `writer`.
///
/// The header row carries the table's columns, so an empty table still
/// produces a header. Amounts are written in plain decimal form.
///
/// # Errors
///
/// Returns [`CostError::InvalidConfig`] if the delimiter is not ASCII, and
/// [`CostError::Io`] if the writer fails.
pub fn write_delimited<W: Write, R: Tabular>(
    table: &Table<R>,
    mut writer: W,
    options: &ExportConfig,
) -> CostResult<()> {
    if !options.delimiter.is_ascii() {
        return Err(CostError::InvalidConfig {
            field: "export.delimiter".to_string(),
            message: format!("'{}' is not a single ASCII character", options.delimiter),
        });
    }
    let delimiter = options.delimiter as u8;

    if options.include_bom {
        writer.write_all(UTF8_BOM)?;
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    csv_writer
        .write_record(table.columns())
        .map_err(io::Error::from)?;
    for cells in table.cell_rows() {
        csv_writer
            .write_record(cells.iter().map(ToString::to_string))
            .map_err(io::Error::from)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes `table` as a delimited-text file at `path`.
///
/// # Errors
///
/// Returns [`CostError::InvalidConfig`] for a non-ASCII delimiter, and
/// [`CostError::Export`] if the file cannot be created or written.
pub fn write_csv<R: Tabular>(
    table: &Table<R>,
    path: impl AsRef<Path>,
    options: &ExportConfig,
) -> CostResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| CostError::export(path, e))?;
    write_delimited(table, file, options).map_err(|err| match err {
        CostError::Io(e) => CostError::export(path, e),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonnelCost;
    use crate::reporting::{TrendRow, trend_report};
    use rust_decimal::Decimal;

    fn no_bom() -> ExportConfig {
        ExportConfig {
            include_bom: false,
            ..ExportConfig::default()
        }
    }

    fn render<R: Tabular>(table: &Table<R>, options: &ExportConfig) -> Vec<u8> {
        let mut buffer = Vec::new();
        write_delimited(table, &mut buffer, options).unwrap();
        buffer
    }

    #[test]
    fn test_empty_table_writes_header_only() {
        let table: Table<TrendRow> = Table::empty();
        let output = String::from_utf8(render(&table, &no_bom())).unwrap();
        assert_eq!(
            output.trim_end(),
            "period,record_count,total_cost,average_cost,base_salary_total,bonuses_total,overtime_total"
        );
    }

    #[test]
    fn test_rows_follow_header() {
        let costs = vec![PersonnelCost::new("E001", "2024-11", Decimal::new(5000, 0))];
        let table = trend_report(&costs);

        let output = String::from_utf8(render(&table, &no_bom())).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("2024-11,1,5000,"));
    }

    #[test]
    fn test_bom_and_custom_delimiter() {
        let table: Table<TrendRow> = Table::empty();
        let options = ExportConfig {
            delimiter: ';',
            ..ExportConfig::default()
        };

        let output = render(&table, &options);

        assert!(output.starts_with(UTF8_BOM));
        let text = String::from_utf8(output[UTF8_BOM.len()..].to_vec()).unwrap();
        assert!(text.starts_with("period;record_count;"));
    }

    #[test]
    fn test_non_ascii_delimiter_is_rejected() {
        let table: Table<TrendRow> = Table::empty();
        let options = ExportConfig {
            delimiter: '§',
            ..no_bom()
        };
        let mut buffer = Vec::new();

        let result = write_delimited(&table, &mut buffer, &options);

        assert!(matches!(
            result,
            Err(CostError::InvalidConfig { ref field, .. }) if field == "export.delimiter"
        ));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_failing_writer_surfaces_io_error() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("broken pipe"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let table: Table<TrendRow> = Table::empty();
        let result = write_delimited(&table, Broken, &ExportConfig::default());

        assert!(matches!(result, Err(CostError::Io(_))));
    }

    #[test]
    fn test_write_csv_keeps_delimiter_error_unwrapped() {
        let dir = tempfile::tempdir().unwrap();
        let table: Table<TrendRow> = Table::empty();
        let options = ExportConfig {
            delimiter: '§',
            ..ExportConfig::default()
        };

        let result = write_csv(&table, dir.path().join("trend.csv"), &options);

        assert!(matches!(result, Err(CostError::InvalidConfig { .. })));
    }

    #[test]
    fn test_write_csv_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trend.csv");
        let table: Table<TrendRow> = Table::empty();

        write_csv(&table, &path, &ExportConfig::default()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
    }

    #[test]
    fn test_write_csv_reports_unwritable_path() {
        let table: Table<TrendRow> = Table::empty();
        let result = write_csv(&table, "/nonexistent/dir/out.csv", &ExportConfig::default());
        assert!(matches!(result, Err(CostError::Export { .. })));
    }
}
