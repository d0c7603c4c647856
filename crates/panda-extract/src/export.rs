//! Spreadsheet export: the "dados" and "erros" CSV sheets.
//!
//! One CSV file per non-empty sheet. Column names are the product's
//! Portuguese surface language.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::models::{ArticleRow, BatchReport, ErrorRecord};

/// Success sheet name.
pub const DATA_SHEET: &str = "dados";

/// Error sheet name.
pub const ERROR_SHEET: &str = "erros";

/// Render the success sheet: one line per extracted row.
#[must_use]
pub fn data_sheet_csv(rows: &[ArticleRow]) -> String {
    let mut output = String::new();
    output.push_str("TÍTULO,AUTOR,E-MAIL\n");

    for row in rows {
        let title = csv_escape(&row.title);
        let author = csv_escape(&row.author);
        let email = csv_escape(&row.email);
        output.push_str(&format!("{title},{author},{email}\n"));
    }

    output
}

/// Render the error sheet: one line per failed file.
#[must_use]
pub fn error_sheet_csv(errors: &[ErrorRecord]) -> String {
    let mut output = String::new();
    output.push_str("arquivo,erro\n");

    for record in errors {
        let file = csv_escape(&record.file);
        let error = csv_escape(&record.error);
        output.push_str(&format!("{file},{error}\n"));
    }

    output
}

/// Write the report's sheets into `dir`, skipping empty sheets.
///
/// Produces `<base>_dados.csv` and `<base>_erros.csv`, with an optional
/// timestamp segment between base and sheet name. Returns the paths actually
/// written; an empty report writes nothing.
///
/// # Errors
///
/// Returns error when a sheet file cannot be written.
pub fn write_report(
    report: &BatchReport,
    dir: &Path,
    base: &str,
    timestamp: bool,
) -> std::io::Result<Vec<PathBuf>> {
    let stem = if timestamp {
        format!("{base}_{}", Local::now().format("%Y%m%d-%H%M%S"))
    } else {
        base.to_string()
    };

    let mut written = Vec::new();

    if !report.rows.is_empty() {
        let path = dir.join(format!("{stem}_{DATA_SHEET}.csv"));
        fs::write(&path, data_sheet_csv(&report.rows))?;
        info!(path = %path.display(), rows = report.rows.len(), "wrote success sheet");
        written.push(path);
    }

    if !report.errors.is_empty() {
        let path = dir.join(format!("{stem}_{ERROR_SHEET}.csv"));
        fs::write(&path, error_sheet_csv(&report.errors))?;
        info!(path = %path.display(), errors = report.errors.len(), "wrote error sheet");
        written.push(path);
    }

    Ok(written)
}

/// Escape a string for CSV output.
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        // Prefix with single quote to prevent formula injection in spreadsheets
        let escaped = s.replace('"', "\"\"");
        if escaped.starts_with('=')
            || escaped.starts_with('+')
            || escaped.starts_with('-')
            || escaped.starts_with('@')
        {
            format!("\"'{}\"", escaped)
        } else {
            format!("\"{}\"", escaped)
        }
    } else if s.starts_with('=') || s.starts_with('+') || s.starts_with('-') || s.starts_with('@')
    {
        // Prevent CSV injection
        format!("'{}", s)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_sheet_header_and_rows() {
        let rows = vec![
            ArticleRow::new("Redes Neurais", "Maria Silva", "maria@usp.br"),
            ArticleRow::new("Redes Neurais", "João Souza", ""),
        ];
        let csv = data_sheet_csv(&rows);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "TÍTULO,AUTOR,E-MAIL");
        assert_eq!(lines[1], "Redes Neurais,Maria Silva,maria@usp.br");
        assert_eq!(lines[2], "Redes Neurais,João Souza,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_error_sheet_header_and_rows() {
        let errors = vec![ErrorRecord::new("scan.pdf", "No extractable text in PDF")];
        let csv = error_sheet_csv(&errors);

        assert!(csv.starts_with("arquivo,erro\n"));
        assert!(csv.contains("scan.pdf,No extractable text in PDF\n"));
    }

    #[test]
    fn test_csv_escape_quotes_fields_with_commas() {
        let rows = vec![ArticleRow::new("Vision, Attention", "A", "")];
        let csv = data_sheet_csv(&rows);
        assert!(csv.contains("\"Vision, Attention\",A,\n"));
    }

    #[test]
    fn test_csv_escape_doubles_quotes() {
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_csv_escape_guards_formula_injection() {
        assert_eq!(csv_escape("=SUM(A1)"), "'=SUM(A1)");
        assert_eq!(csv_escape("=1,2"), "\"'=1,2\"");
    }

    #[test]
    fn test_write_report_skips_empty_sheets() {
        let dir = tempfile::tempdir().unwrap();
        let report = BatchReport {
            rows: vec![],
            errors: vec![ErrorRecord::new("x.pdf", "boom")],
            total_files: 1,
            usage: None,
        };

        let written = write_report(&report, dir.path(), "resultado", false).unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].ends_with("resultado_erros.csv"));
        assert!(!dir.path().join("resultado_dados.csv").exists());
    }

    #[test]
    fn test_write_report_empty_report_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_report(&BatchReport::default(), dir.path(), "resultado", false).unwrap();
        assert!(written.is_empty());
    }

    #[test]
    fn test_write_report_timestamped_names() {
        let dir = tempfile::tempdir().unwrap();
        let report = BatchReport {
            rows: vec![ArticleRow::new("T", "A", "")],
            errors: vec![],
            total_files: 1,
            usage: None,
        };

        let written = write_report(&report, dir.path(), "resultado", true).unwrap();
        let name = written[0].file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("resultado_"));
        assert!(name.ends_with("_dados.csv"));
        assert!(name.len() > "resultado__dados.csv".len());
    }
}
