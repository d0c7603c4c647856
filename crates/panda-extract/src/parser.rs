//! Markdown table parsing for model responses.
//!
//! The model is instructed to answer with a three-column Markdown table.
//! This module turns that response into rows, or a typed failure when no
//! usable table is present. Failure never travels as a data row.

use crate::error::{ExtractError, ExtractResult};
use crate::models::ArticleRow;

/// Expected number of columns in the response table.
const FIELD_COUNT: usize = 3;

/// Parse the model's Markdown table into article rows.
///
/// Candidate lines are the lines containing `|`; prose around the table is
/// ignored. The first two candidates (header and separator) are discarded.
/// Each remaining candidate is split on `|`, the empty outer segments
/// produced by the delimiting pipes are dropped, every field is trimmed, and
/// only lines with exactly three fields survive. Lines with any other field
/// count are dropped silently, never repaired.
///
/// # Errors
///
/// Returns the unparseable-response error when no valid row remains. The
/// diagnostic distinguishes a response with no pipe-delimited lines at all
/// from one whose lines never produced three fields. An empty success set is
/// not representable at this boundary.
pub fn parse_table(markdown: &str) -> ExtractResult<Vec<ArticleRow>> {
    let candidates: Vec<&str> =
        markdown.trim().lines().filter(|line| line.contains('|')).collect();
    if candidates.is_empty() {
        return Err(ExtractError::unparseable("no pipe-delimited lines in response"));
    }

    // candidates[0] is the header, candidates[1] the separator row
    let rows: Vec<ArticleRow> = candidates.iter().skip(2).filter_map(|line| parse_row(line)).collect();

    if rows.is_empty() {
        return Err(ExtractError::unparseable("no table rows with exactly 3 fields"));
    }
    Ok(rows)
}

/// Split one candidate line into a row; `None` unless exactly three fields
/// remain after dropping the empty outer segments.
fn parse_row(line: &str) -> Option<ArticleRow> {
    let mut segments: Vec<&str> = line.split('|').collect();
    if segments.first().is_some_and(|s| s.trim().is_empty()) {
        segments.remove(0);
    }
    if segments.last().is_some_and(|s| s.trim().is_empty()) {
        segments.pop();
    }
    if segments.len() != FIELD_COUNT {
        return None;
    }

    let mut fields = segments.into_iter().map(|s| s.trim().to_string());
    Some(ArticleRow {
        title: fields.next()?,
        author: fields.next()?,
        email: fields.next()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "\
| TÍTULO | AUTOR | E-MAIL |
|--------|-------|--------|
| Redes Neurais | Maria Silva | maria@usp.br |
| Redes Neurais | João Souza | |
";

    #[test]
    fn test_well_formed_table() {
        let rows = parse_table(WELL_FORMED).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ArticleRow::new("Redes Neurais", "Maria Silva", "maria@usp.br"));
        assert_eq!(rows[1], ArticleRow::new("Redes Neurais", "João Souza", ""));
    }

    #[test]
    fn test_rows_without_outer_pipes() {
        let table = "a | b | c\n--- | --- | ---\nTítulo | Autor | autor@ufmg.br";
        let rows = parse_table(table).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].email, "autor@ufmg.br");
    }

    #[test]
    fn test_wrong_field_counts_dropped_without_affecting_siblings() {
        let table = "\
| T | A | E |
|---|---|---|
| only | two |
| keep | this | row |
| one | too | many | fields |
| keep | that | too |
";
        let rows = parse_table(table).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "keep");
        assert_eq!(rows[1].author, "that");
    }

    #[test]
    fn test_prose_around_table_is_ignored() {
        let response = "\
Claro! Aqui está a tabela extraída:

| TÍTULO | AUTOR | E-MAIL |
|---|---|---|
| Um Estudo | Ana Lima | ana@puc.br |

Espero ter ajudado.
";
        let rows = parse_table(response).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].author, "Ana Lima");
    }

    #[test]
    fn test_no_pipes_is_a_failure_with_diagnostic() {
        let err = parse_table("O texto não contém dados de artigo.").unwrap_err();
        assert!(err.to_string().contains("no pipe-delimited lines"));
    }

    #[test]
    fn test_header_and_separator_only_is_a_failure() {
        let err = parse_table("| T | A | E |\n|---|---|---|\n").unwrap_err();
        assert!(err.to_string().contains("no table rows with exactly 3 fields"));
    }

    #[test]
    fn test_empty_input_is_a_failure() {
        assert!(parse_table("").is_err());
        assert!(parse_table("   \n  \n").is_err());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let table = "|T|A|E|\n|-|-|-|\n|  padded title  |  someone  |  x@y.br  |";
        let rows = parse_table(table).unwrap();
        assert_eq!(rows[0], ArticleRow::new("padded title", "someone", "x@y.br"));
    }

    #[test]
    fn test_blank_middle_field_is_preserved() {
        let table = "|T|A|E|\n|-|-|-|\n| Um Título | | luiza@ufsc.br |";
        let rows = parse_table(table).unwrap();
        assert_eq!(rows[0].author, "");
        assert_eq!(rows[0].email, "luiza@ufsc.br");
    }
}
