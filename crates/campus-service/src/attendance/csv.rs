//! Minimal CSV parsing for attendance sources.
//!
//! Handles quoted fields and doubled-quote escapes; nothing more. The
//! attendance sources are exports with a fixed header row, so a general
//! CSV reader is not needed.

use campus_core::error::AppError;
use campus_core::result::AppResult;

/// A parsed CSV source: lowercased, trimmed headers plus data rows.
#[derive(Debug, Clone)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Parse CSV text. Blank lines are ignored. Fails if there is no
    /// header row or no data rows.
    pub fn parse(text: &str) -> AppResult<Self> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.len() < 2 {
            return Err(AppError::validation("CSV has no data rows"));
        }

        let headers = parse_line(lines[0])
            .into_iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let rows = lines[1..].iter().map(|line| parse_line(line)).collect();

        Ok(Self { headers, rows })
    }

    /// Index of a column by (lowercase) name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// A cell by row and optional column index, trimmed; "" when the
    /// column is absent or the row is short.
    pub fn cell<'a>(&'a self, row: &'a [String], column: Option<usize>) -> &'a str {
        column
            .and_then(|idx| row.get(idx))
            .map(|cell| cell.trim())
            .unwrap_or("")
    }
}

/// Split one CSV line into trimmed fields, honoring double quotes and
/// `""` escapes inside quoted fields.
fn parse_line(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                out.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    out.push(current);

    out.into_iter().map(|f| f.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_fields() {
        assert_eq!(parse_line("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(parse_line("a, b , c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn honors_quotes_and_escapes() {
        assert_eq!(
            parse_line(r#"AAI701,"Singh, Amar","said ""hi""""#),
            vec!["AAI701", "Singh, Amar", r#"said "hi""#]
        );
    }

    #[test]
    fn trailing_empty_field_is_kept() {
        assert_eq!(parse_line("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn parses_headers_case_insensitively() {
        let table = CsvTable::parse("Student_ID,Date\nAAI701,2026-01-05\n").unwrap();
        assert_eq!(table.column("student_id"), Some(0));
        assert_eq!(table.column("date"), Some(1));
        assert_eq!(table.column("remarks"), None);
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn rejects_header_only_input() {
        let err = CsvTable::parse("student_id,date\n").unwrap_err();
        assert_eq!(err.kind, campus_core::error::ErrorKind::Validation);
    }
}
