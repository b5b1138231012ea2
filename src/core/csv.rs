//! Delimited text: a small quote-aware reader and writer for board CSVs.

use std::io::{self, Write};
use std::mem::take;

#[cfg(test)]
mod tests;

/// Parse CSV text into rows of fields.
///
/// Handles quoted fields, doubled quotes inside quotes and CRLF line endings.
/// Blank lines are skipped. Each row carries its 1-based source line number
/// so import errors can point at the offending line.
pub fn parse_rows(text: &str) -> Vec<(usize, Vec<String>)> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row: Vec<String> = Vec::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut row_start = 1;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if matches!(chars.peek(), Some('"')) {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if !is_blank(&row) {
                    rows.push((row_start, take(&mut row)));
                } else {
                    row.clear();
                }
                line += 1;
                row_start = line;
            }
            _ => {
                if ch == '\n' {
                    line += 1;
                }
                field.push(ch);
            }
        }
    }

    row.push(field);
    if !is_blank(&row) {
        rows.push((row_start, row));
    }

    rows
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|f| f.trim().is_empty())
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write one row, quoting fields that contain separators, quotes or newlines.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S]) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            w.write_all(b",")?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    writeln!(w)
}

/// Header-aware view over parsed rows.
///
/// Columns are looked up by case-insensitive header name, so input files may
/// order their columns freely.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<(usize, Vec<String>)>,
}

impl Table {
    /// Parse text whose first non-blank row is the header.
    pub fn parse(text: &str) -> Option<Self> {
        let mut rows = parse_rows(text);
        if rows.is_empty() {
            return None;
        }
        let (_, header_row) = rows.remove(0);
        let headers = header_row
            .into_iter()
            .map(|h| h.trim().trim_start_matches('\u{feff}').to_lowercase())
            .collect();
        Some(Self { headers, rows })
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        let name = name.to_lowercase();
        self.headers.iter().position(|h| *h == name)
    }

    pub fn rows(&self) -> &[(usize, Vec<String>)] {
        &self.rows
    }
}

/// Fetch a trimmed cell, treating missing trailing cells as empty.
pub fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(|s| s.trim()).unwrap_or("")
}
