use regex::Regex;

use crate::date;
use crate::delimiter::Delimiter;
use crate::error::MergeError;
use crate::schema::Schema;
use crate::source::Source;

/// Cells of one data line, aligned with the schema columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Row {
        Row {
            cells
        }
    }

    /// Split `line` by `delimiter`, trim the fields and rewrite dates to `M/d/yyyy`.
    ///
    /// # Examples
    /// ```
    /// use record_merger::delimiter::Delimiter;
    /// use record_merger::row::Row;
    /// let row = Row::parse("Smith | John | 01/01/1990", Delimiter::Pipe);
    /// assert_eq!(row.cells(), &vec!["Smith", "John", "1/1/1990"]);
    /// ```
    pub fn parse(line: &str, delimiter: Delimiter) -> Row {
        let cells = delimiter
            .split_trimmed(line)
            .into_iter()
            .map(|cell| date::normalize(&cell))
            .collect();
        Row {
            cells
        }
    }

    pub fn cells(&self) -> &Vec<String> {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, position: usize) -> Option<&str> {
        self.cells.get(position).map(|cell| cell.as_str())
    }

    pub fn into_cells(self) -> Vec<String> {
        self.cells
    }
}

/// Extract the rows of `source`, in source order.
///
/// The header, blank lines and lines matching `ignore_lines` are skipped. Every row must have
/// exactly as many cells as `schema` has columns.
pub fn extract_rows(
    source: &Source,
    delimiter: Delimiter,
    schema: &Schema,
    ignore_lines: Option<&Regex>,
) -> Result<Vec<Row>, MergeError> {
    let mut rows = Vec::new();
    for (line_number, line) in source.data_lines() {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(r) = ignore_lines {
            if r.is_match(line.trim()) {
                continue;
            }
        }

        let row = Row::parse(line, delimiter);
        if row.len() != schema.len() {
            return Err(
                MergeError::RowLengthMismatch {
                    source_id: source.id().to_string(),
                    line: line_number,
                    expected: schema.len(),
                    found: row.len(),
                }
            );
        }
        rows.push(row);
    }
    log::debug!("Extracted {} rows from {}", rows.len(), source.id());
    Ok(rows)
}
