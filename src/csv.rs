use std::borrow::Cow;

use crate::row::Row;

/// Line separator of the host platform
#[cfg(windows)]
pub const PLATFORM_ENDL: &str = "\r\n";
/// Line separator of the host platform
#[cfg(not(windows))]
pub const PLATFORM_ENDL: &str = "\n";

/// Quote a cell when it contains a comma or a line break, doubling its inner quotes.
///
/// Any other cell is written verbatim, double quotes included, so that splitting a line on `,`
/// gives back its cells.
pub fn escape(cell: &str) -> Cow<'_, str> {
    if cell.contains(&[',', '\r', '\n'][..]) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

/// Join cells into one CSV line.
pub fn format_line<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|cell| escape(cell.as_ref()))
        .collect::<Vec<Cow<'_, str>>>()
        .join(",")
}

/// Format `rows` as CSV lines joined by `endl`, without a header and without a trailing separator.
pub fn format_body(rows: &[Row], endl: &str) -> String {
    rows.iter()
        .map(|row| format_line(row.cells().as_slice()))
        .collect::<Vec<String>>()
        .join(endl)
}

/// Format a complete CSV document: the header line, `endl`, then the body.
///
/// # Examples
/// ```
/// use record_merger::csv::format_csv;
/// use record_merger::row::Row;
/// let columns = vec!["Name".to_string(), "Color".to_string()];
/// let rows = vec![Row::new(vec!["Smith".to_string(), "Blue".to_string()])];
/// assert_eq!(format_csv(&columns, &rows, "\n"), "Name,Color\nSmith,Blue");
/// ```
pub fn format_csv(columns: &[String], rows: &[Row], endl: &str) -> String {
    let mut csv = format_line(columns);
    csv.push_str(endl);
    csv.push_str(&format_body(rows, endl));
    csv
}
