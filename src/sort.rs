use crate::field_type::FieldType;
use crate::line_record::LineRecord;
use crate::row::Row;
use crate::sort_key::SortKey;

/// Stable sort of `rows` by `sort_keys`, the first key primary and the next ones tie breakers.
///
/// Cells parsing as dates compare chronologically, other cells compare as text, and a date
/// sorts before text. Rows comparing equal on all keys keep their relative order, and an empty
/// `sort_keys` leaves the rows untouched.
///
/// # Examples
/// ```
/// use record_merger::delimiter::Delimiter;
/// use record_merger::order::Order;
/// use record_merger::row::Row;
/// use record_merger::sort::sort_rows;
/// use record_merger::sort_key::SortKey;
///
/// let rows = vec![
///     Row::parse("Smith,5/5/1993", Delimiter::Comma),
///     Row::parse("Miller,12/12/1985", Delimiter::Comma),
/// ];
/// let sorted = sort_rows(rows, &[SortKey::new(1, Order::Asc)]);
/// assert_eq!(sorted[0].cell(0), Some("Miller"));
/// ```
pub fn sort_rows(rows: Vec<Row>, sort_keys: &[SortKey]) -> Vec<Row> {
    if sort_keys.is_empty() {
        return rows;
    }

    let mut line_records: Vec<LineRecord> = rows
        .into_iter()
        .map(|row| LineRecord::new(row, sort_keys))
        .collect();
    log_mixed_types(&line_records, sort_keys);

    // Vec::sort_by is stable
    line_records.sort_by(|a, b| a.compare(b, sort_keys));
    line_records
        .into_iter()
        .map(|line_record| line_record.row())
        .collect()
}

fn log_mixed_types(line_records: &[LineRecord], sort_keys: &[SortKey]) {
    for (i, sort_key) in sort_keys.iter().enumerate() {
        let dates = line_records
            .iter()
            .filter(|line_record| line_record.keys()[i].field_type() == FieldType::Date)
            .count();
        if dates > 0 && dates < line_records.len() {
            log::debug!(
                "Sort key {} mixes {} date and {} text values, dates sort first",
                sort_key,
                dates,
                line_records.len() - dates,
            );
        }
    }
}
