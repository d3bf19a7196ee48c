use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::date;
use crate::field_type::FieldType;

/// Comparison value of a single cell.
///
/// The type is decided per cell, not per column, so a column may hold both variants. A date
/// always compares less than text.
#[derive(Debug)]
pub(crate) enum Key {
    Date {
        d: NaiveDate
    },
    Text {
        s: String
    },
}

impl Key {
    pub(crate) fn new(cell: &str) -> Key {
        match date::parse(cell) {
            Some(d) => Key::Date { d },
            None => Key::Text { s: cell.to_string() },
        }
    }

    pub(crate) fn field_type(&self) -> FieldType {
        match self {
            Key::Date { .. } => FieldType::Date,
            Key::Text { .. } => FieldType::Text,
        }
    }
}

impl Eq for Key {}

impl PartialEq<Self> for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd<Self> for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::Date { d }, Key::Date { d: other }) => d.cmp(other),
            (Key::Text { s }, Key::Text { s: other }) => s.as_str().cmp(other.as_str()),
            (Key::Date { .. }, Key::Text { .. }) => Ordering::Less,
            (Key::Text { .. }, Key::Date { .. }) => Ordering::Greater,
        }
    }
}
