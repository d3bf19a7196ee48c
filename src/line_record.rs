use std::cmp::Ordering;

use crate::key::Key;
use crate::row::Row;
use crate::sort_key::SortKey;

/// A row paired with the comparison keys of a sort specification.
#[derive(Debug)]
pub(crate) struct LineRecord {
    row: Row,
    keys: Vec<Key>,
}

impl LineRecord {
    /// Callers guarantee that every key position is within the row.
    pub(crate) fn new(row: Row, sort_keys: &[SortKey]) -> LineRecord {
        let keys = sort_keys
            .iter()
            .map(|sort_key| Key::new(row.cell(sort_key.position()).unwrap_or_default()))
            .collect();
        LineRecord {
            row,
            keys,
        }
    }

    pub(crate) fn keys(&self) -> &Vec<Key> {
        &self.keys
    }

    /// Compare key by key, applying the order of each sort key, until one differs.
    pub(crate) fn compare(&self, other: &LineRecord, sort_keys: &[SortKey]) -> Ordering {
        for ((key, other_key), sort_key) in self.keys.iter().zip(other.keys.iter()).zip(sort_keys) {
            let ordering = sort_key.order().apply(key.cmp(other_key));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    pub fn row(self) -> Row {
        self.row
    }
}
