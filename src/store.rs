use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::delimiter::Delimiter;

/// One stored line and the delimiter detected for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub line: String,
    pub delimiter: char,
}

impl Record {
    pub fn delimiter(&self) -> Option<Delimiter> {
        Delimiter::from_char(self.delimiter)
    }
}

/// Storage of records with autoincrement ids starting at 1.
pub trait RecordStore: Send + Sync {
    /// Store `line` and assign it the next id.
    fn create(&self, line: String, delimiter: Delimiter) -> Record;

    /// All records in id order
    fn list(&self) -> Vec<Record>;

    fn get(&self, id: u64) -> Option<Record>;
}

#[derive(Default)]
struct Table {
    records: Vec<Record>,
    next_id: u64,
}

/// [RecordStore] held in memory, one lock guards the records and the id counter.
#[derive(Default)]
pub struct MemoryRecordStore {
    table: Mutex<Table>,
}

impl MemoryRecordStore {
    pub fn new() -> MemoryRecordStore {
        MemoryRecordStore::default()
    }

    fn table(&self) -> std::sync::MutexGuard<'_, Table> {
        // a panic while holding the lock cannot leave a half written record behind
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RecordStore for MemoryRecordStore {
    fn create(&self, line: String, delimiter: Delimiter) -> Record {
        let mut table = self.table();
        table.next_id += 1;
        let record = Record {
            id: table.next_id,
            line,
            delimiter: delimiter.as_char(),
        };
        table.records.push(record.clone());
        log::debug!("Stored record {}", record.id);
        record
    }

    fn list(&self) -> Vec<Record> {
        self.table().records.clone()
    }

    fn get(&self, id: u64) -> Option<Record> {
        self.table()
            .records
            .iter()
            .find(|record| record.id == id)
            .cloned()
    }
}
