use std::collections::hash_map::Values;
use std::iter::FromIterator;

use fnv::FnvHashMap as HashMap;

use crate::record::Record;

/// A hash index from record id to record, built once from a dataset.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordIndex {
    map: HashMap<u32, Record>,
}

impl RecordIndex {
    pub fn new() -> RecordIndex {
        RecordIndex {
            map: HashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> RecordIndex {
        RecordIndex {
            map: HashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Index every record in one pass. When two records share an id the
    /// later one wins.
    pub fn build(records: &[Record]) -> RecordIndex {
        let mut index = RecordIndex::with_capacity(records.len());
        for record in records {
            index.insert(*record);
        }
        index
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Return the record with `id`, or `None` if no record carries it.
    pub fn get(&self, id: u32) -> Option<&Record> {
        self.map.get(&id)
    }

    pub fn contains_key(&self, id: u32) -> bool {
        self.map.contains_key(&id)
    }

    /// Insert `record` under its id, returning the record it replaced.
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        self.map.insert(record.id, record)
    }

    /// Iterate over the indexed records in arbitrary order.
    pub fn records(&self) -> Values<'_, u32, Record> {
        self.map.values()
    }
}

impl FromIterator<Record> for RecordIndex {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> RecordIndex {
        let mut index = RecordIndex::new();
        for record in iter {
            index.insert(record);
        }
        index
    }
}
