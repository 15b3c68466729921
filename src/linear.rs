use crate::record::Record;

/// Scan `records` from the front and return the first one with `id`.
pub fn find_by_id(records: &[Record], id: u32) -> Option<&Record> {
    for record in records {
        if record.id == id {
            return Some(record);
        }
    }
    None
}
