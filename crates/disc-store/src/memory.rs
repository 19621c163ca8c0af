//! In-memory record store for tests and offline runs.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::{DiscRecord, RecordStore, StoreError};

/// Hash-map backed [`RecordStore`] fake.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, DiscRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with the given records.
    pub fn with_records(records: impl IntoIterator<Item = DiscRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|r| (r.uid.clone(), r))
            .collect::<HashMap<_, _>>();
        Self {
            records: Mutex::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for MemoryStore {
    fn list_all(&self) -> Result<Vec<DiscRecord>, StoreError> {
        let map = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        let mut records: Vec<DiscRecord> = map.values().cloned().collect();
        // Stable order for a given store state.
        records.sort_by(|a, b| a.uid.cmp(&b.uid));
        Ok(records)
    }

    fn get(&self, uid: &str) -> Result<Option<DiscRecord>, StoreError> {
        let map = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.get(uid).cloned())
    }

    fn set(&self, record: &DiscRecord) -> Result<(), StoreError> {
        let mut map = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        map.insert(record.uid.clone(), record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let store = MemoryStore::new();
        let record = DiscRecord {
            uid: "disc_1".into(),
            company: "Acme".into(),
            mold: "Driver".into(),
            color: "Red".into(),
        };
        store.set(&record).unwrap();
        assert_eq!(store.get("disc_1").unwrap(), Some(record));
        assert_eq!(store.get("disc_2").unwrap(), None);
    }

    #[test]
    fn list_all_is_sorted_by_uid() {
        let store = MemoryStore::with_records([
            DiscRecord::placeholder("disc_b"),
            DiscRecord::placeholder("disc_a"),
            DiscRecord::placeholder("disc_c"),
        ]);
        let uids: Vec<String> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|r| r.uid)
            .collect();
        assert_eq!(uids, ["disc_a", "disc_b", "disc_c"]);
    }

    #[test]
    fn set_replaces_existing_record() {
        let store = MemoryStore::with_records([DiscRecord::placeholder("disc_1")]);
        let updated = DiscRecord {
            uid: "disc_1".into(),
            company: "Acme".into(),
            mold: "Driver".into(),
            color: "Red".into(),
        };
        store.set(&updated).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("disc_1").unwrap().unwrap().company, "Acme");
    }
}
