//! Placeholder creation for expected identifier ranges.

use crate::{DiscRecord, RecordStore, StoreError};

/// Ensure a record exists for each uid `{prefix}_1 ..= {prefix}_{count}`.
///
/// Absent identifiers are created as placeholder records; existing records
/// are never touched, so repeated runs are idempotent. Returns only the
/// newly created records so the caller can render them without a second
/// fetch.
pub fn ensure_placeholders(
    store: &dyn RecordStore,
    prefix: &str,
    count: u32,
) -> Result<Vec<DiscRecord>, StoreError> {
    let mut created = Vec::new();

    for i in 1..=count {
        let uid = format!("{prefix}_{i}");
        if store.get(&uid)?.is_some() {
            continue;
        }
        let record = DiscRecord::placeholder(uid.as_str());
        store.set(&record)?;
        tracing::info!(uid = %uid, "Created placeholder record");
        created.push(record);
    }

    Ok(created)
}
