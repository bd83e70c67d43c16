//! Per-key record collection storage contracts and adapters.
//!
//! Every collection is stored as one JSON array of objects under a string key. Reads tolerate a
//! missing key and malformed content by yielding an empty collection; the fallible `try_*`
//! helpers expose the underlying failure so callers can log it.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures surfaced by [`RecordStore`] adapters and the typed collection helpers.
pub enum RecordStoreError {
    /// The backing storage is not reachable on this host.
    #[error("record storage unavailable")]
    Unavailable,
    /// The backing storage rejected a read or write.
    #[error("record storage {operation} failed for `{key}`: {message}")]
    Backend {
        /// Operation that failed (`read` or `write`).
        operation: &'static str,
        /// Collection key involved.
        key: String,
        /// Backend-provided failure description.
        message: String,
    },
    /// Stored content for a collection key is not a valid record array.
    #[error("malformed records under `{key}`: {message}")]
    Malformed {
        /// Collection key involved.
        key: String,
        /// Parser failure description.
        message: String,
    },
    /// Records could not be serialized for writing.
    #[error("failed to serialize records for `{key}`: {message}")]
    Serialize {
        /// Collection key involved.
        key: String,
        /// Serializer failure description.
        message: String,
    },
}

/// Host service storing raw JSON text per collection key.
pub trait RecordStore {
    /// Loads the raw JSON text stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be read.
    fn load_raw(&self, key: &str) -> Result<Option<String>, RecordStoreError>;

    /// Replaces the raw JSON text stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage rejects the write.
    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), RecordStoreError>;
}

#[derive(Debug, Clone, Default)]
/// In-memory record store keyed by collection key.
pub struct MemoryRecordStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryRecordStore {
    /// Returns the number of stored collection keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns whether no collection key has been written yet.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl RecordStore for MemoryRecordStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, RecordStoreError> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), RecordStoreError> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        Ok(())
    }
}

/// Returns whether `key` currently holds non-empty content.
///
/// Read failures count as absent.
pub fn has_collection<S: RecordStore + ?Sized>(store: &S, key: &str) -> bool {
    matches!(store.load_raw(key), Ok(Some(raw)) if !raw.trim().is_empty())
}

/// Loads and deserializes the record collection stored under `key`.
///
/// A missing or blank key yields an empty collection.
///
/// # Errors
///
/// Returns an error when the store read fails or the stored text is not a record array.
pub fn try_get_records<S: RecordStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Vec<T>, RecordStoreError> {
    let Some(raw) = store.load_raw(key)? else {
        return Ok(Vec::new());
    };
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&raw).map_err(|err| RecordStoreError::Malformed {
        key: key.to_string(),
        message: err.to_string(),
    })
}

/// Loads the record collection stored under `key`, recovering every failure as empty.
pub fn get_records<S: RecordStore + ?Sized, T: DeserializeOwned>(store: &S, key: &str) -> Vec<T> {
    try_get_records(store, key).unwrap_or_default()
}

/// Serializes and saves `records` as the collection stored under `key`.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn try_set_records<S: RecordStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    records: &[T],
) -> Result<(), RecordStoreError> {
    let raw = serde_json::to_string(records).map_err(|err| RecordStoreError::Serialize {
        key: key.to_string(),
        message: err.to_string(),
    })?;
    store.save_raw(key, &raw)
}

/// Saves `records` under `key` and reports whether the write succeeded.
pub fn set_records<S: RecordStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    records: &[T],
) -> bool {
    try_set_records(store, key, records).is_ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::records::CatalogEntry;

    struct FailingStore;

    impl RecordStore for FailingStore {
        fn load_raw(&self, _key: &str) -> Result<Option<String>, RecordStoreError> {
            Err(RecordStoreError::Unavailable)
        }

        fn save_raw(&self, _key: &str, _raw_json: &str) -> Result<(), RecordStoreError> {
            Err(RecordStoreError::Unavailable)
        }
    }

    fn bogota() -> CatalogEntry {
        CatalogEntry {
            id: "1".to_string(),
            name: "Bogotá".to_string(),
            code: "BOG".to_string(),
            is_active: true,
        }
    }

    #[test]
    fn missing_key_reads_as_empty_collection() {
        let store = MemoryRecordStore::default();
        let records: Vec<CatalogEntry> = get_records(&store, "cities");
        assert!(records.is_empty());
        assert!(!has_collection(&store, "cities"));
    }

    #[test]
    fn malformed_content_reads_as_empty_but_reports_through_try() {
        let store = MemoryRecordStore::default();
        store.save_raw("cities", "{not json").expect("save");

        let records: Vec<CatalogEntry> = get_records(&store, "cities");
        assert!(records.is_empty());

        let err = try_get_records::<_, CatalogEntry>(&store, "cities").unwrap_err();
        assert!(matches!(err, RecordStoreError::Malformed { ref key, .. } if key == "cities"));
    }

    #[test]
    fn wrong_shape_is_treated_as_malformed() {
        let store = MemoryRecordStore::default();
        store
            .save_raw("cities", r#"{"id":"1","name":"Bogotá"}"#)
            .expect("save");
        assert!(try_get_records::<_, CatalogEntry>(&store, "cities").is_err());
    }

    #[test]
    fn blank_content_counts_as_absent() {
        let store = MemoryRecordStore::default();
        store.save_raw("cities", "  ").expect("save");
        assert!(!has_collection(&store, "cities"));
        assert_eq!(
            try_get_records::<_, CatalogEntry>(&store, "cities").expect("blank reads"),
            Vec::new()
        );
    }

    #[test]
    fn saved_collection_is_a_camel_case_json_array() {
        let store = MemoryRecordStore::default();
        assert!(set_records(&store, "cities", &[bogota()]));

        let raw = store.load_raw("cities").expect("load").expect("present");
        assert_eq!(
            raw,
            r#"[{"id":"1","name":"Bogotá","code":"BOG","isActive":true}]"#
        );
        let records: Vec<CatalogEntry> = get_records(&store, "cities");
        assert_eq!(records, vec![bogota()]);
    }

    #[test]
    fn failing_backend_recovers_on_read_and_reports_false_on_write() {
        let store = FailingStore;
        let records: Vec<CatalogEntry> = get_records(&store, "cities");
        assert!(records.is_empty());
        assert!(!set_records(&store, "cities", &[bogota()]));
        assert_eq!(
            try_set_records(&store, "cities", &[bogota()]),
            Err(RecordStoreError::Unavailable)
        );
    }
}
