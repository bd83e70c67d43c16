//! Draft submit/delete workflow shared by the entity forms.
//!
//! A form keeps the loaded collection plus one draft record. Submitting validates the draft,
//! inserts or replaces it, and persists the whole collection. The in-memory collection is only
//! replaced after the store accepted the write.

use serde::Serialize;
use thiserror::Error;

use crate::{
    append_record, remove_record, replace_record, try_set_records, CatalogEntry, RecordStore,
    RecordStoreError, StoredRecord, UserRecord,
};

/// Records editable through a form draft.
pub trait EditableRecord: StoredRecord + Clone + Serialize {
    /// Returns whether every required field holds a value.
    fn has_required_fields(&self) -> bool;

    /// Replaces the record id; used when a create-mode draft is accepted.
    fn set_record_id(&mut self, id: String);

    /// Display name used in notices and confirmation prompts.
    fn display_name(&self) -> &str;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures surfaced to the form user.
pub enum FormError {
    /// At least one required field is blank.
    #[error("Todos los campos son obligatorios")]
    MissingFields,
    /// The record being edited or deleted is no longer in the collection.
    #[error("El registro seleccionado ya no existe")]
    UnknownRecord,
    /// The collection could not be persisted.
    #[error("No se pudieron guardar los cambios")]
    Store(#[from] RecordStoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of an accepted draft.
pub enum SubmitOutcome {
    /// The draft was appended as a new record.
    Created,
    /// The draft replaced the record with the same id.
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual tone of a form notice.
pub enum NoticeTone {
    /// Successful operation.
    Success,
    /// Rejected or failed operation.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Transient message rendered above a form after an operation.
pub struct FormNotice {
    /// Notice tone.
    pub tone: NoticeTone,
    /// Notice text.
    pub message: String,
}

impl FormNotice {
    /// Builds a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            tone: NoticeTone::Success,
            message: message.into(),
        }
    }

    /// Builds an error notice from a form failure.
    pub fn error(err: &FormError) -> Self {
        Self {
            tone: NoticeTone::Error,
            message: err.to_string(),
        }
    }
}

fn trimmed_is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns whether every value in `fields` is non-blank.
pub fn all_present(fields: &[&str]) -> bool {
    !fields.iter().any(|field| trimmed_is_blank(field))
}

/// Validates and persists a form draft.
///
/// With `editing` unset the draft receives `new_id()` and is appended; otherwise it replaces the
/// record sharing its id. `records` is updated only after the store accepted the new collection.
///
/// # Errors
///
/// Returns [`FormError::MissingFields`] when validation fails, [`FormError::UnknownRecord`] when
/// the edited record vanished, and [`FormError::Store`] when the write fails.
pub fn submit_draft<S, T>(
    store: &S,
    key: &str,
    records: &mut Vec<T>,
    mut draft: T,
    editing: bool,
    new_id: impl FnOnce() -> String,
) -> Result<SubmitOutcome, FormError>
where
    S: RecordStore + ?Sized,
    T: EditableRecord,
{
    if !draft.has_required_fields() {
        return Err(FormError::MissingFields);
    }

    let mut next = records.clone();
    let outcome = if editing {
        if !replace_record(&mut next, draft) {
            return Err(FormError::UnknownRecord);
        }
        SubmitOutcome::Updated
    } else {
        draft.set_record_id(new_id());
        append_record(&mut next, draft);
        SubmitOutcome::Created
    };

    try_set_records(store, key, &next)?;
    *records = next;
    Ok(outcome)
}

/// Removes the record with `id` and persists the remaining collection.
///
/// # Errors
///
/// Returns [`FormError::UnknownRecord`] when no record has `id` and [`FormError::Store`] when the
/// write fails; `records` is left untouched in both cases.
pub fn delete_record<S, T>(
    store: &S,
    key: &str,
    records: &mut Vec<T>,
    id: &str,
) -> Result<T, FormError>
where
    S: RecordStore + ?Sized,
    T: EditableRecord,
{
    let mut next = records.clone();
    let removed = remove_record(&mut next, id).ok_or(FormError::UnknownRecord)?;
    try_set_records(store, key, &next)?;
    *records = next;
    Ok(removed)
}

impl EditableRecord for CatalogEntry {
    fn has_required_fields(&self) -> bool {
        all_present(&[self.name.as_str(), self.code.as_str()])
    }

    fn set_record_id(&mut self, id: String) {
        self.id = id;
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl EditableRecord for UserRecord {
    fn has_required_fields(&self) -> bool {
        all_present(&[
            self.name.as_str(),
            self.username.as_str(),
            self.email.as_str(),
            self.city_id.as_str(),
            self.department_id.as_str(),
            self.profession_id.as_str(),
        ])
    }

    fn set_record_id(&mut self, id: String) {
        self.id = id;
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{get_records, CatalogEntry, MemoryRecordStore};

    struct RejectingStore;

    impl RecordStore for RejectingStore {
        fn load_raw(&self, _key: &str) -> Result<Option<String>, RecordStoreError> {
            Ok(None)
        }

        fn save_raw(&self, key: &str, _raw_json: &str) -> Result<(), RecordStoreError> {
            Err(RecordStoreError::Backend {
                operation: "write",
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            })
        }
    }

    fn draft(id: &str, name: &str, code: &str) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            is_active: true,
        }
    }

    #[test]
    fn blank_required_field_is_rejected_without_saving() {
        let store = MemoryRecordStore::default();
        let mut records = Vec::new();
        let err = submit_draft(
            &store,
            "cities",
            &mut records,
            draft("", "Pasto", "  "),
            false,
            || "new".to_string(),
        )
        .unwrap_err();

        assert_eq!(err, FormError::MissingFields);
        assert_eq!(err.to_string(), "Todos los campos son obligatorios");
        assert!(records.is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn create_assigns_fresh_id_and_persists() {
        let store = MemoryRecordStore::default();
        let mut records = vec![draft("1", "Bogotá", "BOG")];
        let outcome = submit_draft(
            &store,
            "cities",
            &mut records,
            draft("", "Pasto", "PSO"),
            false,
            || "abc".to_string(),
        )
        .expect("create");

        assert_eq!(outcome, SubmitOutcome::Created);
        assert_eq!(records[1], draft("abc", "Pasto", "PSO"));
        let stored: Vec<CatalogEntry> = get_records(&store, "cities");
        assert_eq!(stored, records);
    }

    #[test]
    fn edit_replaces_in_place_and_rejects_vanished_records() {
        let store = MemoryRecordStore::default();
        let mut records = vec![draft("1", "Bogotá", "BOG"), draft("2", "Cali", "CAL")];

        let outcome = submit_draft(
            &store,
            "cities",
            &mut records,
            draft("1", "Bogotá D.C.", "BOG"),
            true,
            || unreachable!("edit keeps the id"),
        )
        .expect("edit");
        assert_eq!(outcome, SubmitOutcome::Updated);
        assert_eq!(records[0].name, "Bogotá D.C.");
        assert_eq!(records.len(), 2);

        let err = submit_draft(
            &store,
            "cities",
            &mut records,
            draft("9", "Tunja", "TUN"),
            true,
            String::new,
        )
        .unwrap_err();
        assert_eq!(err, FormError::UnknownRecord);
    }

    #[test]
    fn failed_write_keeps_the_loaded_collection() {
        let mut records = vec![draft("1", "Bogotá", "BOG")];
        let err = submit_draft(
            &RejectingStore,
            "cities",
            &mut records,
            draft("", "Cali", "CAL"),
            false,
            || "x".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, FormError::Store(_)));
        assert_eq!(records.len(), 1);

        let err = delete_record(&RejectingStore, "cities", &mut records, "1").unwrap_err();
        assert!(matches!(err, FormError::Store(_)));
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn user_drafts_require_every_reference() {
        let mut user = UserRecord {
            id: String::new(),
            name: "Ana Ruiz".to_string(),
            username: "aruiz".to_string(),
            email: "aruiz@email.com".to_string(),
            city_id: "1".to_string(),
            department_id: "1".to_string(),
            profession_id: String::new(),
            is_active: true,
        };
        assert!(!user.has_required_fields());
        user.profession_id = "3".to_string();
        assert!(user.has_required_fields());
    }

    #[test]
    fn delete_removes_by_id() {
        let store = MemoryRecordStore::default();
        let mut records = vec![draft("1", "Bogotá", "BOG"), draft("2", "Cali", "CAL")];
        let removed = delete_record(&store, "cities", &mut records, "1").expect("delete");
        assert_eq!(removed.name, "Bogotá");
        assert_eq!(records, vec![draft("2", "Cali", "CAL")]);
        assert_eq!(
            delete_record(&store, "cities", &mut records, "1"),
            Err(FormError::UnknownRecord)
        );
    }
}
