//! Typed host-domain contracts and shared record models used across runtime, apps, and browser
//! adapters.
//!
//! This crate is the API-first boundary for persistence. It exposes the per-key record store
//! contract, the record models stored under each collection key, the draft editing workflow
//! shared by the entity forms, first-run seed data, and the host service bundle. The concrete
//! browser adapter lives in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod editor;
pub mod host;
pub mod records;
pub mod seed;
pub mod storage;

pub use editor::{
    all_present, delete_record, submit_draft, EditableRecord, FormError, FormNotice, NoticeTone,
    SubmitOutcome,
};
pub use host::HostServices;
pub use records::{
    append_record, find_record, remove_record, replace_record, CatalogEntry, Collection,
    StoredRecord, UserRecord,
};
pub use seed::{
    seed_cities, seed_departments, seed_missing_collections, seed_professions, seed_records_for,
    seed_users,
};
pub use storage::record_store::{
    get_records, has_collection, set_records, try_get_records, try_set_records,
    MemoryRecordStore, RecordStore, RecordStoreError,
};
