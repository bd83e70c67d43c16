//! Storage contracts and in-memory adapters.

pub mod record_store;
