//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer. Record collections persist to
//! `window.localStorage` and destructive actions confirm through `window.confirm`. Non-wasm
//! builds compile the same adapters as inert stand-ins so the runtime crates stay testable on the
//! host toolchain.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod dialogs;
pub mod storage;

pub use adapters::{build_host_services, record_store};
pub use dialogs::confirm_action;
pub use storage::local_records::WebRecordStore;
