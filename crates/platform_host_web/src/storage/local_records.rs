//! `localStorage`-backed record store implementation.
//!
//! The browser API is synchronous, so the adapter maps each [`RecordStore`] call directly onto
//! `getItem`/`setItem` for the collection key.

use platform_host::{RecordStore, RecordStoreError};

#[derive(Debug, Clone, Copy, Default)]
/// Browser record store backed by `window.localStorage`.
pub struct WebRecordStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, RecordStoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(RecordStoreError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn js_message(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl RecordStore for WebRecordStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, RecordStoreError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| RecordStoreError::Backend {
                    operation: "read",
                    key: key.to_string(),
                    message: js_message(&e),
                })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), RecordStoreError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, raw_json)
                .map_err(|e| RecordStoreError::Backend {
                    operation: "write",
                    key: key.to_string(),
                    message: js_message(&e),
                })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Ok(())
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use platform_host::{get_records, CatalogEntry};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn host_builds_read_as_empty_and_accept_writes() {
        let store = WebRecordStore;
        assert_eq!(store.load_raw("cities"), Ok(None));
        assert_eq!(store.save_raw("cities", "[]"), Ok(()));
        let records: Vec<CatalogEntry> = get_records(&store, "cities");
        assert!(records.is_empty());
    }
}
