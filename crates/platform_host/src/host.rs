//! Shared host-service bundle injected into the desktop runtime and mounted apps.

use std::rc::Rc;

use crate::{MemoryRecordStore, RecordStore};

/// Runtime-selected host service bundle injected into the shared desktop runtime.
///
/// Environment-specific adapter selection happens before this bundle crosses into
/// `desktop_runtime`, so the runtime and app crates only see the [`RecordStore`] contract.
#[derive(Clone)]
pub struct HostServices {
    /// Per-key record collection store shared by every entity form.
    pub records: Rc<dyn RecordStore>,
}

impl HostServices {
    /// Wraps a concrete record store adapter.
    pub fn new(records: Rc<dyn RecordStore>) -> Self {
        Self { records }
    }

    /// Builds a bundle backed by a fresh [`MemoryRecordStore`].
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryRecordStore::default()))
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices").finish_non_exhaustive()
    }
}
