use std::rc::Rc;

use platform_host::{HostServices, RecordStore};

use crate::WebRecordStore;

/// Builds the record-store adapter for browser builds.
pub fn record_store() -> Rc<dyn RecordStore> {
    Rc::new(WebRecordStore)
}

/// Builds the host service bundle injected into the desktop runtime.
pub fn build_host_services() -> HostServices {
    HostServices::new(record_store())
}
