use std::sync::Arc;

use stockmap_infra::{InventoryStore, StoreError};
use stockmap_inventory::InventoryDocument;

/// Shared handler state: only the document store.
///
/// Every request loads its own copy of the document, so nothing here is mutated
/// after startup.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn InventoryStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    /// Load the current document; failures are logged before being returned.
    pub fn load_document(&self) -> Result<InventoryDocument, StoreError> {
        self.store.load().inspect_err(|e| {
            tracing::error!(error = %e, "inventory document load failed");
        })
    }
}
