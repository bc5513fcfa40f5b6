use std::sync::RwLock;

use stockmap_inventory::InventoryDocument;

use super::r#trait::{InventoryStore, StoreError};

/// In-memory inventory store.
///
/// Intended for tests/dev. Holding `None` behaves like a missing file.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    doc: RwLock<Option<InventoryDocument>>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(doc: InventoryDocument) -> Self {
        Self {
            doc: RwLock::new(Some(doc)),
        }
    }

    /// Swap the backing document (simulates an external edit).
    pub fn replace(&self, doc: Option<InventoryDocument>) {
        if let Ok(mut guard) = self.doc.write() {
            *guard = doc;
        }
    }
}

impl InventoryStore for InMemoryInventoryStore {
    fn load(&self) -> Result<InventoryDocument, StoreError> {
        let guard = match self.doc.read() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        Ok(guard.clone().unwrap_or_default())
    }
}
