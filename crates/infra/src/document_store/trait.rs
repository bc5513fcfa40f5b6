use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use stockmap_inventory::InventoryDocument;

/// Inventory store errors.
///
/// A missing document is not an error (stores fall back to the default
/// document); everything else is surfaced to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read inventory document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse inventory document {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of the inventory document.
///
/// `load` reads the whole document atomically on each call; there is no
/// partial-load recovery.
pub trait InventoryStore: Send + Sync {
    fn load(&self) -> Result<InventoryDocument, StoreError>;
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn load(&self) -> Result<InventoryDocument, StoreError> {
        (**self).load()
    }
}
