use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use stockmap_inventory::InventoryDocument;

use super::r#trait::{InventoryStore, StoreError};

/// Inventory store backed by a JSON file on disk.
///
/// The file is re-read on every `load`, so edits take effect without a restart.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InventoryStore for JsonFileStore {
    fn load(&self) -> Result<InventoryDocument, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "inventory document missing; using default");
                return Ok(InventoryDocument::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let doc: InventoryDocument = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            path = %self.path.display(),
            items = doc.items.len(),
            zones = doc.zones.len(),
            "inventory document loaded"
        );
        Ok(doc)
    }
}
