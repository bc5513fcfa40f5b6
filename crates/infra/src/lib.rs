//! Infrastructure layer: loading the inventory document from its backing source.

pub mod document_store;

pub use document_store::{InMemoryInventoryStore, InventoryStore, JsonFileStore, StoreError};
