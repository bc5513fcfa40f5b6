//! Read-only inventory document store boundary.
//!
//! A store hands out a freshly loaded [`InventoryDocument`] on every call; no
//! state is cached between loads, so edits to the backing source show up on
//! the next request.
//!
//! [`InventoryDocument`]: stockmap_inventory::InventoryDocument

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryInventoryStore;
pub use json_file::JsonFileStore;
pub use r#trait::{InventoryStore, StoreError};
