//! Inventory domain: the warehouse document and the pure engines over it.
//!
//! Nothing here performs IO; the document is loaded elsewhere and every
//! function below is deterministic in its inputs.

pub mod aisle;
pub mod document;
pub mod filter;
pub mod grid;
pub mod layout;
pub mod view;

pub use aisle::{annotate, resolve_aisle, ResolvedItem, FALLBACK_AISLE};
pub use document::{InventoryDocument, Item, MapConfig, Zone};
pub use filter::{search, ItemFilter};
pub use grid::CellGrid;
pub use layout::{project, CellSize, ItemMarker, LayoutProjector, MapLayout, StockLevel, ZoneRect};
pub use view::{build_view, InventoryView, ViewMode, ViewParams};
