//! Page-render composition: request parameters → complete view model.
//!
//! This is the only place where filter, aisle resolution, grid bucketing and
//! layout projection meet. Each step stays a pure function of the document.

use serde::Serialize;

use crate::aisle::{self, ResolvedItem};
use crate::document::{InventoryDocument, MapConfig};
use crate::filter::ItemFilter;
use crate::grid::CellGrid;
use crate::layout::{CellSize, LayoutProjector, MapLayout};

/// Which panel the page shows first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Map,
    List,
}

impl ViewMode {
    /// `list` selects the list view; anything else (including nothing) the map.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("list") => ViewMode::List,
            _ => ViewMode::Map,
        }
    }
}

/// Normalized page parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewParams {
    pub filter: ItemFilter,
    pub cell: CellSize,
    pub view_mode: ViewMode,
}

impl ViewParams {
    /// Normalizes raw query-string values. Unparseable `col`/`cell` fall back
    /// to "no column" and the default cell size.
    pub fn from_raw(
        q: Option<&str>,
        cat: Option<&str>,
        col: Option<&str>,
        cell: Option<&str>,
        view: Option<&str>,
    ) -> Self {
        Self {
            filter: ItemFilter::new(cat, q, parse_column(col)),
            cell: CellSize::parse(cell),
            view_mode: ViewMode::parse(view),
        }
    }
}

/// Parses the selected-column parameter; anything non-integer means "none".
pub fn parse_column(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
}

/// Everything the presentation layer needs to render the inventory page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryView {
    pub query: String,
    pub map: MapConfig,
    pub cells: CellGrid,
    pub items: Vec<ResolvedItem>,
    pub categories: Vec<String>,
    pub active_category: String,
    pub view_mode: ViewMode,
    pub cell_px: CellSize,
    pub layout: MapLayout,
    pub aisles: Vec<String>,
    pub selected_col: Option<i64>,
}

/// Builds the view model for one page render.
///
/// The cell grid is built from every item; markers and the item list only
/// cover the filtered items.
pub fn build_view(doc: &InventoryDocument, params: &ViewParams) -> InventoryView {
    let filtered = params.filter.apply(&doc.items);
    let items = aisle::annotate(filtered, &doc.zones);
    let layout = LayoutProjector::new(params.cell).project(
        &doc.map,
        &doc.zones,
        items.iter().map(|r| &r.item),
    );

    InventoryView {
        query: params.filter.query().unwrap_or_default().to_string(),
        map: doc.map,
        cells: CellGrid::build(&doc.map, &doc.items),
        items,
        categories: doc.categories(),
        active_category: params.filter.category().unwrap_or_default().to_string(),
        view_mode: params.view_mode,
        cell_px: params.cell,
        layout,
        aisles: doc.aisles.clone(),
        selected_col: params.filter.column(),
    }
}
