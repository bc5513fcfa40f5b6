//! Grid → pixel projection for the map diagram.
//!
//! Geometry is derived from three numbers: the cell size (clamped), the gap
//! between cells and the outer margin. Everything here is integer arithmetic
//! except zone label fitting. Coordinates come straight from the document, so
//! pixel arithmetic saturates instead of overflowing.

use std::num::IntErrorKind;

use serde::Serialize;

use crate::document::{Item, MapConfig, Zone, UNPLACED};

/// Gap between adjacent cells, in pixels.
pub const SPACING: i64 = 8;
/// Border around the whole grid, in pixels.
pub const MARGIN: i64 = 16;

/// Cell size in pixels, always within `[CellSize::MIN, CellSize::MAX]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CellSize(i64);

impl CellSize {
    pub const MIN: i64 = 32;
    pub const MAX: i64 = 128;
    pub const DEFAULT: i64 = 80;

    /// Saturates `px` into the allowed range.
    pub fn new(px: i64) -> Self {
        Self(px.clamp(Self::MIN, Self::MAX))
    }

    /// Parses a raw request value.
    ///
    /// Missing or non-numeric input yields the default; numbers too large for
    /// an `i64` saturate like any other out-of-range value.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match raw.trim().parse::<i64>() {
            Ok(px) => Self::new(px),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Self(Self::MAX),
                IntErrorKind::NegOverflow => Self(Self::MIN),
                _ => Self::default(),
            },
        }
    }

    pub fn px(self) -> i64 {
        self.0
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Stock band derived from an item's quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    Low,
    Medium,
    High,
}

impl StockLevel {
    /// `qty <= 10` is low, `qty <= 30` is medium, anything above is high.
    pub fn from_qty(qty: i64) -> Self {
        if qty <= 10 {
            StockLevel::Low
        } else if qty <= 30 {
            StockLevel::Medium
        } else {
            StockLevel::High
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            StockLevel::Low => "#ef4444",
            StockLevel::Medium => "#f59e0b",
            StockLevel::High => "#22c55e",
        }
    }
}

/// A zone projected to pixel space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneRect {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
    pub label: String,
    /// Label shortened with an ellipsis to fit the rectangle width.
    pub label_display: String,
    /// Label font size in pixels.
    pub fs: i64,
    pub emoji: String,
    pub fill: String,
    /// Grid column of the zone; clicking the zone filters by it.
    pub col: i64,
}

/// An item marker (circle) projected to pixel space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemMarker {
    pub cx: i64,
    pub cy: i64,
    pub r: i64,
    pub qty: i64,
    pub fill: &'static str,
    pub label: String,
    pub gx: i64,
    pub gy: i64,
}

/// Complete pixel geometry for one render of the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapLayout {
    pub svg_width: i64,
    pub svg_height: i64,
    pub zones: Vec<ZoneRect>,
    pub items: Vec<ItemMarker>,
}

/// Projects grid geometry for a fixed cell size.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct LayoutProjector {
    cell: CellSize,
}

impl LayoutProjector {
    pub fn new(cell: CellSize) -> Self {
        Self { cell }
    }

    pub fn cell(&self) -> CellSize {
        self.cell
    }

    /// Pixel offset of the top-left corner of grid coordinate `coord`.
    pub fn cell_to_px(&self, coord: i64) -> i64 {
        coord
            .saturating_mul(self.cell.px() + SPACING)
            .saturating_add(MARGIN)
    }

    /// Pixel length covered by `cells` consecutive cells (gaps included).
    pub fn span_px(&self, cells: i64) -> i64 {
        cells
            .saturating_mul(self.cell.px())
            .saturating_add(cells.saturating_sub(1).saturating_mul(SPACING))
    }

    pub fn canvas_size(&self, map: &MapConfig) -> (i64, i64) {
        (
            self.span_px(map.width).saturating_add(MARGIN * 2),
            self.span_px(map.height).saturating_add(MARGIN * 2),
        )
    }

    pub fn zone_rect(&self, zone: &Zone) -> ZoneRect {
        let w = self.span_px(zone.w);
        let h = self.span_px(zone.h);
        let fs = self.label_font_size();
        ZoneRect {
            x: self.cell_to_px(zone.x),
            y: self.cell_to_px(zone.y),
            w,
            h,
            label: zone.label().to_string(),
            label_display: fit_label(zone.label(), w, fs),
            fs,
            emoji: zone.emoji.clone(),
            fill: zone.fill.clone(),
            col: zone.x,
        }
    }

    /// Marker for `item`. A missing coordinate is drawn in the first row or
    /// column of the grid.
    pub fn item_marker(&self, item: &Item) -> ItemMarker {
        let half = self.cell.px() / 2;
        let gx = marker_coord(item.x);
        let gy = marker_coord(item.y);
        ItemMarker {
            cx: self.cell_to_px(gx).saturating_add(half),
            cy: self.cell_to_px(gy).saturating_add(half),
            r: self.marker_radius(),
            qty: item.qty,
            fill: StockLevel::from_qty(item.qty).color(),
            label: item.name.clone(),
            gx,
            gy,
        }
    }

    pub fn marker_radius(&self) -> i64 {
        (self.cell.px() / 3).clamp(8, 14)
    }

    pub fn label_font_size(&self) -> i64 {
        (self.cell.px() / 3 + 6).clamp(10, 18)
    }

    pub fn project<'a, I>(&self, map: &MapConfig, zones: &[Zone], items: I) -> MapLayout
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let (svg_width, svg_height) = self.canvas_size(map);
        MapLayout {
            svg_width,
            svg_height,
            zones: zones.iter().map(|z| self.zone_rect(z)).collect(),
            items: items.into_iter().map(|it| self.item_marker(it)).collect(),
        }
    }
}

/// Projects `zones` and `items` onto a canvas sized for `map`.
pub fn project<'a, I>(map: &MapConfig, zones: &[Zone], items: I, cell: CellSize) -> MapLayout
where
    I: IntoIterator<Item = &'a Item>,
{
    LayoutProjector::new(cell).project(map, zones, items)
}

fn marker_coord(coord: i64) -> i64 {
    if coord == UNPLACED { 0 } else { coord }
}

/// Truncates `label` so it fits a rectangle `width_px` wide at font size `fs`.
///
/// Glyph width is estimated at `0.6 * fs` with 24px of horizontal padding; at
/// least four characters are always allowed.
fn fit_label(label: &str, width_px: i64, fs: i64) -> String {
    let max_chars = (((width_px - 24) as f64 / (fs as f64 * 0.6)) as i64).max(4) as usize;
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let mut out: String = label.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}
