use serde::{Deserialize, Serialize};

/// Default map bounds used when the document (or its `map` key) is missing.
pub const DEFAULT_MAP_WIDTH: i64 = 10;
pub const DEFAULT_MAP_HEIGHT: i64 = 6;

/// Default fill for zones that do not declare one.
pub const DEFAULT_ZONE_FILL: &str = "#cbd5e1";

/// Grid coordinate used for items whose position is missing.
///
/// It never falls inside a zone or the map bounds.
pub const UNPLACED: i64 = -1;

/// Map bounds in grid cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_width")]
    pub width: i64,
    #[serde(default = "default_height")]
    pub height: i64,
}

impl MapConfig {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// True when `(x, y)` lies on the map (`0 <= x < width`, `0 <= y < height`).
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAP_WIDTH, DEFAULT_MAP_HEIGHT)
    }
}

fn default_width() -> i64 {
    DEFAULT_MAP_WIDTH
}

fn default_height() -> i64 {
    DEFAULT_MAP_HEIGHT
}

/// A coloured rectangular aisle region in grid space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    #[serde(default)]
    pub x: i64,
    #[serde(default)]
    pub y: i64,
    #[serde(default = "one")]
    pub w: i64,
    #[serde(default = "one")]
    pub h: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default = "default_fill")]
    pub fill: String,
    #[serde(default)]
    pub emoji: String,
}

impl Zone {
    /// Label as drawn on the map; an absent label draws as empty text.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or_default()
    }

    /// Half-open containment: `x <= px < x + w` and `y <= py < y + h`.
    ///
    /// The far edges saturate, so zones near `i64::MAX` do not wrap.
    pub fn contains(&self, px: i64, py: i64) -> bool {
        self.x <= px
            && px < self.x.saturating_add(self.w)
            && self.y <= py
            && py < self.y.saturating_add(self.h)
    }
}

fn one() -> i64 {
    1
}

fn default_fill() -> String {
    DEFAULT_ZONE_FILL.to_string()
}

/// A catalog entry positioned on the warehouse grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "unplaced")]
    pub x: i64,
    #[serde(default = "unplaced")]
    pub y: i64,
    #[serde(default)]
    pub qty: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aisle: Option<String>,
}

impl Item {
    /// Explicit aisle override, if set and non-empty.
    pub fn explicit_aisle(&self) -> Option<&str> {
        self.aisle.as_deref().filter(|a| !a.is_empty())
    }
}

fn unplaced() -> i64 {
    UNPLACED
}

/// The whole inventory document: map bounds, aisle names, zones and items.
///
/// Every key is optional on disk; a missing key takes its default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InventoryDocument {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub aisles: Vec<String>,
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl InventoryDocument {
    /// Sorted, de-duplicated category names (trimmed, empty ones dropped).
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .items
            .iter()
            .map(|it| it.category.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        out.sort();
        out.dedup();
        out
    }
}
