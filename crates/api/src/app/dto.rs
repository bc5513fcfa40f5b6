use serde::Deserialize;

use stockmap_inventory::ViewParams;

// -------------------------
// Query-string DTOs
// -------------------------

/// Page parameters. Everything arrives as raw text so that bad numbers fall
/// back to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub q: Option<String>,
    pub cat: Option<String>,
    pub col: Option<String>,
    pub cell: Option<String>,
    pub view: Option<String>,
}

impl PageQuery {
    /// Normalizes the raw values; a non-integer `col` or `cell` is logged and
    /// replaced by its default.
    pub fn to_params(&self) -> ViewParams {
        if let Some(col) = self.col.as_deref().filter(|c| c.trim().parse::<i64>().is_err()) {
            tracing::warn!(value = %col, "col is not an integer; no column filter applied");
        }
        // Out-of-range cell sizes saturate instead.
        if let Some(cell) = self.cell.as_deref().filter(|c| !is_integer_literal(c)) {
            tracing::warn!(value = %cell, "cell is not an integer; using the default size");
        }

        ViewParams::from_raw(
            self.q.as_deref(),
            self.cat.as_deref(),
            self.col.as_deref(),
            self.cell.as_deref(),
            self.view.as_deref(),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

fn is_integer_literal(raw: &str) -> bool {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
