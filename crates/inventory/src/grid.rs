use serde::Serialize;

use crate::document::{Item, MapConfig};

/// Items bucketed by grid cell, indexed `[y][x]`.
///
/// Items outside the map bounds are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CellGrid {
    rows: Vec<Vec<Vec<Item>>>,
}

impl CellGrid {
    pub fn build(map: &MapConfig, items: &[Item]) -> Self {
        let width = map.width.max(0) as usize;
        let height = map.height.max(0) as usize;
        let mut rows = vec![vec![Vec::new(); width]; height];

        for item in items.iter().filter(|it| map.contains(it.x, it.y)) {
            rows[item.y as usize][item.x as usize].push(item.clone());
        }

        Self { rows }
    }

    /// Items at `(x, y)`; empty for coordinates off the map.
    pub fn cell(&self, x: i64, y: i64) -> &[Item] {
        if x < 0 || y < 0 {
            return &[];
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn rows(&self) -> &[Vec<Vec<Item>>] {
        &self.rows
    }

    /// Number of items placed on the grid.
    pub fn placed(&self) -> usize {
        self.rows.iter().flatten().map(Vec::len).sum()
    }
}
