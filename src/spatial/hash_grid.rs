//! Uniform spatial hash: an item is registered in every cell its box touches.

use std::collections::HashMap;

use crate::core::math::Aabb;

pub const DEFAULT_CELL_SIZE: f32 = 100.0;

pub struct SpatialHashGrid<T> {
    inv_cell_size: f32,
    cells: HashMap<(i32, i32), Vec<(T, Aabb)>>,
}

impl<T: Copy + Ord> SpatialHashGrid<T> {
    pub fn new(cell_size: f32) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            DEFAULT_CELL_SIZE
        };
        Self {
            inv_cell_size: 1.0 / cell_size,
            cells: HashMap::new(),
        }
    }

    pub fn clear(&mut self) {
        // Keep the per-cell allocations for the next rebuild
        for bucket in self.cells.values_mut() {
            bucket.clear();
        }
    }

    #[inline]
    fn cell_of(&self, x: f32, y: f32) -> (i32, i32) {
        ((x * self.inv_cell_size).floor() as i32, (y * self.inv_cell_size).floor() as i32)
    }

    fn cell_range(&self, area: &Aabb) -> ((i32, i32), (i32, i32)) {
        (self.cell_of(area.min.x, area.min.y), self.cell_of(area.max.x, area.max.y))
    }

    pub fn insert(&mut self, item: T, area: Aabb) {
        let ((x0, y0), (x1, y1)) = self.cell_range(&area);
        for cx in x0..=x1 {
            for cy in y0..=y1 {
                self.cells.entry((cx, cy)).or_default().push((item, area));
            }
        }
    }

    /// Deduplicated items whose box touches `region`, in ascending order.
    pub fn query(&self, region: &Aabb) -> Vec<T> {
        let ((x0, y0), (x1, y1)) = self.cell_range(region);
        let mut out = Vec::new();
        for cx in x0..=x1 {
            for cy in y0..=y1 {
                if let Some(bucket) = self.cells.get(&(cx, cy)) {
                    out.extend(
                        bucket
                            .iter()
                            .filter(|(_, area)| area.intersects(region))
                            .map(|(item, _)| *item),
                    );
                }
            }
        }
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Number of non-empty cells.
    pub fn occupied_cells(&self) -> usize {
        self.cells.values().filter(|b| !b.is_empty()).count()
    }
}
