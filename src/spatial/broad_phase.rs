//! Broad phase: one spatial index (quadtree or hash grid) over body boxes,
//! rebuilt every fixed step, producing sorted candidate pairs.

use crate::core::math::{Aabb, Vec2};
use crate::domain::{BroadPhaseConfig, BroadPhaseKind};

use super::hash_grid::SpatialHashGrid;
use super::quadtree::QuadTree;

enum Index {
    QuadTree(QuadTree<usize>),
    HashGrid(SpatialHashGrid<usize>),
}

pub struct BroadPhase {
    index: Index,
    entries: Vec<(usize, Aabb)>,
}

impl BroadPhase {
    pub fn new(config: &BroadPhaseConfig, width: f32, height: f32) -> Self {
        let index = match config.kind {
            BroadPhaseKind::QuadTree => Index::QuadTree(QuadTree::new(
                world_box(width, height),
                config.max_objects,
                config.max_levels,
            )),
            BroadPhaseKind::HashGrid => Index::HashGrid(SpatialHashGrid::new(config.cell_size)),
        };
        Self {
            index,
            entries: Vec::new(),
        }
    }

    pub fn kind(&self) -> BroadPhaseKind {
        match self.index {
            Index::QuadTree(_) => BroadPhaseKind::QuadTree,
            Index::HashGrid(_) => BroadPhaseKind::HashGrid,
        }
    }

    /// Re-root the quadtree after the simulation bounds change.
    pub fn resize(&mut self, width: f32, height: f32) {
        if let Index::QuadTree(tree) = &mut self.index {
            tree.clear(Some(world_box(width, height)));
        }
        self.entries.clear();
    }

    pub fn clear(&mut self) {
        match &mut self.index {
            Index::QuadTree(tree) => tree.clear(None),
            Index::HashGrid(grid) => grid.clear(),
        }
        self.entries.clear();
    }

    pub fn insert(&mut self, item: usize, area: Aabb) {
        match &mut self.index {
            Index::QuadTree(tree) => tree.insert(item, area),
            Index::HashGrid(grid) => grid.insert(item, area),
        }
        self.entries.push((item, area));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deduplicated, ascending items whose box touches `region`.
    pub fn query(&self, region: &Aabb) -> Vec<usize> {
        let mut found = match &self.index {
            Index::QuadTree(tree) => tree.query(region),
            Index::HashGrid(grid) => grid.query(region),
        };
        found.sort_unstable();
        found.dedup();
        found
    }

    /// Every unordered pair `(i, j)`, `i < j`, whose boxes touch. Sorted.
    pub fn candidate_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for &(item, area) in &self.entries {
            for other in self.query(&area) {
                if other > item {
                    pairs.push((item, other));
                }
            }
        }
        pairs.sort_unstable();
        pairs.dedup();
        pairs
    }
}

fn world_box(width: f32, height: f32) -> Aabb {
    Aabb::new(Vec2::zero(), Vec2::new(width.max(1.0), height.max(1.0)))
}
