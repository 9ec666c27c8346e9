//! Spatial partitioning for broad-phase collision queries.

pub mod broad_phase;
pub mod hash_grid;
pub mod quadtree;

pub use broad_phase::BroadPhase;
pub use hash_grid::SpatialHashGrid;
pub use quadtree::QuadTree;
