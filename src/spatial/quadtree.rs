//! Region quadtree over axis-aligned boxes.
//!
//! Items that straddle a split line stay in the parent node, so every
//! item lives in exactly one node and queries have no false negatives.

use crate::core::math::{Aabb, Vec2};

pub const DEFAULT_MAX_OBJECTS: usize = 10;
pub const DEFAULT_MAX_LEVELS: u32 = 5;

struct Node<T> {
    level: u32,
    bounds: Aabb,
    items: Vec<(T, Aabb)>,
    children: Option<Box<[Node<T>; 4]>>,
}

impl<T: Copy> Node<T> {
    fn new(level: u32, bounds: Aabb) -> Self {
        Self {
            level,
            bounds,
            items: Vec::new(),
            children: None,
        }
    }

    /// Quadrant (0 TL, 1 TR, 2 BL, 3 BR) that fully contains `area`.
    fn quadrant(&self, area: &Aabb) -> Option<usize> {
        let mid = self.bounds.center();

        let top = area.max.y < mid.y && area.min.y >= self.bounds.min.y;
        let bottom = area.min.y > mid.y && area.max.y <= self.bounds.max.y;
        let left = area.max.x < mid.x && area.min.x >= self.bounds.min.x;
        let right = area.min.x > mid.x && area.max.x <= self.bounds.max.x;

        match (top, bottom, left, right) {
            (true, _, true, _) => Some(0),
            (true, _, _, true) => Some(1),
            (_, true, true, _) => Some(2),
            (_, true, _, true) => Some(3),
            _ => None,
        }
    }

    fn split(&mut self) {
        let level = self.level + 1;
        let min = self.bounds.min;
        let max = self.bounds.max;
        let mid = self.bounds.center();

        self.children = Some(Box::new([
            Node::new(level, Aabb::new(min, mid)),
            Node::new(level, Aabb::new(Vec2::new(mid.x, min.y), Vec2::new(max.x, mid.y))),
            Node::new(level, Aabb::new(Vec2::new(min.x, mid.y), Vec2::new(mid.x, max.y))),
            Node::new(level, Aabb::new(mid, max)),
        ]));

        // Push down whatever now fits a child
        let items = std::mem::take(&mut self.items);
        for (item, area) in items {
            match self.quadrant(&area) {
                Some(q) => {
                    if let Some(children) = self.children.as_mut() {
                        children[q].items.push((item, area));
                    }
                }
                None => self.items.push((item, area)),
            }
        }
    }

    fn insert(&mut self, item: T, area: Aabb, max_objects: usize, max_levels: u32) {
        if let Some(q) = self.quadrant(&area) {
            if let Some(children) = self.children.as_mut() {
                children[q].insert(item, area, max_objects, max_levels);
                return;
            }
        }

        self.items.push((item, area));

        if self.children.is_none() && self.items.len() > max_objects && self.level < max_levels {
            self.split();
        }
    }

    fn query(&self, region: &Aabb, out: &mut Vec<T>) {
        out.extend(
            self.items
                .iter()
                .filter(|(_, area)| area.intersects(region))
                .map(|(item, _)| *item),
        );
        if let Some(children) = &self.children {
            for child in children.iter() {
                if child.bounds.intersects(region) {
                    child.query(region, out);
                }
            }
        }
    }

    fn depth(&self) -> u32 {
        match &self.children {
            Some(children) => children.iter().map(Node::depth).max().unwrap_or(self.level),
            None => self.level,
        }
    }
}

pub struct QuadTree<T> {
    root: Node<T>,
    max_objects: usize,
    max_levels: u32,
    len: usize,
}

impl<T: Copy> QuadTree<T> {
    pub fn new(bounds: Aabb, max_objects: usize, max_levels: u32) -> Self {
        Self {
            root: Node::new(0, bounds),
            max_objects: max_objects.max(1),
            max_levels,
            len: 0,
        }
    }

    /// Drop every item and subdivision; optionally re-root at new bounds.
    pub fn clear(&mut self, bounds: Option<Aabb>) {
        let bounds = bounds.unwrap_or(self.root.bounds);
        self.root = Node::new(0, bounds);
        self.len = 0;
    }

    pub fn insert(&mut self, item: T, area: Aabb) {
        self.root.insert(item, area, self.max_objects, self.max_levels);
        self.len += 1;
    }

    /// Items whose box touches `region`. May contain duplicates only if an
    /// item was inserted more than once.
    pub fn query(&self, region: &Aabb) -> Vec<T> {
        let mut out = Vec::new();
        self.root.query(region, &mut out);
        out
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Deepest subdivision level currently in use.
    pub fn depth(&self) -> u32 {
        self.root.depth()
    }
}
