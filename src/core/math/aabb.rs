use super::vec2::Vec2;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Box around a set of circles (`(center, radius)`); `None` when empty.
    pub fn around_circles<I>(circles: I) -> Option<Self>
    where
        I: IntoIterator<Item = (Vec2, f32)>,
    {
        circles.into_iter().fold(None, |acc, (c, r)| {
            let b = Aabb::from_center(c, Vec2::splat(r));
            Some(match acc {
                Some(a) => a.union(&b),
                None => b,
            })
        })
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Closed-interval test: boxes that only touch count as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Overlap with positive area; touching boxes do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Penetration depth on each axis (negative when separated on that axis).
    pub fn overlap_extent(&self, other: &Aabb) -> Vec2 {
        Vec2::new(
            self.max.x.min(other.max.x) - self.min.x.max(other.min.x),
            self.max.y.min(other.max.y) - self.min.y.max(other.min.y),
        )
    }

    /// Intersection box (only meaningful when the boxes intersect).
    pub fn intersection(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_boxes_intersect_but_do_not_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(a.intersects(&b));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn overlap_extent_and_intersection() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(7.0, 4.0), Vec2::new(17.0, 14.0));
        assert_eq!(a.overlap_extent(&b), Vec2::new(3.0, 6.0));
        assert_eq!(a.intersection(&b).center(), Vec2::new(8.5, 7.0));
    }

    #[test]
    fn around_circles_pads_by_radius() {
        let b = Aabb::around_circles([(Vec2::new(0.0, 0.0), 1.0), (Vec2::new(10.0, 5.0), 2.0)]).unwrap();
        assert_eq!(b.min, Vec2::new(-1.0, -1.0));
        assert_eq!(b.max, Vec2::new(12.0, 7.0));
        assert!(Aabb::around_circles(std::iter::empty()).is_none());
    }
}
