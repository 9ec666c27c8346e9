//! SoftBody - a mesh of point masses held in shape by springs.
//!
//! Each shape kind is deliberately over-braced: a minimal spanning set of
//! springs lets the silhouette fold under gravity and contact.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::math::{regular_ring, Aabb, Vec2, EPSILON};
use crate::domain::error::Result;
use crate::domain::point_mass::PointMass;
use crate::domain::shape::ShapeKind;
use crate::domain::spring::{Spring, SpringForce};

pub const CIRCLE_POINTS: usize = 8;
pub const CIRCLE_STIFFNESS: f32 = 150.0;
pub const CIRCLE_DAMPING: f32 = 1.0;
pub const SQUARE_STIFFNESS: f32 = 125.0;
pub const SQUARE_DAMPING: f32 = 2.5;
pub const TRIANGLE_STIFFNESS: f32 = 110.0;
pub const TRIANGLE_DAMPING: f32 = 1.0;
pub const POLYGON_STIFFNESS: f32 = 110.0;
pub const POLYGON_DAMPING: f32 = 1.0;
/// Long springs added per polygon point
pub const POLYGON_LONG_SPRINGS: usize = 6;

/// Spring counts at or above this compute their forces on the rayon pool.
#[cfg(feature = "parallel")]
const PARALLEL_SPRING_MIN: usize = 64;

/// Per-point properties used when a soft body is built.
#[derive(Clone, Copy, Debug)]
pub struct SoftPointParams {
    pub mass: f32,
    pub collider_radius: f32,
}

#[derive(Clone, Debug)]
pub struct SoftBody {
    pub shape: ShapeKind,
    pub points: Vec<PointMass>,
    pub springs: Vec<Spring>,
    /// Rest corner positions (squares only), for rotation estimates
    pub frame: Vec<Vec2>,
}

impl SoftBody {
    /// Lay out points and springs for `shape` around `center` at `scale`.
    pub fn build(shape: ShapeKind, center: Vec2, scale: f32, params: SoftPointParams) -> Result<Self> {
        shape.validate()?;

        let layout = match shape {
            ShapeKind::Circle => regular_ring(center, scale, CIRCLE_POINTS),
            ShapeKind::Square => square_corners(center, scale / 2.0).to_vec(),
            ShapeKind::Triangle => regular_ring(center, scale, 3),
            ShapeKind::Polygon { sides } => regular_ring(center, scale, sides as usize),
        };

        let points = layout
            .iter()
            .map(|&p| PointMass::new(params.mass, p, true).map(|pm| pm.with_collider_radius(params.collider_radius)))
            .collect::<Result<Vec<_>>>()?;

        let n = points.len();
        let mut edges: Vec<(usize, usize)> = Vec::new();
        let (stiffness, damping) = match shape {
            ShapeKind::Circle => {
                perimeter(n, &mut edges);
                let offset = n / 3;
                for i in 0..n {
                    for j in 1..=3 {
                        edges.push((i, (i + j * offset) % n));
                    }
                }
                (CIRCLE_STIFFNESS, CIRCLE_DAMPING)
            }
            ShapeKind::Square => {
                // 0 TL, 1 TR, 2 BL, 3 BR
                edges.extend_from_slice(&[(0, 1), (1, 3), (3, 2), (3, 0), (0, 2), (2, 1)]);
                (SQUARE_STIFFNESS, SQUARE_DAMPING)
            }
            ShapeKind::Triangle => {
                perimeter(n, &mut edges);
                (TRIANGLE_STIFFNESS, TRIANGLE_DAMPING)
            }
            ShapeKind::Polygon { .. } => {
                perimeter(n, &mut edges);
                let step = (n / POLYGON_LONG_SPRINGS).max(1);
                for i in 0..n {
                    for j in 1..=POLYGON_LONG_SPRINGS {
                        let target = (i + j * step) % n;
                        if target != i {
                            edges.push((i, target));
                        }
                    }
                }
                (POLYGON_STIFFNESS, POLYGON_DAMPING)
            }
        };

        let springs = edges
            .into_iter()
            .map(|(a, b)| Spring::new(&points, a, b, stiffness, damping))
            .collect::<Result<Vec<_>>>()?;

        let frame = match shape {
            ShapeKind::Square => layout,
            _ => Vec::new(),
        };

        Ok(Self {
            shape,
            points,
            springs,
            frame,
        })
    }

    /// Average point position.
    pub fn centroid(&self) -> Vec2 {
        if self.points.is_empty() {
            return Vec2::zero();
        }
        self.points.iter().map(|p| p.position).sum::<Vec2>() / self.points.len() as f32
    }

    /// Mean angle, about the centroid, between every point and every frame point.
    ///
    /// An approximation rather than a rigid fit; 0 for bodies without a frame.
    pub fn rotation(&self) -> f32 {
        let center = self.centroid();
        let mut total = 0.0f32;
        let mut count = 0u32;

        for point in &self.points {
            let ca = point.position - center;
            let ma = ca.length();
            if ma < EPSILON {
                continue;
            }
            for &anchor in &self.frame {
                let cb = anchor - center;
                let mb = cb.length();
                if mb < EPSILON {
                    continue;
                }
                let cos = (ca.dot(cb) / (ma * mb)).clamp(-1.0, 1.0);
                total += cos.acos();
                count += 1;
            }
        }

        if count == 0 {
            0.0
        } else {
            total / count as f32
        }
    }

    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::around_circles(self.points.iter().map(|p| (p.position, p.collider_radius)))
    }

    /// Log every spring's contribution without touching the points.
    pub fn spring_forces(&self) -> Vec<SpringForce> {
        #[cfg(feature = "parallel")]
        {
            if self.springs.len() >= PARALLEL_SPRING_MIN {
                let points = &self.points;
                return self.springs.par_iter().filter_map(|s| s.force(points)).collect();
            }
        }
        self.springs.iter().filter_map(|s| s.force(&self.points)).collect()
    }

    /// Compute-then-flush: forces are gathered first and reduced serially,
    /// so a point shared by several springs never loses an update.
    ///
    /// Returns the number of springs that contributed.
    pub fn apply_spring_forces(&mut self) -> usize {
        let forces = self.spring_forces();
        for f in &forces {
            f.apply(&mut self.points);
        }
        forces.len()
    }
}

fn square_corners(center: Vec2, half: f32) -> [Vec2; 4] {
    [
        Vec2::new(center.x - half, center.y - half),
        Vec2::new(center.x + half, center.y - half),
        Vec2::new(center.x - half, center.y + half),
        Vec2::new(center.x + half, center.y + half),
    ]
}

fn perimeter(n: usize, edges: &mut Vec<(usize, usize)>) {
    for i in 0..n {
        edges.push((i, (i + 1) % n));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const PARAMS: SoftPointParams = SoftPointParams {
        mass: 1.0,
        collider_radius: 10.0,
    };

    #[test]
    fn square_has_four_corners_six_springs_and_a_frame() {
        let body = SoftBody::build(ShapeKind::Square, Vec2::new(100.0, 100.0), 50.0, PARAMS).unwrap();
        assert_eq!(body.points.len(), 4);
        assert_eq!(body.springs.len(), 6);
        assert_eq!(body.frame.len(), 4);
        assert_eq!(body.points[0].position, Vec2::new(75.0, 75.0));
        assert_eq!(body.points[3].position, Vec2::new(125.0, 125.0));
        assert!(body.centroid().approx_eq(Vec2::new(100.0, 100.0), 1e-4));
    }

    #[test]
    fn circle_is_braced_at_third_offsets() {
        let body = SoftBody::build(ShapeKind::Circle, Vec2::zero(), 40.0, PARAMS).unwrap();
        assert_eq!(body.points.len(), CIRCLE_POINTS);
        // 8 perimeter + 8 * 3 bracing
        assert_eq!(body.springs.len(), 32);
        assert!(body.springs.contains(&Spring::new(&body.points, 0, 2, CIRCLE_STIFFNESS, CIRCLE_DAMPING).unwrap()));
        assert!(body.frame.is_empty());
        assert_eq!(body.rotation(), 0.0);
    }

    #[test]
    fn polygon_gets_perimeter_and_long_springs() {
        let body = SoftBody::build(ShapeKind::Polygon { sides: 5 }, Vec2::zero(), 40.0, PARAMS).unwrap();
        assert_eq!(body.points.len(), 5);
        // step = 1: j = 5 wraps onto i and is skipped, leaving 5 long springs per point
        assert_eq!(body.springs.len(), 5 + 5 * 5);
        for s in &body.springs {
            assert_ne!(s.point_a, s.point_b);
        }
    }

    #[test]
    fn triangle_has_perimeter_only() {
        let body = SoftBody::build(ShapeKind::Triangle, Vec2::zero(), 40.0, PARAMS).unwrap();
        assert_eq!(body.points.len(), 3);
        assert_eq!(body.springs.len(), 3);
    }

    #[test]
    fn fresh_body_springs_are_at_rest() {
        for shape in [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle, ShapeKind::Polygon { sides: 7 }] {
            let mut body = SoftBody::build(shape, Vec2::new(300.0, 300.0), 60.0, PARAMS).unwrap();
            body.apply_spring_forces();
            for p in &body.points {
                assert_relative_eq!(p.acceleration.length(), 0.0, epsilon = 1e-2);
            }
        }
    }

    #[test]
    fn stretched_square_accumulates_from_every_spring() {
        let mut body = SoftBody::build(ShapeKind::Square, Vec2::zero(), 10.0, PARAMS).unwrap();
        body.points[3].position += Vec2::new(5.0, 5.0);

        let forces = body.spring_forces();
        let expected: Vec2 = forces
            .iter()
            .map(|f| {
                if f.point_a == 3 {
                    f.force
                } else if f.point_b == 3 {
                    -f.force
                } else {
                    Vec2::zero()
                }
            })
            .sum();

        body.apply_spring_forces();
        assert!(body.points[3].acceleration.approx_eq(expected, 1e-4));
        // Pulled back toward the rest of the body
        assert!(body.points[3].acceleration.x < 0.0);
        assert!(body.points[3].acceleration.y < 0.0);
    }

    #[test]
    fn rotation_is_stable_at_rest() {
        let body = SoftBody::build(ShapeKind::Square, Vec2::new(50.0, 50.0), 20.0, PARAMS).unwrap();
        let r = body.rotation();
        assert!(r.is_finite());
        // Every point against every frame corner: (0 + 90 + 90 + 180) / 4 degrees
        assert_relative_eq!(r, std::f32::consts::FRAC_PI_2, epsilon = 1e-4);
    }

    #[test]
    fn bounds_include_point_radius() {
        let body = SoftBody::build(ShapeKind::Square, Vec2::new(100.0, 100.0), 50.0, PARAMS).unwrap();
        let b = body.bounds().unwrap();
        assert_eq!(b.min, Vec2::new(65.0, 65.0));
        assert_eq!(b.max, Vec2::new(135.0, 135.0));
    }

    #[test]
    fn invalid_mass_aborts_construction() {
        let params = SoftPointParams {
            mass: 0.0,
            collider_radius: 10.0,
        };
        assert!(SoftBody::build(ShapeKind::Square, Vec2::zero(), 10.0, params).is_err());
    }
}
