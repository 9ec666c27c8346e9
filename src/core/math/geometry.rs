//! Segment and polygon helpers used by shapes and the narrow phase.

use super::vec2::{Vec2, EPSILON};

/// Closest point to `p` on segment `[a, b]`.
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 == 0.0 {
        return a;
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    a + ab * t
}

/// Parametric segment intersection (`p1 + t·r` vs `p2 + u·s`).
///
/// Parallel and collinear segments never intersect.
pub fn segment_intersection(p1: Vec2, q1: Vec2, p2: Vec2, q2: Vec2) -> Option<Vec2> {
    let r = q1 - p1;
    let s = q2 - p2;
    let rxs = r.cross(s);
    if rxs.abs() < EPSILON {
        return None;
    }

    let qp = p2 - p1;
    let t = qp.cross(s) / rxs;
    let u = qp.cross(r) / rxs;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(p1 + r * t)
    } else {
        None
    }
}

/// Shoelace formula. Absolute value, so winding does not matter.
pub fn polygon_area(vertices: &[Vec2]) -> f32 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for (i, a) in vertices.iter().enumerate() {
        let b = vertices[(i + 1) % vertices.len()];
        twice += a.cross(b);
    }
    (twice * 0.5).abs()
}

/// Area centroid; falls back to the vertex average for degenerate outlines.
pub fn polygon_centroid(vertices: &[Vec2]) -> Vec2 {
    if vertices.is_empty() {
        return Vec2::ZERO;
    }

    let mut signed = 0.0;
    let mut c = Vec2::ZERO;
    for (i, a) in vertices.iter().enumerate() {
        let b = vertices[(i + 1) % vertices.len()];
        let w = a.cross(b);
        signed += w;
        c += (*a + b) * w;
    }

    if signed.abs() < EPSILON {
        return vertices.iter().copied().sum::<Vec2>() / vertices.len() as f32;
    }
    c / (3.0 * signed)
}

/// Points evenly spaced on a circle, starting at angle 0.
pub fn regular_ring(center: Vec2, radius: f32, count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let angle = (i as f32) * std::f32::consts::TAU / count as f32;
            let (sin, cos) = angle.sin_cos();
            Vec2::new(center.x + radius * cos, center.y + radius * sin)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn closest_point_clamps_to_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(closest_point_on_segment(Vec2::new(5.0, 3.0), a, b), Vec2::new(5.0, 0.0));
        assert_eq!(closest_point_on_segment(Vec2::new(-4.0, 1.0), a, b), a);
        assert_eq!(closest_point_on_segment(Vec2::new(14.0, 1.0), a, b), b);
        assert_eq!(closest_point_on_segment(Vec2::new(3.0, 3.0), a, a), a);
    }

    #[test]
    fn crossing_segments_intersect_at_midpoint() {
        let hit = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
        )
        .expect("segments cross");
        assert!(hit.approx_eq(Vec2::new(5.0, 5.0), 1e-4));
    }

    #[test]
    fn parallel_and_disjoint_segments_do_not_intersect() {
        let p = Vec2::new(0.0, 0.0);
        let q = Vec2::new(10.0, 0.0);
        assert!(segment_intersection(p, q, Vec2::new(0.0, 1.0), Vec2::new(10.0, 1.0)).is_none());
        assert!(segment_intersection(p, q, p, q).is_none());
        assert!(segment_intersection(p, q, Vec2::new(11.0, -1.0), Vec2::new(11.0, 1.0)).is_none());
    }

    #[test]
    fn shoelace_area_and_centroid_of_unit_square() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
        ];
        assert_relative_eq!(polygon_area(&square), 4.0);
        assert!(polygon_centroid(&square).approx_eq(Vec2::new(1.0, 1.0), 1e-5));
    }

    #[test]
    fn ring_points_sit_on_radius() {
        let ring = regular_ring(Vec2::new(5.0, 5.0), 3.0, 8);
        assert_eq!(ring.len(), 8);
        for p in ring {
            assert_relative_eq!(p.distance(Vec2::new(5.0, 5.0)), 3.0, epsilon = 1e-5);
        }
    }
}
