//! Soft body contacts: point–point, point–edge and edge–edge.

use crate::core::math::{closest_point_on_segment, segment_intersection, Aabb, Vec2, EPSILON};
use crate::domain::{PointMass, RigidBody, ShapeKind, SoftBody, Spring, RESTITUTION};

use super::{bounce, separate};

/// All three soft contact kinds between two soft bodies.
pub fn collide_soft(a: &mut SoftBody, b: &mut SoftBody) -> usize {
    let mut contacts = point_point(&mut a.points, &mut b.points);
    contacts += point_edge(&mut a.points, &b.points, &b.springs);
    contacts += point_edge(&mut b.points, &a.points, &a.springs);
    contacts += edge_edge(a, b);
    contacts
}

/// Soft points against a rigid body: the unrotated box for squares, the
/// wall-extent circle for every other shape.
pub fn collide_soft_rigid(soft: &mut SoftBody, rigid: &mut RigidBody) -> usize {
    match rigid.shape.kind {
        ShapeKind::Square => point_box(&mut soft.points, rigid),
        _ => point_point(&mut soft.points, rigid.points_mut()),
    }
}

/// Normal (box toward point) and overlap of a point's collider against `area`.
fn box_contact(area: &Aabb, position: Vec2, radius: f32) -> Option<(Vec2, f32)> {
    let closest = position.clamp(area.min, area.max);
    let delta = position - closest;
    let distance = delta.length();
    if distance > EPSILON {
        if distance >= radius {
            return None;
        }
        return Some((delta / distance, radius - distance));
    }

    // Centre inside the box: leave through the nearest face
    let faces = [
        (Vec2::new(-1.0, 0.0), position.x - area.min.x),
        (Vec2::new(1.0, 0.0), area.max.x - position.x),
        (Vec2::new(0.0, -1.0), position.y - area.min.y),
        (Vec2::new(0.0, 1.0), area.max.y - position.y),
    ];
    let mut best = faces[0];
    for face in &faces[1..] {
        if face.1 < best.1 {
            best = *face;
        }
    }
    Some((best.0, best.1 + radius))
}

fn point_box(points: &mut [PointMass], rigid: &mut RigidBody) -> usize {
    let mut contacts = 0;
    for point in points.iter_mut() {
        let area = rigid.local_box();
        let Some((normal, overlap)) = box_contact(&area, point.position, point.collider_radius) else {
            continue;
        };
        separate(&mut rigid.point, point, normal, overlap);
        bounce(&mut rigid.point, point, normal);
        contacts += 1;
    }
    contacts
}

fn point_point(a: &mut [PointMass], b: &mut [PointMass]) -> usize {
    let mut contacts = 0;
    for pa in a.iter_mut() {
        for pb in b.iter_mut() {
            let delta = pb.position - pa.position;
            let distance = delta.length();
            let min_distance = pa.collider_radius + pb.collider_radius;
            if distance >= min_distance || distance <= EPSILON {
                continue;
            }
            let normal = delta / distance;
            separate(pa, pb, normal, min_distance - distance);
            bounce(pa, pb, normal);
            contacts += 1;
        }
    }
    contacts
}

/// Points of one body against the spring segments of another. Edges are
/// treated as immovable.
fn point_edge(points: &mut [PointMass], edge_points: &[PointMass], springs: &[Spring]) -> usize {
    let mut contacts = 0;
    for point in points.iter_mut() {
        for spring in springs {
            let (start, end) = spring.segment(edge_points);
            let closest = closest_point_on_segment(point.position, start, end);
            let delta = point.position - closest;
            let distance = delta.length();
            let radius = point.collider_radius;
            if distance >= radius || distance <= EPSILON {
                continue;
            }
            let normal = delta / distance;
            if point.affected_by_forces {
                point.position += normal * (radius - distance);
            }
            let vn = point.velocity.dot(normal);
            if vn < 0.0 {
                point.apply_impulse(normal * (-(1.0 + RESTITUTION) * vn * point.mass()));
            }
            contacts += 1;
        }
    }
    contacts
}

/// Crossing springs push their start points apart along the line between
/// them, half each.
fn edge_edge(a: &mut SoftBody, b: &mut SoftBody) -> usize {
    let mut contacts = 0;
    for sa in &a.springs {
        for sb in &b.springs {
            let (p1, q1) = sa.segment(&a.points);
            let (p2, q2) = sb.segment(&b.points);
            if segment_intersection(p1, q1, p2, q2).is_none() {
                continue;
            }
            let Some((normal, gap)) = (p2 - p1).try_normalize() else {
                continue;
            };
            let pa = fast!(mut a.points, [sa.point_a]);
            let pb = fast!(mut b.points, [sb.point_a]);
            separate(pa, pb, normal, gap);
            bounce(pa, pb, normal);
            contacts += 1;
        }
    }
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Vec2;
    use crate::domain::{ShapeKind, SoftPointParams};
    use approx::assert_relative_eq;

    const PARAMS: SoftPointParams = SoftPointParams {
        mass: 1.0,
        collider_radius: 10.0,
    };

    fn square(x: f32, y: f32, size: f32) -> SoftBody {
        SoftBody::build(ShapeKind::Square, Vec2::new(x, y), size, PARAMS).unwrap()
    }

    #[test]
    fn overlapping_points_are_pushed_apart() {
        let mut a = vec![PointMass::new(1.0, Vec2::new(0.0, 0.0), true).unwrap().with_collider_radius(10.0)];
        let mut b = vec![PointMass::new(1.0, Vec2::new(12.0, 0.0), true).unwrap().with_collider_radius(10.0)];
        a[0].velocity = Vec2::new(4.0, 0.0);

        assert_eq!(point_point(&mut a, &mut b), 1);

        assert_relative_eq!(a[0].position.x, -4.0);
        assert_relative_eq!(b[0].position.x, 16.0);
        // vn = -4 → j = 3, A keeps 1, B gets 3
        assert_relative_eq!(a[0].velocity.x, 1.0);
        assert_relative_eq!(b[0].velocity.x, 3.0);
    }

    #[test]
    fn coincident_points_are_skipped() {
        let mut a = vec![PointMass::new(1.0, Vec2::new(5.0, 5.0), true).unwrap().with_collider_radius(10.0)];
        let mut b = a.clone();
        assert_eq!(point_point(&mut a, &mut b), 0);
        assert_eq!(a[0].position, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn point_is_pushed_off_an_edge_and_bounces() {
        let edge = vec![
            PointMass::new(1.0, Vec2::new(0.0, 0.0), true).unwrap(),
            PointMass::new(1.0, Vec2::new(100.0, 0.0), true).unwrap(),
        ];
        let springs = vec![Spring::new(&edge, 0, 1, 1.0, 0.0).unwrap()];
        let mut points = vec![PointMass::new(1.0, Vec2::new(50.0, -4.0), true).unwrap().with_collider_radius(10.0)];
        points[0].velocity = Vec2::new(2.0, 8.0);

        assert_eq!(point_edge(&mut points, &edge, &springs), 1);

        assert_relative_eq!(points[0].position.y, -10.0);
        assert_relative_eq!(points[0].velocity.y, -4.0);
        assert_relative_eq!(points[0].velocity.x, 2.0);
    }

    #[test]
    fn distant_squares_do_not_touch() {
        let mut a = square(100.0, 100.0, 40.0);
        let mut b = square(400.0, 100.0, 40.0);
        assert_eq!(collide_soft(&mut a, &mut b), 0);
    }

    #[test]
    fn interpenetrating_squares_report_contacts() {
        let mut a = square(100.0, 100.0, 40.0);
        let mut b = square(125.0, 100.0, 40.0);

        assert!(collide_soft(&mut a, &mut b) > 0);
        assert!(a.points.iter().chain(&b.points).all(|p| p.position.is_finite()));
    }

    fn stick(from: Vec2, to: Vec2) -> SoftBody {
        let points = vec![
            PointMass::new(1.0, from, true).unwrap(),
            PointMass::new(1.0, to, true).unwrap(),
        ];
        let springs = vec![Spring::new(&points, 0, 1, 1.0, 0.0).unwrap()];
        SoftBody {
            shape: ShapeKind::Triangle,
            points,
            springs,
            frame: Vec::new(),
        }
    }

    #[test]
    fn crossing_edges_split_their_start_points() {
        let mut a = stick(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let mut b = stick(Vec2::new(0.0, 10.0), Vec2::new(10.0, 0.0));

        assert_eq!(collide_soft(&mut a, &mut b), 1);

        assert!(a.points[0].position.approx_eq(Vec2::new(0.0, -5.0), 1e-5));
        assert!(b.points[0].position.approx_eq(Vec2::new(0.0, 15.0), 1e-5));
        // End points are left alone
        assert_eq!(a.points[1].position, Vec2::new(10.0, 10.0));
        assert_eq!(b.points[1].position, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn soft_corner_cannot_sink_into_rigid_square_corner() {
        let mut soft = square(100.0, 100.0, 40.0);
        // Square of side 40 whose bottom-left corner (125, 75) is 7.07 from
        // the soft corner at (120, 80); the centres are 35.36 apart, beyond
        // the 30 an inscribed circle would need
        let mut rigid = RigidBody::build(ShapeKind::Square, Vec2::new(145.0, 55.0), 40.0, 1.0).unwrap();
        let before = rigid.point.position;

        assert_eq!(collide_soft_rigid(&mut soft, &mut rigid), 1);

        // Pushed apart along the corner diagonal until the collider just touches
        let moved = rigid.point.position - before;
        assert!(moved.x > 0.0 && moved.y < 0.0);
        assert_relative_eq!(moved.x, -moved.y, epsilon = 1e-4);
        let area = rigid.local_box();
        let corner = Vec2::new(area.min.x, area.max.y);
        assert_relative_eq!(corner.distance(soft.points[1].position), 10.0, epsilon = 1e-3);
    }

    #[test]
    fn point_inside_box_leaves_through_nearest_face() {
        let area = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(40.0, 40.0));
        let (normal, overlap) = box_contact(&area, Vec2::new(35.0, 20.0), 10.0).unwrap();
        assert_eq!(normal, Vec2::new(1.0, 0.0));
        assert_relative_eq!(overlap, 15.0);
        assert!(box_contact(&area, Vec2::new(55.0, 20.0), 10.0).is_none());
    }

    #[test]
    fn soft_point_hits_rigid_circle() {
        let mut soft = square(100.0, 100.0, 40.0);
        // Rigid circle of radius 20 just right of the top-right corner (120, 80)
        let mut rigid = RigidBody::build(ShapeKind::Circle, Vec2::new(145.0, 80.0), 20.0, 1.0).unwrap();

        assert_eq!(collide_soft_rigid(&mut soft, &mut rigid), 1);
        let gap = rigid.point.position.distance(soft.points[1].position);
        assert_relative_eq!(gap, 30.0, epsilon = 1e-3);
    }
}
