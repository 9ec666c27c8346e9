//! Semi-implicit Euler integration followed by the boundary clamp.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::{Body, BodyVariant};

/// Integrate every point and keep it inside `width × height`.
///
/// Rigid bodies also advance their angle by `angular_velocity * dt`.
pub fn integrate_bodies(bodies: &mut [Body], dt: f32, width: f32, height: f32) {
    #[cfg(feature = "parallel")]
    bodies
        .par_iter_mut()
        .for_each(|body| integrate_body(body, dt, width, height));

    #[cfg(not(feature = "parallel"))]
    bodies
        .iter_mut()
        .for_each(|body| integrate_body(body, dt, width, height));
}

fn integrate_body(body: &mut Body, dt: f32, width: f32, height: f32) {
    for point in body.points_mut() {
        point.integrate(dt);
        point.clamp_to_bounds(width, height);
    }
    if let BodyVariant::Rigid(rigid) = &mut body.variant {
        rigid.integrate_rotation(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Vec2;
    use crate::domain::{BodyHandle, RigidBody, ShapeKind, Transform};
    use approx::assert_relative_eq;

    #[test]
    fn moves_and_clamps_points() {
        let rigid = RigidBody::build(ShapeKind::Circle, Vec2::new(12.0, 50.0), 10.0, 1.0).unwrap();
        let mut bodies = vec![Body {
            handle: BodyHandle(0),
            transform: Transform::new(Vec2::new(12.0, 50.0), 10.0),
            variant: BodyVariant::Rigid(rigid),
        }];
        bodies[0].points_mut()[0].velocity = Vec2::new(-60.0, 0.0);
        bodies[0].points_mut()[0].angular_velocity = 1.0;

        integrate_bodies(&mut bodies, 0.1, 200.0, 200.0);

        let p = &bodies[0].points()[0];
        assert_eq!(p.position.x, 10.0);
        assert_eq!(p.velocity.x, 0.0);
        assert_relative_eq!(bodies[0].rotation(), 0.1);
    }
}
