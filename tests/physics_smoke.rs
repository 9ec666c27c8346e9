use softine_engine::{
    shape_polygon, shape_square, shape_triangle, BodyDesc, PhysicsConfig, ShapeKind, Transform, Vec2, World,
    WorldCore,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn facade_round_trip() {
    init_logging();
    let mut world = World::from_config(r#"{"width": 640, "height": 480, "rigidScaleRange": [1, 1]}"#.to_string())
        .unwrap();
    assert_eq!(world.width(), 640.0);

    let soft = world.create_soft_body(shape_square(), 200.0, 200.0, 40.0).unwrap();
    let rigid = world.create_rigid_body(shape_triangle(), 400.0, 200.0, 20.0).unwrap();
    let poly = world.create_soft_body(shape_polygon(), 300.0, 100.0, 30.0).unwrap();

    assert_eq!(world.body_ids(), vec![soft, rigid, poly]);
    assert_eq!(world.point_positions(soft).len(), 8);
    assert_eq!(world.spring_segments(soft).len(), 6 * 4);
    // Default polygon has five sides
    assert_eq!(world.point_positions(poly).len(), 10);
    assert_eq!(world.outline(rigid).len(), 6);
    assert_eq!(world.body_shape(rigid), shape_triangle() as i32);
    assert!(world.is_rigid(rigid));
    assert_eq!(world.body_shape(9999), -1);

    let steps = world.advance(0.1);
    assert!(steps >= 5);
    assert_eq!(world.frame(), steps as u64);

    let t = world.transform(soft);
    assert_eq!(t.len(), 4);
    assert_eq!(t[2], 40.0);
    assert_eq!(world.transform(rigid)[2], 20.0);
    assert!(world.set_gravity(0.0, 300.0).is_ok());

    assert!(world.destroy_body(rigid));
    assert!(!world.destroy_body(rigid));
    assert_eq!(world.body_count(), 2);

    world.clear();
    assert_eq!(world.body_count(), 0);
}

#[test]
fn spawn_from_json_desc() {
    init_logging();
    let mut world = World::new(800.0, 600.0);
    let id = world
        .spawn(
            r#"{"bodyType":"soft","shape":{"type":"polygon","sides":7},
                "transform":{"position":{"x":400,"y":300},"scale":50}}"#
                .to_string(),
        )
        .unwrap();
    assert_eq!(world.point_positions(id).len(), 14);
}

#[test]
fn native_world_settles_a_stack() {
    init_logging();
    let config = PhysicsConfig::default().with_bounds(500.0, 400.0).with_seed(3);
    let mut world = WorldCore::with_config(config).unwrap();

    for i in 0..4 {
        let desc = BodyDesc::soft(ShapeKind::Square, Transform::new(Vec2::new(250.0, 80.0 + i as f32 * 70.0), 50.0));
        world.spawn(&desc).unwrap();
    }
    world.create_rigid_body(ShapeKind::Square, Vec2::new(100.0, 100.0), 8.0).unwrap();

    for _ in 0..240 {
        world.advance(1.0 / 60.0);
    }

    assert_eq!(world.body_count(), 5);
    assert!(world.frame() >= 200);
    for body in world.bodies() {
        assert!(body.points().iter().all(|p| p.position.is_finite() && p.velocity.is_finite()));
        assert!(body.transform.position.is_finite());
    }
}
