use transit_engine::core::vector::Vec2;
use transit_engine::orbits::{Body, BodyId, BodyMotion, OrbitalElements, World};

fn orbiting(radius_km: f64, period_s: f64, angle: f64, parent: Option<BodyId>) -> BodyMotion {
    BodyMotion::Orbiting(OrbitalElements {
        radius_km,
        eccentricity: 0.0,
        period_s,
        initial_angle_rad: angle,
        parent,
    })
}

fn demo_world() -> World {
    let bodies = vec![
        Body::new("Meridian", orbiting(1.2e8, 2.4e7, 0.0, None)),
        Body::new("Kestrel", orbiting(6.0e4, 1.6e5, 0.0, Some(BodyId(0)))),
        Body::new("Thera", orbiting(2.1e8, 5.6e7, 1.8, None)),
        Body::new("Veil", BodyMotion::Fixed(Vec2::new(3.2e8, -1.5e8))),
    ];
    World::new(bodies, BodyId(0)).expect("valid world")
}

#[test]
fn child_at_angle_zero_sits_radius_east_of_parent() {
    let world = demo_world();
    let parent = world.position_of(BodyId(0), 0.0);
    let child = world.position_of(BodyId(1), 0.0);
    assert!((child.x - (parent.x + 6.0e4)).abs() < 1e-6);
    assert!((child.y - parent.y).abs() < 1e-6);
}

#[test]
fn child_tracks_parent_over_time() {
    let world = demo_world();
    // A quarter of the parent's orbit later, the child must still sit
    // within its own orbital radius of the parent.
    let t = 6.0e6;
    let parent = world.position_of(BodyId(0), t);
    let child = world.position_of(BodyId(1), t);
    let separation = parent.distance(child);
    assert!(
        (separation - 6.0e4).abs() < 1.0,
        "child drifted from parent: {} km",
        separation
    );
}

#[test]
fn fixed_body_never_moves() {
    let world = demo_world();
    let a = world.position_of(BodyId(3), 0.0);
    let b = world.position_of(BodyId(3), 1.0e9);
    assert_eq!(a, b);
    assert_eq!(a, Vec2::new(3.2e8, -1.5e8));
}

#[test]
fn update_caches_positions_and_reference_distances() {
    let mut world = demo_world();
    let t = 3.3e6;
    world.update_positions(t);

    assert_eq!(world.body(BodyId(0)).distance_from_reference_km, 0.0);
    for (id, body) in world.bodies() {
        assert_eq!(body.position_km, world.position_of(id, t));
        let expected = world.distance_between(id, BodyId(0), t);
        assert!(
            (body.distance_from_reference_km - expected).abs() < 1e-9,
            "cached distance mismatch for {}",
            body.name
        );
    }
}

#[test]
fn distance_is_symmetric() {
    let world = demo_world();
    let t = 1.0e6;
    let ab = world.distance_between(BodyId(0), BodyId(2), t);
    let ba = world.distance_between(BodyId(2), BodyId(0), t);
    assert_eq!(ab, ba);
    assert!(ab > 0.0);
}

#[test]
fn lookup_by_name_is_case_insensitive() {
    let world = demo_world();
    assert_eq!(world.body_id("thera"), Some(BodyId(2)));
    assert_eq!(world.body_id("THERA"), Some(BodyId(2)));
    assert_eq!(world.body_id("Pallas"), None);
}
