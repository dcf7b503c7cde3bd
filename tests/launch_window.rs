use std::f64::consts::PI;

use transit_engine::orbits::{Body, BodyId, BodyMotion, OrbitalElements, World};
use transit_engine::planning::{AlignmentQuality, analyze_launch_window};

fn circular(radius_km: f64, period_s: f64, angle: f64) -> BodyMotion {
    BodyMotion::Orbiting(OrbitalElements {
        radius_km,
        eccentricity: 0.0,
        period_s,
        initial_angle_rad: angle,
        parent: None,
    })
}

fn two_planets(inner_angle: f64, outer_angle: f64) -> World {
    let bodies = vec![
        Body::new("Inner", circular(1.0e8, 2.0e7, inner_angle)),
        Body::new("Outer", circular(1.6e8, 4.0e7, outer_angle)),
    ];
    World::new(bodies, BodyId(0)).expect("world")
}

#[test]
fn current_distance_stays_inside_sampled_range() {
    for epoch in [0.0, 1.0e6, 7.5e6, 3.0e7, 9.0e7] {
        let world = two_planets(0.0, PI);
        let window = analyze_launch_window(&world, BodyId(0), BodyId(1), epoch);
        assert!(
            window.min_distance_km <= window.current_distance_km
                && window.current_distance_km <= window.max_distance_km,
            "bounds violated at epoch {}: {} not in [{}, {}]",
            epoch,
            window.current_distance_km,
            window.min_distance_km,
            window.max_distance_km
        );
        assert!(window.samples >= 100 && window.samples <= 1000);
    }
}

#[test]
fn opposition_start_is_poor_and_predicts_a_closer_window() {
    // Starting at opposition the separation is the orbit sum; the next
    // conjunction brings it down to the orbit difference.
    let world = two_planets(0.0, PI);
    let window = analyze_launch_window(&world, BodyId(0), BodyId(1), 0.0);

    assert_eq!(window.quality, AlignmentQuality::Poor);
    let next = window.next_window_s.expect("a conjunction inside the horizon");
    assert!(next > 0.0 && next <= window.horizon_s);

    let at_window = world.distance_between(BodyId(0), BodyId(1), next);
    let range = window.max_distance_km - window.min_distance_km;
    assert!(
        at_window < window.min_distance_km + 0.1 * range,
        "predicted window {} km is not near the sampled minimum {} km",
        at_window,
        window.min_distance_km
    );
}

#[test]
fn conjunction_start_is_excellent() {
    let world = two_planets(0.0, 0.0);
    let window = analyze_launch_window(&world, BodyId(0), BodyId(1), 0.0);
    assert_eq!(window.quality, AlignmentQuality::Excellent);
}

#[test]
fn same_body_pair_is_always_excellent() {
    let world = two_planets(0.0, PI);
    let window = analyze_launch_window(&world, BodyId(0), BodyId(0), 0.0);
    assert_eq!(window.min_distance_km, 0.0);
    assert_eq!(window.max_distance_km, 0.0);
    assert_eq!(window.quality, AlignmentQuality::Excellent);
}

#[test]
fn static_pair_horizon_is_capped() {
    let bodies = vec![
        Body::new("DepotA", BodyMotion::Fixed(transit_engine::core::vector::Vec2::new(0.0, 0.0))),
        Body::new("DepotB", BodyMotion::Fixed(transit_engine::core::vector::Vec2::new(1.0e8, 0.0))),
    ];
    let world = World::new(bodies, BodyId(0)).expect("world");
    let window = analyze_launch_window(&world, BodyId(0), BodyId(1), 0.0);

    assert!(window.horizon_s <= 10.0 * transit_engine::core::constants::SECONDS_PER_YEAR);
    // Constant separation: zero-width range, always excellent.
    assert_eq!(window.quality, AlignmentQuality::Excellent);
    assert!(window.next_window_s.is_none());
}
