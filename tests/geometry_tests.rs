#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use geo::coord;
use pond::simulation::geometric_utils::{
    distance, mod_angle, segment_intersects_circle, wrap_around_mut,
};

#[test]
fn test_distance_between_points() {
    let a = coord! { x: 1.0, y: 2.0 };
    let b = coord! { x: 4.0, y: 6.0 };

    assert!((distance(a, b) - 5.0).abs() < 1e-6);
    assert_eq!(distance(b, a), distance(a, b));
    assert_eq!(distance(a, a), 0.0);
}

#[test]
fn test_mod_angle_wraps_into_turn() {
    let tau = std::f32::consts::TAU;

    assert!((mod_angle(-0.5) - (tau - 0.5)).abs() < 1e-5);
    assert!((mod_angle(tau + 1.0) - 1.0).abs() < 1e-5);
    assert_eq!(mod_angle(0.0), 0.0);
}

#[test]
fn test_segment_hits_circle_between_endpoints() {
    let start = coord! { x: 0.0, y: 0.0 };
    let end = coord! { x: 100.0, y: 0.0 };

    assert!(segment_intersects_circle(start, end, coord! { x: 50.0, y: 10.0 }, 16.0));
    assert!(!segment_intersects_circle(start, end, coord! { x: 50.0, y: 20.0 }, 16.0));
    // beyond the far end
    assert!(!segment_intersects_circle(start, end, coord! { x: 130.0, y: 0.0 }, 16.0));
    // zero radius never hits
    assert!(!segment_intersects_circle(start, end, coord! { x: 50.0, y: 0.0 }, 0.0));
}

#[test]
fn test_wrap_around_keeps_positions_in_world() {
    let mut pos = coord! { x: -1.0, y: 1001.0 };
    wrap_around_mut(&mut pos, 1000.0);
    assert!((pos.x - 999.0).abs() < 1e-3);
    assert!((pos.y - 1.0).abs() < 1e-3);

    let mut tiny = coord! { x: -1e-8, y: 0.0 };
    wrap_around_mut(&mut tiny, 1000.0);
    assert!((0.0..1000.0).contains(&tiny.x));
}
