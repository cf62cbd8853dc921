//! Geometric utility functions for sensing, movement and collision tests.
//!
//! Positions and velocities are plain [`geo::Coord`] values so they can be
//! added, subtracted and scaled directly.

use geo::algorithm::Distance;
use geo::{Coord, Euclidean, Point, coord};
use std::f32::consts::TAU;

/// 2D point or vector in world units.
pub type Vec2 = Coord<f32>;

/// Returns the unit vector pointing along `angle` (radians).
#[inline]
pub fn heading_vector(angle: f32) -> Vec2 {
    coord! { x: angle.cos(), y: angle.sin() }
}

/// Squared length of a vector.
#[inline]
pub fn length_squared(v: Vec2) -> f32 {
    v.x * v.x + v.y * v.y
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    Euclidean.distance(Point::from(a), Point::from(b))
}

/// Dot product of two vectors.
#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.x * b.x + a.y * b.y
}

/// Normalizes an angle into `[0, 2π)`.
pub fn mod_angle(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}

/// Checks whether `point` lies inside (or on) the circle at `center`.
///
/// A circle with zero radius contains nothing.
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    if radius == 0.0 {
        return false;
    }
    length_squared(center - point) <= radius * radius
}

/// Checks whether the segment `start`..`end` touches the circle at `center`.
///
/// The segment hits the circle when either endpoint lies inside it, or when
/// the projection of the center onto the segment is inside the circle and
/// falls within the segment's extent.
///
/// # Arguments
///
/// * `start` - Starting point of the segment
/// * `end` - Ending point of the segment
/// * `center` - Center of the circle
/// * `radius` - Radius of the circle
pub fn segment_intersects_circle(start: Vec2, end: Vec2, center: Vec2, radius: f32) -> bool {
    if point_in_circle(start, center, radius) || point_in_circle(end, center, radius) {
        return true;
    }

    let d = end - start;
    let to_center = center - start;

    let d_len2 = length_squared(d);
    let projection = if d_len2 > 0.0 {
        d * (dot(to_center, d) / d_len2)
    } else {
        d
    };

    let nearest = start + projection;

    point_in_circle(nearest, center, radius)
        && length_squared(projection) <= d_len2
        && dot(projection, d) >= 0.0
}

/// Wraps a position around the world boundaries (toroidal topology).
///
/// # Arguments
///
/// * `v` - Mutable position to wrap
/// * `world_size` - Edge length of the square world
pub fn wrap_around_mut(v: &mut Vec2, world_size: f32) {
    v.x = wrap(v.x, world_size);
    v.y = wrap(v.y, world_size);
}

fn wrap(value: f32, size: f32) -> f32 {
    let wrapped = value.rem_euclid(size);
    // rem_euclid can round up to `size` for tiny negative inputs
    if wrapped >= size { 0.0 } else { wrapped }
}
