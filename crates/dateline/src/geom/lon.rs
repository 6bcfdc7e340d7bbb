//! Longitude arithmetic around the antimeridian.
//!
//! - `normalize`: fold a longitude into the canonical range.
//! - `should_split`: does the short path of an edge pass through ±180°?
//! - `intersect`: where a crossing edge meets the antimeridian.

use nalgebra::Vector2;

use super::types::{Point, Segment};
use crate::cfg::{ANTIMERIDIAN, FULL_TURN, MAX_LAT};

/// Fold `x` into `[-180, 180]` with a truncated remainder.
///
/// Both `180` and `-180` are fixed points, so an already emitted boundary
/// vertex keeps its sign when a ring is split a second time.
#[inline]
pub fn normalize(x: f64) -> f64 {
    let r = x % FULL_TURN;
    if r > ANTIMERIDIAN {
        r - FULL_TURN
    } else if r < -ANTIMERIDIAN {
        r + FULL_TURN
    } else {
        r
    }
}

/// True if the shorter path between the endpoint longitudes crosses the
/// antimeridian rather than the prime meridian. Inputs must be normalized.
pub fn should_split(edge: &Segment) -> bool {
    let (x1, x2) = (edge.p1.x, edge.p2.x);
    if (x1 >= 0.0 && x2 >= 0.0) || (x1 <= 0.0 && x2 <= 0.0) {
        return false;
    }
    // Runs along the cut itself (180 → -180).
    if x1.abs() == ANTIMERIDIAN && x2.abs() == ANTIMERIDIAN {
        return false;
    }
    let direct_distance = (x2 - x1).abs();
    let cross_distance = FULL_TURN - (x1.abs() + x2.abs());
    cross_distance < direct_distance
}

/// Point where a crossing edge meets the antimeridian.
///
/// Both endpoints are shifted into `[0, 360)` first so the edge and the
/// reference segment `x = 180, y ∈ [-90, 90]` share a non-wrapping frame.
/// Returns `None` if the lines are parallel, which cannot happen for an edge
/// accepted by [`should_split`].
pub fn intersect(edge: &Segment) -> Option<Point> {
    debug_assert!(should_split(edge), "intersect() on a non-crossing edge");
    let a1 = Vector2::new(ANTIMERIDIAN, -MAX_LAT);
    let a2 = Vector2::new(ANTIMERIDIAN, MAX_LAT);
    let b1 = positize(edge.p1).to_vec2();
    let b2 = positize(edge.p2).to_vec2();

    let xdiff = Vector2::new(a1.x - a2.x, b1.x - b2.x);
    let ydiff = Vector2::new(a1.y - a2.y, b1.y - b2.y);
    let div = det(xdiff, ydiff);
    if div == 0.0 {
        return None;
    }
    let d = Vector2::new(det(a1, a2), det(b1, b2));
    let ix = det(d, xdiff) / div;
    let iy = det(d, ydiff) / div;
    Some(Point::new(normalize(ix), iy))
}

#[inline]
fn positize(p: Point) -> Point {
    if p.x < 0.0 {
        Point::new(p.x + FULL_TURN, p.y)
    } else {
        p
    }
}

/// Determinant of the 2×2 matrix with columns `a`, `b`.
#[inline]
fn det(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
