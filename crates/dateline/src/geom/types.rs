//! Basic lon/lat value types.
//!
//! - `Point`: (longitude, latitude) in degrees, compared exactly.
//! - `Segment`: ordered endpoint pair; generic so the splitter can reuse it
//!   for connectors between vertex ids.
//! - `Side`: east/west of the antimeridian.

use nalgebra::Vector2;

use crate::cfg::ANTIMERIDIAN;

/// Longitude/latitude pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Ordered pair `p1 → p2`.
///
/// Zero-length segments (`p1 == p2`) are allowed; they never cross anything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<P = Point> {
    pub p1: P,
    pub p2: P,
}

impl<P: Copy + PartialEq> Segment<P> {
    #[inline]
    pub fn new(p1: P, p2: P) -> Self {
        Self { p1, p2 }
    }
    #[inline]
    pub fn contains(&self, p: P) -> bool {
        self.p1 == p || self.p2 == p
    }
    /// The endpoint that is not `p`. `p` must be one of the endpoints.
    #[inline]
    pub fn other(&self, p: P) -> P {
        debug_assert!(self.contains(p), "other() called with a foreign endpoint");
        if p == self.p1 {
            self.p2
        } else {
            self.p1
        }
    }
}

/// Hemisphere relative to the antimeridian that a traversal is walking on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// East of the prime meridian: `0 < lon <= 180`.
    Positive,
    /// Everything else, including `lon == 0` and `lon == -180`.
    Negative,
}

impl Side {
    #[inline]
    pub fn of(lon: f64) -> Self {
        if lon > 0.0 && lon <= ANTIMERIDIAN {
            Side::Positive
        } else {
            Side::Negative
        }
    }
    /// Longitude a cut vertex is written with when emitted on this side.
    #[inline]
    pub fn boundary_lon(self) -> f64 {
        match self {
            Side::Positive => ANTIMERIDIAN,
            Side::Negative => -ANTIMERIDIAN,
        }
    }
}
