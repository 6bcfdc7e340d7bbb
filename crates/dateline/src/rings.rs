//! Ring extraction from flat, column-oriented coordinates.
//!
//! Model
//! - The input is one or more closed rings laid end to end. A ring closes when
//!   the scan returns to its opening coordinate (exact equality); the next
//!   ring starts at the following row.
//! - Trailing rows that never return to their opening coordinate are reported
//!   as `SplitError::UnclosedRing`, never dropped.

use crate::geom::Point;
use crate::split::SplitError;

/// A closed ring of consecutive input rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    /// Row index of the ring's first vertex in the source sequence.
    pub origin: usize,
    /// Vertices in order; a closed ring repeats its first point at the end.
    pub points: Vec<Point>,
}

impl Ring {
    #[inline]
    pub fn new(origin: usize, points: Vec<Point>) -> Self {
        Self { origin, points }
    }
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.points.len() >= 2 && self.points.first() == self.points.last()
    }
    /// Vertices without the closing duplicate.
    pub fn open_points(&self) -> &[Point] {
        if self.is_closed() {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points
        }
    }
}

/// Lazily cut parallel `xs`/`ys` into closed rings.
pub fn extract_rings<'a>(xs: &'a [f64], ys: &'a [f64]) -> Result<Rings<'a>, SplitError> {
    if xs.len() != ys.len() {
        return Err(SplitError::LengthMismatch {
            x: xs.len(),
            y: ys.len(),
        });
    }
    Ok(Rings { xs, ys, pos: 0 })
}

/// Iterator returned by [`extract_rings`].
#[derive(Clone, Debug)]
pub struct Rings<'a> {
    xs: &'a [f64],
    ys: &'a [f64],
    pos: usize,
}

impl Iterator for Rings<'_> {
    type Item = Result<Ring, SplitError>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.xs.len();
        if self.pos >= len {
            return None;
        }
        let origin = self.pos;
        let first = Point::new(self.xs[origin], self.ys[origin]);
        let mut points = vec![first];
        for i in origin + 1..len {
            let p = Point::new(self.xs[i], self.ys[i]);
            points.push(p);
            if p == first {
                self.pos = i + 1;
                return Some(Ok(Ring::new(origin, points)));
            }
        }
        self.pos = len;
        Some(Err(SplitError::UnclosedRing {
            ring: origin,
            len: points.len(),
        }))
    }
}
