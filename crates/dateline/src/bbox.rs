//! Wrap-aware bounding rectangles in lon/lat space.
//!
//! Model
//! - Longitudes live on a circle. The bounding longitude range of a set of
//!   points (or arcs) is the complement of the largest gap between them, so a
//!   cluster around ±180° gets a narrow range that crosses the antimeridian
//!   instead of one spanning the whole globe.
//! - The wrap-around gap wins ties, so an extent that can be expressed
//!   without crossing is.
//! - Latitudes do not wrap: plain min/max.

use crate::cfg::{ANTIMERIDIAN, FULL_TURN};
use crate::geom::{normalize, Point};

/// Lon/lat rectangle. `start_lon > end_lon` means it crosses the antimeridian.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoRect {
    pub start_lon: f64,
    pub end_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl GeoRect {
    #[inline]
    pub fn new(start_lon: f64, end_lon: f64, min_lat: f64, max_lat: f64) -> Self {
        Self {
            start_lon,
            end_lon,
            min_lat,
            max_lat,
        }
    }

    #[inline]
    pub fn crosses_antimeridian(&self) -> bool {
        self.start_lon > self.end_lon
    }

    /// Longitude extent in degrees, going east from `start_lon`.
    pub fn lon_span(&self) -> f64 {
        if self.crosses_antimeridian() {
            FULL_TURN - (self.start_lon - self.end_lon)
        } else {
            self.end_lon - self.start_lon
        }
    }

    /// Smallest rectangle covering `points`. `None` for no points.
    pub fn bounding(points: &[Point]) -> Option<GeoRect> {
        let (min_lat, max_lat) = lat_range(points.iter().map(|p| p.y))?;
        let arcs = points.iter().map(|p| {
            let x = normalize(p.x);
            (x, x)
        });
        let (start_lon, end_lon) = covering_arc(arcs)?;
        Some(GeoRect::new(start_lon, end_lon, min_lat, max_lat))
    }

    /// Smallest rectangle covering all `rects`. `None` for no rects.
    pub fn union(rects: &[GeoRect]) -> Option<GeoRect> {
        let (min_lat, max_lat) = lat_range(rects.iter().flat_map(|r| [r.min_lat, r.max_lat]))?;
        let arcs = rects.iter().map(|r| (r.start_lon, r.end_lon));
        let (start_lon, end_lon) = covering_arc(arcs)?;
        Some(GeoRect::new(start_lon, end_lon, min_lat, max_lat))
    }

    /// One rectangle per side of the antimeridian.
    pub fn split_by_antimeridian(&self) -> Vec<GeoRect> {
        if self.crosses_antimeridian() {
            vec![
                GeoRect::new(self.start_lon, ANTIMERIDIAN, self.min_lat, self.max_lat),
                GeoRect::new(-ANTIMERIDIAN, self.end_lon, self.min_lat, self.max_lat),
            ]
        } else {
            vec![*self]
        }
    }
}

fn lat_range(lats: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    lats.fold(None, |acc, y| match acc {
        None => Some((y, y)),
        Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
    })
}

/// Complement of the largest gap between `arcs` on the longitude circle.
/// An arc with `start > end` wraps through the antimeridian.
fn covering_arc(arcs: impl Iterator<Item = (f64, f64)>) -> Option<(f64, f64)> {
    let mut ranges: Vec<(f64, f64)> = Vec::new();
    for (start, end) in arcs {
        if start > end {
            ranges.push((start, ANTIMERIDIAN));
            ranges.push((-ANTIMERIDIAN, end));
        } else {
            ranges.push((start, end));
        }
    }
    if ranges.is_empty() {
        return None;
    }
    ranges.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let first_lower = ranges[0].0;
    let max_upper = ranges
        .iter()
        .map(|r| r.1)
        .fold(f64::NEG_INFINITY, f64::max);
    let mut best_gap = first_lower + FULL_TURN - max_upper;
    let mut best: Option<(f64, f64)> = None;

    let mut prev_upper = ranges[0].1;
    for &(lower, upper) in &ranges[1..] {
        if lower > prev_upper && lower - prev_upper > best_gap {
            best_gap = lower - prev_upper;
            best = Some((lower, prev_upper));
        }
        prev_upper = prev_upper.max(upper);
    }
    Some(best.unwrap_or((first_lower, max_upper)))
}
