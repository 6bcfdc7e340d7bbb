//! Fixed constants for antimeridian arithmetic (internal).
//!
//! Policy
//! - Exact comparisons only: a ring literally repeats its opening coordinate
//!   and a boundary vertex is literally ±180. There are no tolerances.

/// Longitude of the antimeridian, in degrees.
pub(crate) const ANTIMERIDIAN: f64 = 180.0;
/// Full turn, in degrees.
pub(crate) const FULL_TURN: f64 = 360.0;
/// Latitude half-span of the reference antimeridian segment.
pub(crate) const MAX_LAT: f64 = 90.0;
/// A vertex may be reached once per side of the cut, never a third time.
pub(crate) const MAX_VISITS: u8 = 2;
