//! Lon/lat primitives and antimeridian predicates.
//!
//! Purpose
//! - Value types (`Point`, `Segment`, `Side`) with exact equality.
//! - Longitude arithmetic: `normalize` into the canonical range,
//!   `should_split` to classify edges, `intersect` to place the cut vertex.
//!
//! Model
//! - Coordinates are raw degrees: `x` is longitude, `y` is latitude.
//! - An edge is assumed to follow the shorter of its two possible paths
//!   around the globe. This is a heuristic and not a spherical-geometry proof.

mod lon;
mod types;

pub use lon::{intersect, normalize, should_split};
pub use types::{Point, Segment, Side};
