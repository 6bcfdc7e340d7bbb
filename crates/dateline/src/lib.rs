//! Antimeridian-aware ring splitting for longitude/latitude geometry.
//!
//! Purpose
//! - Rewrite closed lon/lat rings that cross ±180° into rings that stay on one
//!   side, so a flat, linearly scaled canvas never draws an edge spanning the
//!   whole plot width.
//! - Operate in raw longitude/latitude space. There is no map projection here.
//!
//! Layout
//! - `geom`: points, segments, sides, longitude normalization, crossing tests.
//! - `rings`: cut a flat coordinate sequence into closed rings.
//! - `split`: the ring splitter (vertex arena + traversal state machine).
//! - `table`: batch driver over polars data frames.
//! - `bbox`: wrap-aware bounding rectangles.

pub mod bbox;
mod cfg;
pub mod geom;
pub mod rings;
pub mod split;
pub mod table;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{intersect, normalize, should_split, Point, Segment, Side};
pub use rings::{extract_rings, Ring};
pub use split::{split_coordinates, split_ring, SplitError};
pub use table::{split_by_antimeridian, split_by_antimeridian_with, BatchError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bbox::GeoRect;
    pub use crate::geom::{normalize, should_split, Point, Segment, Side};
    pub use crate::rings::{extract_rings, Ring};
    pub use crate::split::{split_coordinates, split_ring, SplitError};
    pub use crate::table::{
        split_by_antimeridian, split_by_antimeridian_with, BatchError, LAT_COLUMNS, LON_COLUMNS,
    };
}
