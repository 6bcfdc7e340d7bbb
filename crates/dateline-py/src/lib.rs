//! PyO3 bindings for the `dateline` crate.
//!
//! Notes
//! - Coordinates cross the boundary as two flat lists (lon, lat) in the same
//!   layout the batch driver uses; rings are delimited by repeating their
//!   first vertex.
//! - Errors surface as `ValueError` carrying the Rust error message.

use dateline::bbox::GeoRect;
use pyo3::prelude::*;

mod common;

use common::{map_split_err, points_from_py};

/// Split closed rings at the antimeridian. Returns the new (xs, ys).
#[pyfunction]
fn split_by_antimeridian(xs: Vec<f64>, ys: Vec<f64>) -> PyResult<(Vec<f64>, Vec<f64>)> {
    dateline::split_coordinates(&xs, &ys).map_err(map_split_err)
}

/// Wrap-aware bounding box as (start_lon, end_lon, min_lat, max_lat).
///
/// `start_lon > end_lon` when the box crosses the antimeridian; `None` for
/// empty input.
#[pyfunction]
fn bounding_rect(xs: Vec<f64>, ys: Vec<f64>) -> PyResult<Option<(f64, f64, f64, f64)>> {
    let points = points_from_py(&xs, &ys)?;
    Ok(GeoRect::bounding(&points).map(|r| (r.start_lon, r.end_lon, r.min_lat, r.max_lat)))
}

#[pymodule]
fn dateline_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(split_by_antimeridian, m)?)?;
    m.add_function(wrap_pyfunction!(bounding_rect, m)?)?;
    m.add("__version__", dateline::VERSION)?;
    Ok(())
}
