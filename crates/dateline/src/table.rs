//! Batch driver over column-oriented coordinate tables.
//!
//! - Finds the longitude/latitude columns by alias, extracts rings, splits
//!   each one and rebuilds a two-column table under the same names.
//! - A table without both coordinate families is not an error; it passes
//!   through unchanged.
//! - Row count is not preserved: every synthesized antimeridian vertex adds
//!   a row. Other columns are therefore not carried over.

use std::fmt;

use polars::prelude::*;

use crate::split::{split_coordinates, SplitError};

/// Recognized longitude column names, in lookup order.
pub const LON_COLUMNS: [&str; 4] = ["x", "lon", "ln", "longitude"];
/// Recognized latitude column names, in lookup order.
pub const LAT_COLUMNS: [&str; 3] = ["y", "lat", "latitude"];

/// Errors surfaced by the batch driver.
#[derive(Debug)]
pub enum BatchError {
    /// A ring could not be split.
    Split(SplitError),
    /// A coordinate cell is null.
    NullCoordinate { column: String, row: usize },
    /// Column lookup, cast or frame construction failed.
    Table(PolarsError),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::Split(err) => write!(f, "{}", err),
            BatchError::NullCoordinate { column, row } => {
                write!(f, "null coordinate in column '{}' at row {}", column, row)
            }
            BatchError::Table(err) => write!(f, "table error: {}", err),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Split(err) => Some(err),
            BatchError::Table(err) => Some(err),
            BatchError::NullCoordinate { .. } => None,
        }
    }
}

impl From<SplitError> for BatchError {
    fn from(err: SplitError) -> Self {
        BatchError::Split(err)
    }
}

impl From<PolarsError> for BatchError {
    fn from(err: PolarsError) -> Self {
        BatchError::Table(err)
    }
}

/// First alias present in `df`, if any.
pub fn find_column(df: &DataFrame, aliases: &[&'static str]) -> Option<&'static str> {
    aliases
        .iter()
        .copied()
        .find(|name| df.get_column_index(name).is_some())
}

/// Split all rings in `df` at the antimeridian.
///
/// Returns `df` unchanged when it lacks a longitude or a latitude column.
pub fn split_by_antimeridian(df: &DataFrame) -> Result<DataFrame, BatchError> {
    match (find_column(df, &LON_COLUMNS), find_column(df, &LAT_COLUMNS)) {
        (Some(lon), Some(lat)) => split_by_antimeridian_with(df, lon, lat),
        _ => {
            tracing::debug!(cols = df.width(), "no coordinate columns, passing through");
            Ok(df.clone())
        }
    }
}

/// Like [`split_by_antimeridian`], with explicit column names.
pub fn split_by_antimeridian_with(
    df: &DataFrame,
    lon: &str,
    lat: &str,
) -> Result<DataFrame, BatchError> {
    let xs = column_values(df, lon)?;
    let ys = column_values(df, lat)?;
    let (xs, ys) = split_coordinates(&xs, &ys)?;
    tracing::debug!(
        rows_in = df.height(),
        rows_out = xs.len(),
        lon,
        lat,
        "split_by_antimeridian"
    );
    let out = DataFrame::new(vec![Series::new(lon.into(), xs), Series::new(lat.into(), ys)])?;
    Ok(out)
}

/// Values of column `name` as `f64`; nulls are an error.
pub fn column_values(df: &DataFrame, name: &str) -> Result<Vec<f64>, BatchError> {
    let series = df.column(name)?.cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| {
            v.ok_or_else(|| BatchError::NullCoordinate {
                column: name.to_string(),
                row,
            })
        })
        .collect()
}
