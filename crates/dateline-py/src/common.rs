use dateline::{Point, SplitError};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn points_from_py(xs: &[f64], ys: &[f64]) -> PyResult<Vec<Point>> {
    if xs.len() != ys.len() {
        return Err(map_split_err(SplitError::LengthMismatch {
            x: xs.len(),
            y: ys.len(),
        }));
    }
    Ok(xs.iter().zip(ys).map(|(&x, &y)| Point::new(x, y)).collect())
}

pub fn map_split_err(err: SplitError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
