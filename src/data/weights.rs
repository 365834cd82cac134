//! JSON matrix files holding exported layer parameters.
//!
//! A matrix file looks like
//!
//! ```json
//! { "rows": 2, "cols": 3, "data": [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] }
//! ```
//!
//! with `data` stored row-major. Bias vectors use the same format with either
//! `rows == 1` or `cols == 1`.

use log::{info, warn};
use ndarray::{Array1, Array2};
use serde::{Serialize, Deserialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{DigitNetError, Result};

#[derive(Debug, Serialize, Deserialize)]
struct MatrixFile {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Read a matrix file as stored, without any reshaping.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<Array2<f64>> {
    let path = path.as_ref();
    let file = fs::File::open(path)?;
    let matrix: MatrixFile = serde_json::from_reader(BufReader::new(file))?;

    let expected = matrix.rows.checked_mul(matrix.cols).ok_or_else(|| {
        DigitNetError::shape_mismatch(
            format!("a {}x{} matrix that fits in memory in {}", matrix.rows, matrix.cols, path.display()),
            format!("{} values", matrix.data.len()),
        )
    })?;
    if matrix.data.len() != expected {
        return Err(DigitNetError::shape_mismatch(
            format!("{} values for a {}x{} matrix in {}", expected, matrix.rows, matrix.cols, path.display()),
            matrix.data.len().to_string(),
        ));
    }

    Array2::from_shape_vec((matrix.rows, matrix.cols), matrix.data)
        .map_err(|e| DigitNetError::Internal(e.to_string()))
}

/// Write a matrix in the format read by [`load_matrix`].
pub fn save_matrix<P: AsRef<Path>>(path: P, matrix: &Array2<f64>) -> Result<()> {
    let file = fs::File::create(path.as_ref())?;
    let stored = MatrixFile {
        rows: matrix.nrows(),
        cols: matrix.ncols(),
        data: matrix.iter().copied().collect(),
    };
    serde_json::to_writer_pretty(BufWriter::new(file), &stored)?;
    Ok(())
}

/// Load a bias vector stored as a column, a row, or any flat matrix.
///
/// Fails with a shape mismatch unless exactly `expected_len` values are found.
pub fn load_bias<P: AsRef<Path>>(path: P, expected_len: usize) -> Result<Array1<f64>> {
    let path = path.as_ref();
    let matrix = load_matrix(path)?;
    let bias: Array1<f64> = match matrix.dim() {
        (_, 1) => matrix.column(0).to_owned(),
        (1, _) => matrix.row(0).to_owned(),
        _ => matrix.iter().copied().collect(),
    };

    if bias.len() != expected_len {
        return Err(DigitNetError::shape_mismatch(
            format!("bias of length {} in {}", expected_len, path.display()),
            bias.len().to_string(),
        ));
    }
    Ok(bias)
}

/// Load a weight matrix and reconcile it to `(expected_out, expected_in)`.
///
/// - exact shape: returned as is
/// - swapped shape: transposed
/// - same number of values in another shape: reshaped row-major
/// - anything else: shape mismatch
pub fn load_weights_checked<P: AsRef<Path>>(
    path: P,
    expected_out: usize,
    expected_in: usize,
) -> Result<Array2<f64>> {
    let path = path.as_ref();
    let weights = load_matrix(path)?;
    let (rows, cols) = weights.dim();
    info!("loaded {} shape = {} x {}", path.display(), rows, cols);

    if (rows, cols) == (expected_out, expected_in) {
        return Ok(weights);
    }

    if (rows, cols) == (expected_in, expected_out) {
        warn!("auto-transposing weights for {} (swapped dims)", path.display());
        return Ok(weights.reversed_axes());
    }

    if expected_out.checked_mul(expected_in) == Some(weights.len()) {
        warn!(
            "reshaping {}x{} weights in {} to {}x{}",
            rows,
            cols,
            path.display(),
            expected_out,
            expected_in
        );
        let flat: Vec<f64> = weights.iter().copied().collect();
        return Array2::from_shape_vec((expected_out, expected_in), flat)
            .map_err(|e| DigitNetError::Internal(e.to_string()));
    }

    Err(DigitNetError::shape_mismatch(
        format!("weights of shape {}x{} in {}", expected_out, expected_in, path.display()),
        format!("{}x{}", rows, cols),
    ))
}
