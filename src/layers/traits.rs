use ndarray::{Array1, ArrayView1};

use crate::error::Result;

/// Capability shared by every layer in a chain.
///
/// Implementations are immutable during inference: `compute` borrows the
/// layer shared, so a finished network can be evaluated from many threads.
pub trait Layer: Send + Sync {
    /// Map an input vector of length `input_size()` to an output vector of
    /// length `output_size()`.
    fn compute(&self, input: ArrayView1<f64>) -> Result<Array1<f64>>;

    /// Length of the vector this layer accepts
    fn input_size(&self) -> usize;

    /// Length of the vector this layer produces
    fn output_size(&self) -> usize;
}
