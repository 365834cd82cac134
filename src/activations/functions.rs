use ndarray::{Array1, ArrayView1};
use serde::{Serialize, Deserialize};
use std::fmt;

/// The closed set of activation functions an [`ActivationLayer`] can apply.
///
/// [`ActivationLayer`]: crate::layers::ActivationLayer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activation {
    Relu,
    Softmax,
}

impl Activation {
    /// Apply the activation function to an input vector, returning a new vector
    /// of the same length.
    pub fn apply(&self, input: ArrayView1<f64>) -> Array1<f64> {
        match self {
            Activation::Relu => relu(input),
            Activation::Softmax => softmax(input),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Relu => write!(f, "ReLU"),
            Activation::Softmax => write!(f, "Softmax"),
        }
    }
}

/// Elementwise `max(0, x)`. An empty input yields an empty output.
pub fn relu(input: ArrayView1<f64>) -> Array1<f64> {
    input.mapv(|v| v.max(0.0))
}

/// Numerically stable softmax: `exp(x_i - max(x)) / sum_j exp(x_j - max(x))`.
///
/// An empty input yields an empty output. A single element always maps to `1.0`.
pub fn softmax(input: ArrayView1<f64>) -> Array1<f64> {
    if input.is_empty() {
        return Array1::zeros(0);
    }

    let max = input.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
    let mut exps = input.mapv(|v| (v - max).exp());
    let sum = exps.sum();
    exps.mapv_inplace(|v| v / sum);
    exps
}
