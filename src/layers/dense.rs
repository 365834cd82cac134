use ndarray::{Array1, Array2, ArrayView1};
use serde::{Serialize, Deserialize};

use super::traits::Layer as LayerTrait;
use crate::error::{DigitNetError, Result};

/// A fully connected (dense) layer computing `W·x + b`.
///
/// `weights` has shape `(output_size, input_size)` and `biases` has length
/// `output_size`. Both fields are private so the shape invariant survives
/// every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseLayer {
    weights: Array2<f64>,
    biases: Array1<f64>,
}

impl DenseLayer {
    /// Create a new dense layer with zeroed weights and biases.
    /// Fails if either dimension is zero.
    pub fn new(input_size: usize, output_size: usize) -> Result<Self> {
        if input_size == 0 {
            return Err(DigitNetError::invalid_parameter(
                "input_size",
                "must be greater than 0",
            ));
        }
        if output_size == 0 {
            return Err(DigitNetError::invalid_parameter(
                "output_size",
                "must be greater than 0",
            ));
        }

        Ok(DenseLayer {
            weights: Array2::zeros((output_size, input_size)),
            biases: Array1::zeros(output_size),
        })
    }

    pub fn with_weights(mut self, weights: Array2<f64>) -> Result<Self> {
        self.set_weights(weights)?;
        Ok(self)
    }

    pub fn with_biases(mut self, biases: Array1<f64>) -> Result<Self> {
        self.set_biases(biases)?;
        Ok(self)
    }

    /// Replace the weight matrix. On a shape mismatch the old weights are kept.
    pub fn set_weights(&mut self, weights: Array2<f64>) -> Result<()> {
        if weights.dim() != self.weights.dim() {
            let (rows, cols) = self.weights.dim();
            return Err(DigitNetError::shape_mismatch(
                format!("weights of shape {}x{}", rows, cols),
                format!("{}x{}", weights.nrows(), weights.ncols()),
            ));
        }
        self.weights = weights;
        Ok(())
    }

    /// Replace the bias vector. On a length mismatch the old biases are kept.
    pub fn set_biases(&mut self, biases: Array1<f64>) -> Result<()> {
        if biases.len() != self.biases.len() {
            return Err(DigitNetError::shape_mismatch(
                format!("biases of length {}", self.biases.len()),
                biases.len().to_string(),
            ));
        }
        self.biases = biases;
        Ok(())
    }

    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    pub fn biases(&self) -> &Array1<f64> {
        &self.biases
    }

    /// Re-check the shape invariant. Only deserialized layers can break it.
    pub(crate) fn validate(&self) -> Result<()> {
        let (rows, cols) = self.weights.dim();
        if rows == 0 || cols == 0 {
            return Err(DigitNetError::invalid_parameter(
                "weights".to_string(),
                format!("dimensions must be greater than 0, got {}x{}", rows, cols),
            ));
        }
        if self.biases.len() != rows {
            return Err(DigitNetError::shape_mismatch(
                format!("biases of length {}", rows),
                self.biases.len().to_string(),
            ));
        }
        Ok(())
    }
}

impl LayerTrait for DenseLayer {
    fn compute(&self, input: ArrayView1<f64>) -> Result<Array1<f64>> {
        if input.len() != self.input_size() {
            return Err(DigitNetError::shape_mismatch(
                format!("input of length {}", self.input_size()),
                input.len().to_string(),
            ));
        }
        Ok(self.weights.dot(&input) + &self.biases)
    }

    fn input_size(&self) -> usize {
        self.weights.ncols()
    }

    fn output_size(&self) -> usize {
        self.weights.nrows()
    }
}
