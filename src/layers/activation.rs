use ndarray::{Array1, ArrayView1};
use serde::{Serialize, Deserialize};

use super::traits::Layer as LayerTrait;
use crate::activations::Activation;
use crate::error::{DigitNetError, Result};

/// A parameter-free layer applying an [`Activation`] to its whole input.
///
/// Input and output sizes are always equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationLayer {
    activation: Activation,
    size: usize,
}

impl ActivationLayer {
    pub fn new(activation: Activation, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(DigitNetError::invalid_parameter(
                "size",
                "must be greater than 0",
            ));
        }
        Ok(ActivationLayer { activation, size })
    }

    pub fn relu(size: usize) -> Result<Self> {
        Self::new(Activation::Relu, size)
    }

    pub fn softmax(size: usize) -> Result<Self> {
        Self::new(Activation::Softmax, size)
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(DigitNetError::invalid_parameter(
                "size",
                "must be greater than 0",
            ));
        }
        Ok(())
    }
}

impl LayerTrait for ActivationLayer {
    fn compute(&self, input: ArrayView1<f64>) -> Result<Array1<f64>> {
        if input.len() != self.size {
            return Err(DigitNetError::shape_mismatch(
                format!("input of length {}", self.size),
                input.len().to_string(),
            ));
        }
        Ok(self.activation.apply(input))
    }

    fn input_size(&self) -> usize {
        self.size
    }

    fn output_size(&self) -> usize {
        self.size
    }
}
