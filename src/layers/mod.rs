pub mod activation;
pub mod dense;
pub mod traits;

use ndarray::{Array1, ArrayView1};
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::error::Result;

pub use activation::ActivationLayer;
pub use dense::DenseLayer;
pub use traits::Layer as LayerTrait;

/// Every layer variant a [`Network`](crate::network::Network) can own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayerKind {
    Dense(DenseLayer),
    Activation(ActivationLayer),
}

impl LayerKind {
    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            LayerKind::Dense(layer) => layer.validate(),
            LayerKind::Activation(layer) => layer.validate(),
        }
    }
}

impl LayerTrait for LayerKind {
    fn compute(&self, input: ArrayView1<f64>) -> Result<Array1<f64>> {
        match self {
            LayerKind::Dense(layer) => layer.compute(input),
            LayerKind::Activation(layer) => layer.compute(input),
        }
    }

    fn input_size(&self) -> usize {
        match self {
            LayerKind::Dense(layer) => layer.input_size(),
            LayerKind::Activation(layer) => layer.input_size(),
        }
    }

    fn output_size(&self) -> usize {
        match self {
            LayerKind::Dense(layer) => layer.output_size(),
            LayerKind::Activation(layer) => layer.output_size(),
        }
    }
}

impl From<DenseLayer> for LayerKind {
    fn from(layer: DenseLayer) -> Self {
        LayerKind::Dense(layer)
    }
}

impl From<ActivationLayer> for LayerKind {
    fn from(layer: ActivationLayer) -> Self {
        LayerKind::Activation(layer)
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerKind::Dense(layer) => {
                write!(f, "Dense({} -> {})", layer.input_size(), layer.output_size())
            }
            LayerKind::Activation(layer) => {
                write!(f, "{}({})", layer.activation(), layer.input_size())
            }
        }
    }
}
