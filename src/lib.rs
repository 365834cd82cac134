//! # digitnet - Layer-Chain MLP Inference
//!
//! digitnet evaluates pre-trained multi-layer perceptrons on single input
//! vectors. It is built around MNIST-style digit classification: weights
//! exported from a training framework are loaded into an ordered chain of
//! dense and activation layers, and images are preprocessed into the vectors
//! that chain expects.
//!
//! ## Key Features
//!
//! - **Layer chain**: dense (`W·x + b`), ReLU and numerically stable softmax layers
//! - **Shape safety**: every size mismatch is reported as an error, never truncated
//! - **Explicit validation**: networks are checked for adjacent-layer consistency on demand
//! - **Loaders**: JSON weight matrices with transpose/reshape reconciliation,
//!   image preprocessing, label files and labelled datasets
//!
//! ## Quick Start
//!
//! ```rust
//! use digitnet::layers::{ActivationLayer, DenseLayer};
//! use digitnet::network::Network;
//! use ndarray::{array, Array1};
//!
//! # fn main() -> digitnet::Result<()> {
//! let dense = DenseLayer::new(2, 3)?
//!     .with_weights(array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]])?
//!     .with_biases(Array1::zeros(3))?;
//!
//! let mut network = Network::new();
//! network.add_layer(dense);
//! network.add_layer(ActivationLayer::softmax(3)?);
//! network.check_consistency(true)?;
//!
//! let probs = network.forward(array![0.5, -0.5].view())?;
//! assert!((probs.sum() - 1.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Activation functions (ReLU, Softmax)
//! - [`builders`] - Builder that validates a chain as it is finished
//! - [`config`] - Driver configuration and input preprocessing parameters
//! - [`data`] - Weight files, image preprocessing, labels and datasets
//! - [`error`] - Error types and result handling
//! - [`eval`] - Accuracy evaluation
//! - [`layers`] - The layer trait and the dense/activation layers
//! - [`mnist`] - The 784-256-128-10 digit classifier
//! - [`network`] - The layer-chain container

pub mod activations;
pub mod builders;
pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod layers;
pub mod mnist;
pub mod network;

pub use error::{DigitNetError, Result};

#[cfg(test)]
mod tests;
