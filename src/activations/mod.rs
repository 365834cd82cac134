//! # Activation Functions Module
//!
//! Stateless, shape-preserving nonlinearities applied between dense layers.
//!
//! ## Available Activations
//!
//! - **ReLU** (Rectified Linear Unit): `max(0, x)` applied elementwise
//! - **Softmax**: turns a score vector into a probability distribution
//!
//! ## Usage Example
//!
//! ```rust
//! use digitnet::activations::{softmax, Activation};
//! use ndarray::array;
//!
//! let scores = array![1.0, 2.0, 3.0];
//! let probs = softmax(scores.view());
//! assert!((probs.sum() - 1.0).abs() < 1e-9);
//!
//! let rectified = Activation::Relu.apply(array![-1.0, 0.5].view());
//! assert_eq!(rectified, array![0.0, 0.5]);
//! ```
//!
//! ## Numerical Stability
//!
//! Softmax subtracts the largest input before exponentiating. Without the
//! shift, inputs around 1000 overflow `exp` and the result turns into
//! `NaN`/`inf`. With it, the largest exponent is always `exp(0) = 1`.

pub mod functions;

pub use functions::{relu, softmax, Activation};
