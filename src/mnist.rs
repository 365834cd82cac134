//! The MNIST digit classifier: `784 → 256 → 128 → 10` with ReLU between dense
//! layers and a softmax on the scores.

use log::info;
use std::path::Path;

use crate::builders::NetworkBuilder;
use crate::data::weights::{load_bias, load_weights_checked};
use crate::error::Result;
use crate::layers::DenseLayer;
use crate::network::Network;

/// Flattened 28×28 image
pub const INPUT_SIZE: usize = 784;

/// Digits 0 through 9
pub const NUM_CLASSES: usize = 10;

/// `(file stem, input size, output size)` for each dense layer, in order
pub const DENSE_LAYERS: [(&str, usize, usize); 3] = [
    ("fc1", INPUT_SIZE, 256),
    ("fc2", 256, 128),
    ("fc3", 128, NUM_CLASSES),
];

/// Build the classifier from `<stem>_weight.json` / `<stem>_bias.json` files
/// in `weights_dir`.
pub fn build_mnist_mlp<P: AsRef<Path>>(weights_dir: P) -> Result<Network> {
    let weights_dir = weights_dir.as_ref();
    let network = assemble(|stem, input_size, output_size| {
        let weights = load_weights_checked(
            weights_dir.join(format!("{}_weight.json", stem)),
            output_size,
            input_size,
        )?;
        let biases = load_bias(weights_dir.join(format!("{}_bias.json", stem)), output_size)?;
        DenseLayer::new(input_size, output_size)?
            .with_weights(weights)?
            .with_biases(biases)
    })?;
    info!("built MNIST network from {}", weights_dir.display());
    Ok(network)
}

/// The classifier topology with every parameter zeroed.
pub fn mnist_topology() -> Result<Network> {
    assemble(|_, input_size, output_size| DenseLayer::new(input_size, output_size))
}

fn assemble<F>(mut dense: F) -> Result<Network>
where
    F: FnMut(&str, usize, usize) -> Result<DenseLayer>,
{
    let mut builder = NetworkBuilder::new();
    for (i, &(stem, input_size, output_size)) in DENSE_LAYERS.iter().enumerate() {
        builder = builder.add_dense(dense(stem, input_size, output_size)?);
        if i + 1 < DENSE_LAYERS.len() {
            builder = builder.add_relu()?;
        }
    }
    builder.add_softmax()?.build()
}
