use bincode::{serialize, deserialize};
use log::{debug, info, warn};
use ndarray::{Array1, ArrayView1};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{DigitNetError, Result};
use crate::eval::argmax;
use crate::layers::{LayerKind, LayerTrait};

/// An ordered chain of layers evaluated front to back.
///
/// The network exclusively owns its layers. It is append-only: layers are
/// pushed with [`add_layer`](Self::add_layer) and never removed.
///
/// Shape consistency between neighbours is *not* checked on insertion, so a
/// network can pass through inconsistent intermediate states while it is being
/// assembled. Call [`check_consistency`](Self::check_consistency) once the
/// chain is complete. [`forward`](Self::forward) does not re-check it; a
/// mismatched chain surfaces as the inner layer's shape-mismatch error.
/// [`NetworkBuilder`](crate::builders::NetworkBuilder) runs the check eagerly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Network {
    layers: Vec<LayerKind>,
}

impl Network {
    /// Create an empty network
    pub fn new() -> Self {
        Network { layers: Vec::new() }
    }

    pub fn with_layers(mut self, layers: Vec<LayerKind>) -> Self {
        self.layers = layers;
        self
    }

    /// Append a layer to the end of the chain, taking ownership of it.
    pub fn add_layer<L: Into<LayerKind>>(&mut self, layer: L) {
        let layer = layer.into();
        debug!("adding layer {}: {}", self.layers.len(), layer);
        self.layers.push(layer);
    }

    /// Verify that every layer's output size matches the next layer's input size.
    ///
    /// An empty network is trivially consistent. On the first mismatch this
    /// returns `Err(DimensionMismatch)` when `throw_on_error` is set and
    /// `Ok(false)` otherwise. The layer sequence is never modified.
    pub fn check_consistency(&self, throw_on_error: bool) -> Result<bool> {
        for (index, pair) in self.layers.windows(2).enumerate() {
            let output_size = pair[0].output_size();
            let next_input_size = pair[1].input_size();
            if output_size != next_input_size {
                warn!(
                    "layer {} outputs {} values but layer {} expects {}",
                    index,
                    output_size,
                    index + 1,
                    next_input_size
                );
                if throw_on_error {
                    return Err(DigitNetError::DimensionMismatch {
                        index,
                        output_size,
                        next_input_size,
                    });
                }
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Perform a forward pass for a single input vector.
    ///
    /// Each layer's output becomes the next layer's input. Errors from any
    /// layer are returned as-is; no partial output is ever produced.
    pub fn forward(&self, input: ArrayView1<f64>) -> Result<Array1<f64>> {
        let (first, rest) = self
            .layers
            .split_first()
            .ok_or_else(|| DigitNetError::EmptyNetwork("run a forward pass".to_string()))?;

        let mut current = first.compute(input)?;
        for layer in rest {
            current = layer.compute(current.view())?;
        }
        debug!("forward pass produced {} values", current.len());
        Ok(current)
    }

    /// Run a forward pass and return the index of the highest score.
    pub fn classify(&self, input: ArrayView1<f64>) -> Result<usize> {
        let output = self.forward(input)?;
        argmax(output.view())
            .ok_or_else(|| DigitNetError::Internal("network produced no comparable score".to_string()))
    }

    /// Input size of the first layer
    pub fn input_size(&self) -> Result<usize> {
        self.layers
            .first()
            .map(|layer| layer.input_size())
            .ok_or_else(|| DigitNetError::EmptyNetwork("query the input size".to_string()))
    }

    /// Output size of the last layer
    pub fn output_size(&self) -> Result<usize> {
        self.layers
            .last()
            .map(|layer| layer.output_size())
            .ok_or_else(|| DigitNetError::EmptyNetwork("query the output size".to_string()))
    }

    pub fn layers(&self) -> &[LayerKind] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Save the layer chain (dimensions, activation tags and parameters) to a file.
    pub fn save_weights<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let serialized = serialize(&self.layers)?;
        let mut file = fs::File::create(path)?;
        file.write_all(&serialized)?;
        info!("saved {} layers to {}", self.layers.len(), path.display());
        Ok(())
    }

    /// Replace this network's layers with the chain stored at `path`.
    ///
    /// The current layers are only replaced once the whole file has been
    /// decoded and every layer passes its shape checks.
    pub fn load_weights<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file = fs::File::open(path)?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;
        let layers: Vec<LayerKind> = deserialize(&buffer)?;
        for layer in &layers {
            layer.validate()?;
        }
        info!("loaded {} layers from {}", layers.len(), path.display());
        self.layers = layers;
        Ok(())
    }

    /// Load a network previously written by [`save_weights`](Self::save_weights).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut network = Network::new();
        network.load_weights(path)?;
        Ok(network)
    }
}
