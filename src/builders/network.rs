use crate::activations::Activation;
use crate::error::{DigitNetError, Result};
use crate::layers::{ActivationLayer, DenseLayer, LayerKind, LayerTrait};
use crate::network::Network;

/// Builder for assembling a network that is known to be consistent.
///
/// Unlike [`Network::add_layer`], [`build`](Self::build) validates the whole
/// chain and refuses empty or mismatched networks.
pub struct NetworkBuilder {
    layers: Vec<LayerKind>,
}

impl NetworkBuilder {
    /// Create a new network builder
    pub fn new() -> Self {
        NetworkBuilder { layers: Vec::new() }
    }

    /// Add an already constructed layer
    pub fn add_layer<L: Into<LayerKind>>(mut self, layer: L) -> Self {
        self.layers.push(layer.into());
        self
    }

    /// Add a dense layer to the network
    pub fn add_dense(self, layer: DenseLayer) -> Self {
        self.add_layer(layer)
    }

    /// Add an activation layer sized to the previous layer's output
    pub fn add_activation(self, activation: Activation) -> Result<Self> {
        let size = self
            .layers
            .last()
            .map(|layer| layer.output_size())
            .ok_or_else(|| DigitNetError::invalid_parameter(
                "activation".to_string(),
                format!("{} needs a preceding layer to take its size from", activation),
            ))?;
        Ok(self.add_layer(ActivationLayer::new(activation, size)?))
    }

    pub fn add_relu(self) -> Result<Self> {
        self.add_activation(Activation::Relu)
    }

    pub fn add_softmax(self) -> Result<Self> {
        self.add_activation(Activation::Softmax)
    }

    /// Build the network, checking that neighbouring layers agree on their sizes
    pub fn build(self) -> Result<Network> {
        if self.layers.is_empty() {
            return Err(DigitNetError::InvalidParameter {
                name: "layers".to_string(),
                reason: "Network must have at least one layer".to_string(),
            });
        }

        let network = Network::new().with_layers(self.layers);
        network.check_consistency(true)?;
        Ok(network)
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
