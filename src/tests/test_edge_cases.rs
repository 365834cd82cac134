use ndarray::{array, Array1};
use crate::activations::{relu, softmax, Activation};
use crate::error::DigitNetError;
use crate::layers::{ActivationLayer, DenseLayer, LayerTrait};
use crate::network::Network;

#[test]
fn test_empty_vectors() {
    let empty = Array1::<f64>::zeros(0);
    assert_eq!(relu(empty.view()).len(), 0);
    assert_eq!(softmax(empty.view()).len(), 0);
}

#[test]
fn test_single_element_softmax() {
    for value in [5.0, 0.0, -1e300, 1e300, 1000.0, -1000.0] {
        let output = softmax(array![value].view());
        assert_eq!(output, array![1.0], "softmax([{}])", value);
    }
}

#[test]
fn test_single_element_relu() {
    assert_eq!(relu(array![5.0].view()), array![5.0]);
    assert_eq!(relu(array![-5.0].view()), array![0.0]);
}

#[test]
fn test_softmax_wide_spread() {
    let output = softmax(array![-300.0, 0.0, 300.0].view());
    for &p in output.iter() {
        assert!(p.is_finite());
        assert!(p > 0.0, "probability underflowed to {}", p);
    }
    assert!((output.sum() - 1.0).abs() < 1e-6);
}

#[test]
fn test_softmax_extreme_values() {
    let output = softmax(array![f64::MAX / 2.0, f64::MAX / 4.0, 0.0].view());
    for &p in output.iter() {
        assert!(p.is_finite());
    }
    assert!((output[0] - 1.0).abs() < 1e-12);
}

#[test]
fn test_zero_sized_layers_rejected() {
    assert!(matches!(DenseLayer::new(0, 3), Err(DigitNetError::InvalidParameter { .. })));
    assert!(matches!(DenseLayer::new(3, 0), Err(DigitNetError::InvalidParameter { .. })));
    assert!(matches!(
        ActivationLayer::new(Activation::Relu, 0),
        Err(DigitNetError::InvalidParameter { .. })
    ));
}

#[test]
fn test_activation_layer_rejects_wrong_length() {
    let layer = ActivationLayer::softmax(3).unwrap();
    let result = layer.compute(array![1.0, 2.0].view());
    assert!(matches!(result, Err(DigitNetError::ShapeMismatch { .. })));
}

#[test]
fn test_inconsistent_network_fails_inside_forward() {
    // The mismatch is only reported by the layer that receives the wrong length
    let mut network = Network::new();
    network.add_layer(DenseLayer::new(3, 4).unwrap());
    network.add_layer(ActivationLayer::relu(5).unwrap());

    let result = network.forward(array![1.0, 2.0, 3.0].view());
    assert!(matches!(result, Err(DigitNetError::ShapeMismatch { .. })));
}

#[test]
fn test_error_display() {
    let err = DigitNetError::DimensionMismatch { index: 1, output_size: 128, next_input_size: 64 };
    assert_eq!(
        err.to_string(),
        "Dimension mismatch: layer 1 outputs 128 values but layer 2 expects 64"
    );
    let err = DigitNetError::shape_mismatch("input of length 3", "2");
    assert_eq!(err.to_string(), "Shape mismatch: expected input of length 3, got 2");
}
