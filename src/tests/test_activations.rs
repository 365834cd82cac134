use ndarray::{array, Array1};
use crate::activations::{relu, softmax, Activation};

fn assert_close(actual: &Array1<f64>, expected: &Array1<f64>, tolerance: f64) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!((a - e).abs() <= tolerance, "{} != {} (tolerance {})", a, e, tolerance);
    }
}

#[test]
fn test_relu_activation() {
    let output = relu(array![-2.0, -1.0, 0.0, 3.0].view());
    assert_eq!(output, array![0.0, 0.0, 0.0, 3.0]);
}

#[test]
fn test_relu_identity_on_positive() {
    let input = array![1.0, 2.0, 3.0];
    assert_eq!(relu(input.view()), input);
}

#[test]
fn test_relu_all_negative() {
    assert_eq!(relu(array![-1.0, -2.0, -3.0].view()), Array1::<f64>::zeros(3));
}

#[test]
fn test_softmax_positive_numbers() {
    let output = softmax(array![1.0, 2.0, 3.0].view());
    let sum_exp = 1.0f64.exp() + 2.0f64.exp() + 3.0f64.exp();
    let expected = array![1.0f64.exp() / sum_exp, 2.0f64.exp() / sum_exp, 3.0f64.exp() / sum_exp];
    assert_close(&output, &expected, 1e-6);
    assert!((output.sum() - 1.0).abs() < 1e-6);
}

#[test]
fn test_softmax_mixed_signs() {
    let output = softmax(array![-1.0, 1.0].view());
    let sum_exp = (-1.0f64).exp() + 1.0f64.exp();
    let expected = array![(-1.0f64).exp() / sum_exp, 1.0f64.exp() / sum_exp];
    assert_close(&output, &expected, 1e-6);
}

#[test]
fn test_softmax_all_negative_sums_to_one() {
    let output = softmax(array![-5.0, -3.0, -1.0].view());
    assert!((output.sum() - 1.0).abs() < 1e-6);
}

#[test]
fn test_softmax_large_values_stay_finite() {
    let output = softmax(array![1000.0, 1001.0, 1002.0].view());
    for &p in output.iter() {
        assert!(p.is_finite());
        assert!(p > 0.0);
    }
    assert!((output.sum() - 1.0).abs() < 1e-6);

    // Same distribution as the unshifted input
    assert_close(&output, &softmax(array![0.0, 1.0, 2.0].view()), 1e-6);
}

#[test]
fn test_activation_dispatch() {
    let input = array![-1.0, 0.5, 2.0];
    assert_eq!(Activation::Relu.apply(input.view()), relu(input.view()));
    assert_eq!(Activation::Softmax.apply(input.view()), softmax(input.view()));
}

#[test]
fn test_activation_display() {
    assert_eq!(Activation::Relu.to_string(), "ReLU");
    assert_eq!(Activation::Softmax.to_string(), "Softmax");
}
