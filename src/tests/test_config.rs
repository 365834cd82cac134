use std::path::PathBuf;
use crate::config::{InferenceConfig, InputSpec};
use crate::error::DigitNetError;

#[test]
fn test_default_input_spec() {
    let spec = InputSpec::default();
    assert_eq!((spec.width, spec.height), (28, 28));
    assert_eq!(spec.input_len(), 784);
    assert!((spec.mean - 0.1307).abs() < 1e-12);
    assert!((spec.std - 0.3081).abs() < 1e-12);
    assert!(spec.validate().is_ok());
}

#[test]
fn test_input_spec_validation() {
    let zero = InputSpec { width: 0, ..InputSpec::default() };
    assert!(matches!(zero.validate(), Err(DigitNetError::InvalidConfig(_))));

    let bad_std = InputSpec { std: 0.0, ..InputSpec::default() };
    assert!(matches!(bad_std.validate(), Err(DigitNetError::InvalidConfig(_))));

    let bad_mean = InputSpec { mean: f64::NAN, ..InputSpec::default() };
    assert!(bad_mean.validate().is_err());
}

#[test]
fn test_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "weights_dir": "weights",
            "images_dir": "mnist/test",
            "labels_file": "mnist/test_labs.txt",
            "input": { "width": 14, "height": 14 }
        }"#,
    )
    .unwrap();

    let config = InferenceConfig::from_file(&path).unwrap();
    assert_eq!(config.weights_dir, PathBuf::from("weights"));
    assert_eq!(config.labels_file, PathBuf::from("mnist/test_labs.txt"));
    assert_eq!(config.input.input_len(), 196);
    // Missing fields fall back to the defaults
    assert!((config.input.std - 0.3081).abs() < 1e-12);
}

#[test]
fn test_config_defaults_input_section() {
    let config: InferenceConfig = serde_json::from_str(
        r#"{ "weights_dir": "w", "images_dir": "i", "labels_file": "l" }"#,
    )
    .unwrap();
    assert_eq!(config.input, InputSpec::default());
    assert_eq!(config, InferenceConfig::new("w", "i", "l"));
}

#[test]
fn test_config_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "weights_dir": "w", "images_dir": "i", "labels_file": "l", "input": { "std": -1.0 } }"#,
    )
    .unwrap();
    assert!(matches!(InferenceConfig::from_file(&path), Err(DigitNetError::InvalidConfig(_))));

    std::fs::write(&path, "not json").unwrap();
    assert!(matches!(InferenceConfig::from_file(&path), Err(DigitNetError::SerializationError(_))));
}
