//! Runtime configuration for the evaluation driver.
//!
//! Configuration is a JSON document:
//!
//! ```json
//! {
//!     "weights_dir": "weights",
//!     "images_dir": "mnist/test",
//!     "labels_file": "mnist/test_labs.txt",
//!     "input": { "width": 28, "height": 28, "mean": 0.1307, "std": 0.3081 }
//! }
//! ```
//!
//! The `input` section is optional and defaults to the MNIST values.

use serde::{Serialize, Deserialize};
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{DigitNetError, Result};

/// How raw images are turned into network input vectors.
///
/// Must match the preprocessing used when the weights were trained, otherwise
/// predictions are silently wrong even though every shape check passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSpec {
    pub width: u32,
    pub height: u32,
    /// Mean subtracted after scaling pixels to [0, 1]
    pub mean: f64,
    /// Standard deviation divided out after the mean is subtracted
    pub std: f64,
}

impl InputSpec {
    /// Length of the flattened input vector
    pub fn input_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DigitNetError::InvalidConfig(format!(
                "image size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.std.is_finite() && self.std > 0.0) {
            return Err(DigitNetError::InvalidConfig(format!(
                "normalization std must be finite and > 0, got {}",
                self.std
            )));
        }
        if !self.mean.is_finite() {
            return Err(DigitNetError::InvalidConfig(format!(
                "normalization mean must be finite, got {}",
                self.mean
            )));
        }
        Ok(())
    }
}

impl Default for InputSpec {
    fn default() -> Self {
        InputSpec {
            width: 28,
            height: 28,
            mean: 0.1307,
            std: 0.3081,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Directory holding `fc{1,2,3}_weight.json` and `fc{1,2,3}_bias.json`
    pub weights_dir: PathBuf,
    /// Directory holding `<index>.png` images
    pub images_dir: PathBuf,
    /// Text file of `<index> <label>` lines
    pub labels_file: PathBuf,
    #[serde(default)]
    pub input: InputSpec,
}

impl InferenceConfig {
    pub fn new<P: Into<PathBuf>>(weights_dir: P, images_dir: P, labels_file: P) -> Self {
        InferenceConfig {
            weights_dir: weights_dir.into(),
            images_dir: images_dir.into(),
            labels_file: labels_file.into(),
            input: InputSpec::default(),
        }
    }

    /// Read a JSON configuration file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = fs::File::open(path.as_ref())?;
        let config: InferenceConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.input.validate()
    }
}
