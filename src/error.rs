use std::fmt;

/// Result type for digitnet operations
pub type Result<T> = std::result::Result<T, DigitNetError>;

/// Main error type for the digitnet library
#[derive(Debug, Clone, PartialEq)]
pub enum DigitNetError {
    /// Invalid parameter value at construction time
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// A vector or matrix of the wrong size was handed to a layer
    ShapeMismatch {
        expected: String,
        actual: String,
    },

    /// Two adjacent layers in a network disagree on their shared dimension
    DimensionMismatch {
        index: usize,
        output_size: usize,
        next_input_size: usize,
    },

    /// Structural query on a network without layers
    EmptyNetwork(String),

    /// A dataset source yielded no usable samples
    EmptyDataset(String),

    /// Broken internal invariant; indicates a construction bug
    Internal(String),

    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),

    /// Image decoding errors
    ImageError(String),

    /// Invalid configuration value
    InvalidConfig(String),
}

impl fmt::Display for DigitNetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitNetError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            DigitNetError::ShapeMismatch { expected, actual } => {
                write!(f, "Shape mismatch: expected {}, got {}", expected, actual)
            }
            DigitNetError::DimensionMismatch { index, output_size, next_input_size } => {
                write!(
                    f,
                    "Dimension mismatch: layer {} outputs {} values but layer {} expects {}",
                    index,
                    output_size,
                    index + 1,
                    next_input_size
                )
            }
            DigitNetError::EmptyNetwork(op) => write!(f, "Empty network: cannot {}", op),
            DigitNetError::EmptyDataset(msg) => write!(f, "Empty dataset: {}", msg),
            DigitNetError::Internal(msg) => write!(f, "Internal error: {}", msg),
            DigitNetError::IoError(msg) => write!(f, "IO error: {}", msg),
            DigitNetError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            DigitNetError::ImageError(msg) => write!(f, "Image error: {}", msg),
            DigitNetError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for DigitNetError {}

// Conversion from std::io::Error
impl From<std::io::Error> for DigitNetError {
    fn from(err: std::io::Error) -> Self {
        DigitNetError::IoError(err.to_string())
    }
}

// Conversion from bincode::Error
impl From<bincode::Error> for DigitNetError {
    fn from(err: bincode::Error) -> Self {
        DigitNetError::SerializationError(err.to_string())
    }
}

impl From<serde_json::Error> for DigitNetError {
    fn from(err: serde_json::Error) -> Self {
        DigitNetError::SerializationError(err.to_string())
    }
}

impl From<image::ImageError> for DigitNetError {
    fn from(err: image::ImageError) -> Self {
        DigitNetError::ImageError(err.to_string())
    }
}

// Helper functions for common error patterns
impl DigitNetError {
    pub fn shape_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        DigitNetError::ShapeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        DigitNetError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
