//! Loaders that feed the inference core: weight matrices, preprocessed
//! images, label files and whole labelled datasets.

pub mod dataset;
pub mod labels;
pub mod preprocess;
pub mod weights;

pub use dataset::{load_folder, DataSet, Sample};
pub use preprocess::{prepare_input, prepare_input_from_memory};
pub use labels::{load_labels, parse_labels, LabelEntry};
pub use weights::{load_bias, load_matrix, load_weights_checked, save_matrix};
