use log::{info, warn};
use ndarray::{Array1, Array2};
use std::fs;
use std::path::Path;

use super::preprocess::prepare_input;
use super::labels::load_labels;
use crate::config::InputSpec;
use crate::error::{DigitNetError, Result};

/// One preprocessed image and its expected class
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Array1<f64>,
    pub label: usize,
}

/// Labelled samples loaded from an image directory and a label file
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    samples: Vec<Sample>,
}

impl DataSet {
    pub fn new(samples: Vec<Sample>) -> Self {
        DataSet { samples }
    }

    /// Load `<images_dir>/<index>.png` for every entry of `labels_file`.
    ///
    /// Any image that cannot be read fails the whole load.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        images_dir: P,
        labels_file: Q,
        spec: &InputSpec,
    ) -> Result<Self> {
        let images_dir = images_dir.as_ref();
        let entries = load_labels(labels_file)?;

        let mut samples = Vec::with_capacity(entries.len());
        for entry in entries {
            let path = images_dir.join(format!("{}.png", entry.index));
            let input = prepare_input(&path, spec)?;
            samples.push(Sample { input, label: entry.label });
        }

        info!("loaded {} samples from {}", samples.len(), images_dir.display());
        Ok(DataSet { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Preprocess every regular file in `dir` into one row of a matrix.
///
/// Files are read in path order. Files that fail to decode are logged and
/// skipped; a folder without a single usable image is an error.
pub fn load_folder<P: AsRef<Path>>(dir: P, spec: &InputSpec) -> Result<Array2<f64>> {
    let dir = dir.as_ref();
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            paths.push(entry.path());
        }
    }
    paths.sort();

    let mut rows = Vec::new();
    for path in &paths {
        match prepare_input(path, spec) {
            Ok(input) => rows.push(input),
            Err(err) => warn!("skipping {}: {}", path.display(), err),
        }
    }

    let feature_size = rows
        .first()
        .map(|row| row.len())
        .ok_or_else(|| DigitNetError::EmptyDataset(format!("no valid images found in {}", dir.display())))?;

    if let Some(row) = rows.iter().find(|row| row.len() != feature_size) {
        return Err(DigitNetError::shape_mismatch(
            format!("{} features per image", feature_size),
            row.len().to_string(),
        ));
    }

    let flat: Vec<f64> = rows.iter().flat_map(|row| row.iter().copied()).collect();
    Array2::from_shape_vec((rows.len(), feature_size), flat)
        .map_err(|e| DigitNetError::Internal(e.to_string()))
}
