//! Turns digit images into normalized, row-major input vectors.

use image::imageops::FilterType;
use image::DynamicImage;
use log::warn;
use ndarray::Array1;
use std::path::Path;

use crate::config::InputSpec;
use crate::error::Result;

/// Decode an image file and preprocess it per `spec`.
///
/// The image is converted to grayscale, resized if it is not
/// `spec.width × spec.height`, scaled to [0, 1], normalized with
/// `(v - mean) / std`, and flattened row by row.
pub fn prepare_input<P: AsRef<Path>>(path: P, spec: &InputSpec) -> Result<Array1<f64>> {
    let path = path.as_ref();
    let img = image::open(path)?;
    Ok(to_input(img, spec, &path.display().to_string()))
}

/// Same as [`prepare_input`] for an encoded image already in memory.
pub fn prepare_input_from_memory(bytes: &[u8], spec: &InputSpec) -> Result<Array1<f64>> {
    let img = image::load_from_memory(bytes)?;
    Ok(to_input(img, spec, "in-memory image"))
}

fn to_input(img: DynamicImage, spec: &InputSpec, source: &str) -> Array1<f64> {
    let mut gray = img.to_luma8();
    if gray.dimensions() != (spec.width, spec.height) {
        warn!(
            "{} is {}x{} (expected {}x{}), resizing",
            source,
            gray.width(),
            gray.height(),
            spec.width,
            spec.height
        );
        gray = image::imageops::resize(&gray, spec.width, spec.height, FilterType::Triangle);
    }

    gray.pixels()
        .map(|p| (p.0[0] as f64 / 255.0 - spec.mean) / spec.std)
        .collect()
}
