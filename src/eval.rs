//! Accuracy evaluation over labelled samples.

use log::info;
use ndarray::ArrayView1;

use crate::data::Sample;
use crate::error::Result;
use crate::network::Network;

/// Index of the largest value. Ties resolve to the first occurrence. NaN
/// entries are skipped, so an empty or all-NaN input has no maximum.
pub fn argmax(values: ArrayView1<f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, max)) if v <= max => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Prediction counts from one evaluation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalReport {
    pub correct: usize,
    pub incorrect: usize,
}

impl EvalReport {
    pub fn total(&self) -> usize {
        self.correct + self.incorrect
    }

    /// Fraction of correct predictions, `0.0` when nothing was evaluated.
    pub fn accuracy(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total() as f64
    }
}

/// Classify every sample and compare against its label.
///
/// Stops at the first inference error.
pub fn evaluate(network: &Network, samples: &[Sample]) -> Result<EvalReport> {
    let mut report = EvalReport::default();
    for sample in samples {
        let predicted = network.classify(sample.input.view())?;
        if predicted == sample.label {
            report.correct += 1;
        } else {
            report.incorrect += 1;
        }
    }
    info!(
        "evaluated {} samples: {} correct, {} incorrect, accuracy {:.4}",
        report.total(),
        report.correct,
        report.incorrect,
        report.accuracy()
    );
    Ok(report)
}
