//! Label files: one `<image index> <class label>` pair per line.

use log::warn;
use std::fs;
use std::path::Path;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelEntry {
    /// Image file stem, `<index>.png`
    pub index: usize,
    pub label: usize,
}

/// Parse label text. Blank lines are skipped; malformed lines are logged and
/// skipped. Anything after the first two fields is ignored.
pub fn parse_labels(text: &str) -> Vec<LabelEntry> {
    let mut entries = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let parsed = match (fields.next(), fields.next()) {
            (Some(index), Some(label)) => index.parse().ok().zip(label.parse().ok()),
            _ => None,
        };

        match parsed {
            Some((index, label)) => entries.push(LabelEntry { index, label }),
            None => warn!("failed to parse label line {}: {:?}", number + 1, line),
        }
    }
    entries
}

pub fn load_labels<P: AsRef<Path>>(path: P) -> Result<Vec<LabelEntry>> {
    let text = fs::read_to_string(path.as_ref())?;
    Ok(parse_labels(&text))
}
