//! Table of contents types

use serde::{Deserialize, Serialize};

/// A single entry in the synthesized table of contents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TocEntry {
    /// Display label
    pub label: String,

    /// Absolute index of the page this entry jumps to
    pub target: usize,
}

impl TocEntry {
    /// Create a new TOC entry
    pub fn new(label: impl Into<String>, target: usize) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }
}
