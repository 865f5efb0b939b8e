#![forbid(unsafe_code)]

use crate::OutputFormat;
use serde::{Deserialize, Serialize};

pub const TOP_RANGE: std::ops::RangeInclusive<usize> = 1..=10;
pub const BAR_WIDTH_RANGE: std::ops::RangeInclusive<usize> = 10..=120;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Display {
    /// Number of highlighted entries (clamped to 1..=10).
    pub top: usize,
    /// Character width of the longest possible bar (clamped to 10..=120).
    pub bar_width: usize,
    pub format: OutputFormat,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            top: 3,
            bar_width: 40,
            format: OutputFormat::Text,
        }
    }
}

impl Display {
    pub fn clamp(self) -> Self {
        Self {
            top: self.top.clamp(*TOP_RANGE.start(), *TOP_RANGE.end()),
            bar_width: self
                .bar_width
                .clamp(*BAR_WIDTH_RANGE.start(), *BAR_WIDTH_RANGE.end()),
            format: self.format,
        }
    }
}
