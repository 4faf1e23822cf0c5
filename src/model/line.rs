//! Normalized line types.

use serde::{Deserialize, Serialize};

use super::FontSizeBucket;

/// A cleaned logical line of text with its style hints.
///
/// Produced by the fragment normalizer; sequence order is significant and
/// preserved from the source document's reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedLine {
    /// The line text, whitespace-collapsed and NFC-normalized
    pub text: String,

    /// Zero-based page index the line came from
    pub page_index: u32,

    /// Whether the line is predominantly bold
    pub is_bold: bool,

    /// Dominant font size bucket of the line
    pub size: FontSizeBucket,
}

impl NormalizedLine {
    /// Create a plain body-text line.
    pub fn new(text: impl Into<String>, page_index: u32) -> Self {
        Self {
            text: text.into(),
            page_index,
            is_bold: false,
            size: FontSizeBucket::Body,
        }
    }

    /// Set the style hints.
    pub fn with_style(mut self, is_bold: bool, size: FontSizeBucket) -> Self {
        self.is_bold = is_bold;
        self.size = size;
        self
    }

    /// Whether the line carries a heading-grade style signal.
    pub fn has_style_signal(&self) -> bool {
        self.is_bold || self.size.is_above_body()
    }
}

/// One token in the normalized line sequence.
///
/// A visual blank-line separation between two retained lines is represented
/// as an explicit `BlankGap` marker rather than an empty line, so that the
/// segmenter and the entry parsers agree on what constitutes a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineToken {
    /// A retained text line
    Line(NormalizedLine),

    /// A structural gap between two retained lines
    BlankGap,
}

impl LineToken {
    /// The contained line, if this token is one.
    pub fn as_line(&self) -> Option<&NormalizedLine> {
        match self {
            LineToken::Line(line) => Some(line),
            LineToken::BlankGap => None,
        }
    }

    /// Whether this token is a gap marker.
    pub fn is_gap(&self) -> bool {
        matches!(self, LineToken::BlankGap)
    }
}
