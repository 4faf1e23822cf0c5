//! Input fragment types.
//!
//! These mirror the extraction collaborator's contract: an ordered sequence
//! of pages, each holding text fragments with approximate position and style
//! hints. The core treats them as read-only and assumes nothing about
//! fragment order beyond per-page top-to-bottom being likely; ties on equal
//! vertical position are broken by horizontal position during normalization.

use serde::{Deserialize, Serialize};

/// A unit of extracted text with position and style hints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextFragment {
    /// The text content
    pub text: String,

    /// Zero-based page index
    pub page_index: u32,

    /// X position (left edge)
    pub x: f32,

    /// Y position, increasing top to bottom
    pub y: f32,

    /// Width of the rendered text
    #[serde(default)]
    pub width: f32,

    /// Height of the rendered text
    #[serde(default)]
    pub height: f32,

    /// Whether the fragment is rendered bold
    #[serde(default)]
    pub is_bold: bool,

    /// Bucketed font size hint
    #[serde(default)]
    pub font_size_bucket: FontSizeBucket,
}

impl TextFragment {
    /// Create a fragment with default geometry and style.
    pub fn new(text: impl Into<String>, page_index: u32, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            page_index,
            x,
            y,
            width: 0.0,
            height: 0.0,
            is_bold: false,
            font_size_bucket: FontSizeBucket::Body,
        }
    }

    /// Set the style hints.
    pub fn with_style(mut self, is_bold: bool, bucket: FontSizeBucket) -> Self {
        self.is_bold = is_bold;
        self.font_size_bucket = bucket;
        self
    }

    /// Set the fragment geometry.
    pub fn with_geometry(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// One input page: an ordered sequence of fragments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageFragments {
    /// Zero-based page index
    pub index: u32,

    /// Fragments on this page
    pub fragments: Vec<TextFragment>,
}

impl PageFragments {
    /// Create an empty page.
    pub fn new(index: u32) -> Self {
        Self {
            index,
            fragments: Vec::new(),
        }
    }

    /// Add a fragment to the page.
    pub fn add(&mut self, fragment: TextFragment) {
        self.fragments.push(fragment);
    }
}

/// Bucketed font size, ordered smallest to largest.
///
/// The extraction collaborator does not report exact point sizes, only a
/// coarse bucket relative to the document's body text.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FontSizeBucket {
    /// Smaller than body text (footnotes, footer text)
    Small,
    /// Regular body text
    #[default]
    Body,
    /// Larger than body text (section headings)
    Large,
    /// Much larger than body text (the profile name)
    Huge,
}

impl FontSizeBucket {
    /// Whether this bucket is larger than body text.
    pub fn is_above_body(self) -> bool {
        self > FontSizeBucket::Body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_ordering() {
        assert!(FontSizeBucket::Huge > FontSizeBucket::Large);
        assert!(FontSizeBucket::Large > FontSizeBucket::Body);
        assert!(FontSizeBucket::Body > FontSizeBucket::Small);
        assert!(FontSizeBucket::Large.is_above_body());
        assert!(!FontSizeBucket::Body.is_above_body());
    }

    #[test]
    fn test_fragment_builder() {
        let frag = TextFragment::new("Jane Doe", 0, 48.0, 40.0)
            .with_style(true, FontSizeBucket::Huge)
            .with_geometry(120.0, 24.0);

        assert_eq!(frag.text, "Jane Doe");
        assert!(frag.is_bold);
        assert_eq!(frag.font_size_bucket, FontSizeBucket::Huge);
        assert_eq!(frag.width, 120.0);
    }

    #[test]
    fn test_fragment_deserialize_defaults() {
        // The collaborator may omit style fields; they default to plain body.
        let json = r#"{"text": "hello", "page_index": 0, "x": 10.0, "y": 20.0}"#;
        let frag: TextFragment = serde_json::from_str(json).unwrap();
        assert!(!frag.is_bold);
        assert_eq!(frag.font_size_bucket, FontSizeBucket::Body);
    }
}
