//! Section types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::LineToken;

/// Label of a recognized document section.
///
/// The closed set of categories the segmenter can assign. `Header` is the
/// synthetic pseudo-section holding everything before the first recognized
/// heading; `Unknown` holds heading-like lines the vocabulary does not know,
/// carried through for diagnostics but excluded from typed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionLabel {
    /// Pre-first-heading content (name, headline, location)
    Header,
    /// Profile summary / about text
    Summary,
    /// Work experience entries
    Experience,
    /// Education entries
    Education,
    /// Skill entries
    Skills,
    /// Certification entries
    Certifications,
    /// Language entries
    Languages,
    /// Contact details column; recognized so it never pollutes the header,
    /// but not surfaced in typed output
    Contact,
    /// Heading-like line not in the vocabulary
    Unknown,
}

impl SectionLabel {
    /// Whether sections with this label contribute to the typed record.
    pub fn is_typed(self) -> bool {
        !matches!(self, SectionLabel::Contact | SectionLabel::Unknown)
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionLabel::Header => "header",
            SectionLabel::Summary => "summary",
            SectionLabel::Experience => "experience",
            SectionLabel::Education => "education",
            SectionLabel::Skills => "skills",
            SectionLabel::Certifications => "certifications",
            SectionLabel::Languages => "languages",
            SectionLabel::Contact => "contact",
            SectionLabel::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A labeled slice of the normalized line sequence.
///
/// Sections partition the document: every retained line belongs to exactly
/// one section, in document order, with no overlap and no gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section label
    pub label: SectionLabel,

    /// The heading line that opened the section (absent for `Header`)
    pub heading: Option<String>,

    /// Body tokens, gaps included
    pub body: Vec<LineToken>,
}

impl Section {
    /// Create an empty section.
    pub fn new(label: SectionLabel, heading: Option<String>) -> Self {
        Self {
            label,
            heading,
            body: Vec::new(),
        }
    }

    /// Iterate over the retained lines, skipping gap markers.
    pub fn lines(&self) -> impl Iterator<Item = &super::NormalizedLine> {
        self.body.iter().filter_map(LineToken::as_line)
    }

    /// Whether the section has no retained lines.
    pub fn is_empty(&self) -> bool {
        self.lines().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NormalizedLine;

    #[test]
    fn test_label_typed() {
        assert!(SectionLabel::Experience.is_typed());
        assert!(SectionLabel::Header.is_typed());
        assert!(!SectionLabel::Unknown.is_typed());
        assert!(!SectionLabel::Contact.is_typed());
    }

    #[test]
    fn test_section_lines_skip_gaps() {
        let mut section = Section::new(SectionLabel::Skills, Some("Skills".to_string()));
        section.body.push(LineToken::Line(NormalizedLine::new("Rust", 0)));
        section.body.push(LineToken::BlankGap);
        section.body.push(LineToken::Line(NormalizedLine::new("Go", 0)));

        let texts: Vec<_> = section.lines().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Rust", "Go"]);
        assert!(!section.is_empty());
    }
}
