//! Section segmentation.
//!
//! Partitions the normalized line sequence into labeled sections. A line
//! becomes a heading when its text matches the heading vocabulary and it
//! carries at least one structural signal: a bold or larger-than-body style
//! hint, or standing alone immediately after a BlankGap. Everything before
//! the first recognized heading is the `Header` pseudo-section.

use crate::model::{LineToken, NormalizedLine, Section, SectionLabel, Warning};

use super::{dates, vocab};

/// Partition the token sequence into sections.
///
/// Sections partition the lines with no overlap and no gaps; unrecognized
/// but heading-like lines open `Unknown` sections that are carried for
/// diagnostics and recorded as warnings.
pub(crate) fn segment(tokens: &[LineToken], warnings: &mut Vec<Warning>) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section::new(SectionLabel::Header, None);
    let mut prev_gap = false;
    let mut seen_heading = false;

    for token in tokens {
        let line = match token {
            LineToken::BlankGap => {
                current.body.push(LineToken::BlankGap);
                prev_gap = true;
                continue;
            }
            LineToken::Line(line) => line,
        };

        if let Some(label) = recognized_heading(line, prev_gap) {
            log::debug!("section heading {:?} -> {}", line.text, label);
            sections.push(current);
            current = Section::new(label, Some(line.text.clone()));
            seen_heading = true;
            prev_gap = false;
            continue;
        }

        // A styled, heading-shaped line the vocabulary does not know opens
        // an Unknown section. This only applies after the first recognized
        // heading: the header region legitimately holds large styled lines
        // (the profile name).
        if seen_heading && unknown_heading(line) {
            warnings.push(Warning::new(
                "section",
                format!("unrecognized heading \"{}\"", line.text),
            ));
            sections.push(current);
            current = Section::new(SectionLabel::Unknown, Some(line.text.clone()));
            prev_gap = false;
            continue;
        }

        current.body.push(LineToken::Line(line.clone()));
        prev_gap = false;
    }
    sections.push(current);

    sections
}

/// Vocabulary heading with a structural signal.
fn recognized_heading(line: &NormalizedLine, prev_gap: bool) -> Option<SectionLabel> {
    let label = vocab::section_for_heading(&line.text)?;
    (line.has_style_signal() || prev_gap).then_some(label)
}

/// Heading-shaped but not in the vocabulary: larger than body text, short,
/// and free of sentence punctuation or date content.
fn unknown_heading(line: &NormalizedLine) -> bool {
    line.size.is_above_body()
        && line.text.split_whitespace().count() <= 4
        && !line.text.ends_with(['.', '!', '?', ',', ';'])
        && !vocab::is_bullet_line(&line.text)
        && !dates::is_date_range_line(&line.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FontSizeBucket;

    fn line(text: &str) -> LineToken {
        LineToken::Line(NormalizedLine::new(text, 0))
    }

    fn styled(text: &str, bold: bool, size: FontSizeBucket) -> LineToken {
        LineToken::Line(NormalizedLine::new(text, 0).with_style(bold, size))
    }

    #[test]
    fn test_header_then_sections() {
        let tokens = vec![
            styled("Jane Doe", true, FontSizeBucket::Huge),
            line("Software Engineer at Acme"),
            LineToken::BlankGap,
            styled("Experience", true, FontSizeBucket::Large),
            line("Software Engineer"),
            line("Acme"),
            LineToken::BlankGap,
            styled("Education", true, FontSizeBucket::Large),
            line("Stanford University"),
        ];

        let mut warnings = Vec::new();
        let sections = segment(&tokens, &mut warnings);

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].label, SectionLabel::Header);
        assert_eq!(sections[1].label, SectionLabel::Experience);
        assert_eq!(sections[2].label, SectionLabel::Education);
        assert!(warnings.is_empty());

        let header_texts: Vec<_> = sections[0].lines().map(|l| l.text.as_str()).collect();
        assert_eq!(header_texts, vec!["Jane Doe", "Software Engineer at Acme"]);
    }

    #[test]
    fn test_plain_vocabulary_text_is_not_heading() {
        // "Experience" styled as body text with no gap before it stays body
        // content of the current section.
        let tokens = vec![
            styled("Summary", true, FontSizeBucket::Large),
            line("I enjoy parsing."),
            line("Experience"),
            line("taught me patience."),
        ];

        let mut warnings = Vec::new();
        let sections = segment(&tokens, &mut warnings);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].label, SectionLabel::Summary);
        assert_eq!(sections[1].lines().count(), 3);
    }

    #[test]
    fn test_gap_alone_qualifies_heading() {
        let tokens = vec![
            line("Jane Doe"),
            LineToken::BlankGap,
            line("Skills"),
            line("Rust"),
        ];

        let mut warnings = Vec::new();
        let sections = segment(&tokens, &mut warnings);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].label, SectionLabel::Skills);
    }

    #[test]
    fn test_unknown_heading_opens_unknown_section() {
        let tokens = vec![
            styled("Jane Doe", true, FontSizeBucket::Huge),
            LineToken::BlankGap,
            styled("Experience", true, FontSizeBucket::Large),
            line("Engineer"),
            LineToken::BlankGap,
            styled("Volunteering", false, FontSizeBucket::Large),
            line("Animal shelter"),
        ];

        let mut warnings = Vec::new();
        let sections = segment(&tokens, &mut warnings);

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[2].label, SectionLabel::Unknown);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("Volunteering"));
    }

    #[test]
    fn test_name_is_not_unknown_heading() {
        // The large styled name sits before any recognized heading and must
        // stay in the Header pseudo-section.
        let tokens = vec![
            styled("Jane Doe", true, FontSizeBucket::Huge),
            line("Software Engineer at Acme"),
        ];

        let mut warnings = Vec::new();
        let sections = segment(&tokens, &mut warnings);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].label, SectionLabel::Header);
        assert!(warnings.is_empty());
    }
}
