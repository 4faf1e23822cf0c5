//! Fragment normalization.
//!
//! Turns the extraction collaborator's raw, per-page fragments into the
//! clean logical line sequence the rest of the pipeline consumes: fragments
//! are coalesced into lines, recurring per-page boilerplate and page-number
//! lines are dropped, soft line-wraps are merged, and visual blank-line
//! separations become explicit [`LineToken::BlankGap`] markers.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};
use crate::model::{FontSizeBucket, LineToken, NormalizedLine, PageFragments, TextFragment};

use super::options::ParseOptions;
use super::vocab;

/// Fraction of a page's vertical span treated as the header/footer edge band.
const EDGE_BAND: f32 = 0.12;

/// A vertical advance larger than this multiple of the page's median line
/// advance becomes a BlankGap.
const GAP_FACTOR: f32 = 1.8;

/// Horizontal gap (in multiples of fragment height) beyond which two
/// same-baseline fragments belong to different columns, not one line.
const COLUMN_GAP_FACTOR: f32 = 4.0;

/// A coalesced line with its page geometry, before boilerplate filtering.
#[derive(Debug, Clone)]
struct RawLine {
    text: String,
    page_index: u32,
    y: f32,
    is_bold: bool,
    size: FontSizeBucket,
}

impl RawLine {
    fn to_normalized(&self) -> NormalizedLine {
        NormalizedLine {
            text: self.text.clone(),
            page_index: self.page_index,
            is_bold: self.is_bold,
            size: self.size,
        }
    }
}

/// Normalize raw fragment pages into a line-token sequence.
pub(crate) fn normalize(pages: &[PageFragments], options: &ParseOptions) -> Result<Vec<LineToken>> {
    let mut page_lines: Vec<Vec<RawLine>> = pages.iter().map(coalesce_page).collect();

    drop_boilerplate(&mut page_lines);

    let mut tokens = Vec::new();
    for lines in &page_lines {
        append_page_tokens(lines, &mut tokens);
    }

    merge_soft_wraps(&mut tokens);

    let line_count = tokens.iter().filter(|t| !t.is_gap()).count();
    if line_count < options.min_content_lines {
        log::debug!(
            "only {} non-boilerplate lines remain (minimum {})",
            line_count,
            options.min_content_lines
        );
        return Err(Error::EmptyDocument);
    }

    Ok(tokens)
}

/// Coalesce one page's fragments into reading-order lines.
fn coalesce_page(page: &PageFragments) -> Vec<RawLine> {
    let mut frags: Vec<&TextFragment> = page
        .fragments
        .iter()
        .filter(|f| !f.text.trim().is_empty())
        .collect();

    // Reading order: top to bottom, ties broken left to right. The input
    // contract only promises this ordering is "likely", so re-sort.
    frags.sort_by(|a, b| {
        a.y.partial_cmp(&b.y)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
    });

    let mut lines: Vec<RawLine> = Vec::new();
    let mut current: Vec<&TextFragment> = Vec::new();

    for frag in frags {
        let same_line = current.last().is_some_and(|prev| {
            let tolerance = effective_height(prev) * 0.6;
            let vertical = (frag.y - prev.y).abs() <= tolerance;
            let horizontal =
                frag.x - (prev.x + prev.width) <= effective_height(prev) * COLUMN_GAP_FACTOR;
            vertical && horizontal
        });

        if !same_line && !current.is_empty() {
            lines.push(build_line(&current, page.index));
            current.clear();
        }
        current.push(frag);
    }
    if !current.is_empty() {
        lines.push(build_line(&current, page.index));
    }

    lines.retain(|l| !l.text.is_empty());
    lines
}

fn effective_height(frag: &TextFragment) -> f32 {
    if frag.height > 0.0 {
        frag.height
    } else {
        12.0
    }
}

/// Join a run of same-line fragments into one cleaned line.
fn build_line(frags: &[&TextFragment], page_index: u32) -> RawLine {
    let mut text = String::new();
    for frag in frags {
        if !text.is_empty() && !text.ends_with(' ') {
            text.push(' ');
        }
        text.push_str(frag.text.trim());
    }

    let text: String = text.nfc().collect();
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    // Dominant style, weighted by character count.
    let total: usize = frags.iter().map(|f| f.text.chars().count()).sum();
    let bold_chars: usize = frags
        .iter()
        .filter(|f| f.is_bold)
        .map(|f| f.text.chars().count())
        .sum();
    let size = frags
        .iter()
        .max_by_key(|f| f.text.chars().count())
        .map(|f| f.font_size_bucket)
        .unwrap_or_default();

    RawLine {
        text,
        page_index,
        y: frags[0].y,
        is_bold: total > 0 && bold_chars * 2 > total,
        size,
    }
}

/// Drop recurring per-page boilerplate and pure page-number lines.
///
/// A line is boilerplate when its text recurs (case-folded) on a majority of
/// pages within the same relative vertical band, or when it matches the
/// page-number pattern inside a page's edge band.
fn drop_boilerplate(page_lines: &mut [Vec<RawLine>]) {
    let page_count = page_lines.len();

    let spans: Vec<(f32, f32)> = page_lines.iter().map(|lines| page_span(lines)).collect();

    // Collect recurrence: text key -> (pages seen on, min/max relative position).
    let mut seen: HashMap<String, (Vec<u32>, f32, f32)> = HashMap::new();
    if page_count > 1 {
        for (lines, span) in page_lines.iter().zip(&spans) {
            for line in lines {
                let key = line.text.to_lowercase();
                let pos = relative_position(line.y, *span);
                let entry = seen.entry(key).or_insert((Vec::new(), pos, pos));
                if !entry.0.contains(&line.page_index) {
                    entry.0.push(line.page_index);
                }
                entry.1 = entry.1.min(pos);
                entry.2 = entry.2.max(pos);
            }
        }
    }

    for (lines, span) in page_lines.iter_mut().zip(&spans) {
        lines.retain(|line| {
            let pos = relative_position(line.y, *span);
            let at_edge = pos <= EDGE_BAND || pos >= 1.0 - EDGE_BAND;

            if at_edge && vocab::page_number_re().is_match(&line.text) {
                log::debug!("dropping page-number line {:?}", line.text);
                return false;
            }

            if page_count > 1 {
                if let Some((pages, min_pos, max_pos)) = seen.get(&line.text.to_lowercase()) {
                    let majority = pages.len() * 2 > page_count && pages.len() >= 2;
                    if majority && max_pos - min_pos < 0.08 {
                        log::debug!("dropping recurring boilerplate {:?}", line.text);
                        return false;
                    }
                }
            }

            true
        });
    }
}

fn page_span(lines: &[RawLine]) -> (f32, f32) {
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for line in lines {
        min = min.min(line.y);
        max = max.max(line.y);
    }
    if lines.is_empty() {
        (0.0, 0.0)
    } else {
        (min, max)
    }
}

fn relative_position(y: f32, (min, max): (f32, f32)) -> f32 {
    let span = max - min;
    if span <= f32::EPSILON {
        // A page with a single line: treat it as sitting at an edge.
        return 0.0;
    }
    (y - min) / span
}

/// Emit one page's lines as tokens, inserting BlankGap markers where the
/// vertical advance between neighbours is well above the page's median.
fn append_page_tokens(lines: &[RawLine], tokens: &mut Vec<LineToken>) {
    if lines.is_empty() {
        return;
    }

    let mut advances: Vec<f32> = lines
        .windows(2)
        .map(|w| (w[1].y - w[0].y).abs())
        .filter(|a| *a > 0.1)
        .collect();
    advances.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median = if advances.is_empty() {
        0.0
    } else {
        advances[advances.len() / 2]
    };

    for (i, line) in lines.iter().enumerate() {
        if i > 0 && median > 0.0 {
            let advance = (line.y - lines[i - 1].y).abs();
            if advance > median * GAP_FACTOR {
                tokens.push(LineToken::BlankGap);
            }
        }
        tokens.push(LineToken::Line(line.to_normalized()));
    }
}

/// Merge soft line-wraps: a line without terminal punctuation whose
/// successor starts lower-case continues the same sentence, unless the
/// successor is a known heading or a bullet item.
fn merge_soft_wraps(tokens: &mut Vec<LineToken>) {
    let mut i = 0;
    while i + 1 < tokens.len() {
        let merge = match (&tokens[i], &tokens[i + 1]) {
            (LineToken::Line(prev), LineToken::Line(next)) => should_merge(prev, next),
            _ => false,
        };

        if merge {
            let LineToken::Line(next) = tokens.remove(i + 1) else {
                unreachable!()
            };
            let LineToken::Line(prev) = &mut tokens[i] else {
                unreachable!()
            };
            prev.text.push(' ');
            prev.text.push_str(&next.text);
        } else {
            i += 1;
        }
    }
}

fn should_merge(prev: &NormalizedLine, next: &NormalizedLine) -> bool {
    if prev.text.ends_with(['.', '!', '?', ':', ';', '…']) {
        return false;
    }
    if vocab::is_bullet_line(&next.text) || vocab::section_for_heading(&next.text).is_some() {
        return false;
    }
    next.text
        .chars()
        .find(|c| c.is_alphabetic())
        .is_some_and(|c| c.is_lowercase())
        && next
            .text
            .chars()
            .next()
            .is_some_and(|c| c.is_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextFragment;

    fn page_of(lines: &[(&str, f32)], index: u32) -> PageFragments {
        let mut page = PageFragments::new(index);
        for (text, y) in lines {
            page.add(
                TextFragment::new(*text, index, 48.0, *y)
                    .with_geometry(text.len() as f32 * 6.0, 12.0),
            );
        }
        page
    }

    #[test]
    fn test_coalesce_same_baseline() {
        let mut page = PageFragments::new(0);
        page.add(TextFragment::new("Jane", 0, 48.0, 40.0).with_geometry(30.0, 12.0));
        page.add(TextFragment::new("Doe", 0, 82.0, 40.0).with_geometry(25.0, 12.0));

        let lines = coalesce_page(&page);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "Jane Doe");
    }

    #[test]
    fn test_column_split_on_wide_gap() {
        let mut page = PageFragments::new(0);
        page.add(TextFragment::new("Contact", 0, 20.0, 40.0).with_geometry(40.0, 12.0));
        page.add(TextFragment::new("Jane Doe", 0, 300.0, 40.0).with_geometry(60.0, 12.0));

        let lines = coalesce_page(&page);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "Contact");
        assert_eq!(lines[1].text, "Jane Doe");
    }

    #[test]
    fn test_gap_emission() {
        let page = page_of(
            &[("one", 40.0), ("two", 60.0), ("three", 80.0), ("four", 160.0)],
            0,
        );
        let tokens = normalize(&[page], &ParseOptions::default()).unwrap();

        let shapes: Vec<bool> = tokens.iter().map(LineToken::is_gap).collect();
        assert_eq!(shapes, vec![false, false, false, true, false]);
    }

    #[test]
    fn test_page_number_dropped() {
        let page = page_of(&[("Alpha", 40.0), ("Beta", 60.0), ("3", 800.0)], 0);
        let tokens = normalize(&[page], &ParseOptions::default()).unwrap();

        let texts: Vec<_> = tokens
            .iter()
            .filter_map(LineToken::as_line)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(texts, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_recurring_footer_dropped() {
        let pages = vec![
            page_of(&[("Alpha", 40.0), ("Beta", 60.0), ("Jane Doe · Profile", 800.0)], 0),
            page_of(&[("Gamma", 40.0), ("Delta", 60.0), ("Jane Doe · Profile", 800.0)], 1),
        ];
        let tokens = normalize(&pages, &ParseOptions::default()).unwrap();

        assert!(tokens
            .iter()
            .filter_map(LineToken::as_line)
            .all(|l| l.text != "Jane Doe · Profile"));
    }

    #[test]
    fn test_soft_wrap_merge() {
        let page = page_of(
            &[
                ("Led the platform team and", 40.0),
                ("shipped the rewrite.", 60.0),
                ("Education", 80.0),
            ],
            0,
        );
        let tokens = normalize(&[page], &ParseOptions::default()).unwrap();

        let texts: Vec<_> = tokens
            .iter()
            .filter_map(LineToken::as_line)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec!["Led the platform team and shipped the rewrite.", "Education"]
        );
    }

    #[test]
    fn test_empty_document() {
        let page = page_of(&[("2", 800.0)], 0);
        let err = normalize(&[page], &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyDocument));

        let err = normalize(&[], &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyDocument));
    }
}
