//! Per-section entry parsers.
//!
//! One strategy per section kind. All strategies share the same boundary
//! rule: a new entry starts at a line immediately preceded by a BlankGap
//! that is neither a date-range line nor a bullet-prefixed continuation.

mod education;
mod experience;
mod simple;

pub(crate) use education::parse_education;
pub(crate) use experience::parse_experience;
pub(crate) use simple::{parse_certifications, parse_languages, parse_skills};

use crate::model::{LineToken, NormalizedLine};

use super::{dates, vocab};

/// Split a section body into entry blocks using the shared boundary rule.
pub(crate) fn split_entry_blocks(body: &[LineToken]) -> Vec<Vec<&NormalizedLine>> {
    let mut blocks: Vec<Vec<&NormalizedLine>> = Vec::new();
    let mut current: Vec<&NormalizedLine> = Vec::new();
    let mut gap_pending = false;

    for token in body {
        match token {
            LineToken::BlankGap => {
                gap_pending = true;
            }
            LineToken::Line(line) => {
                let opens_entry = gap_pending
                    && !current.is_empty()
                    && !dates::is_date_range_line(&line.text)
                    && !vocab::is_bullet_line(&line.text);
                if opens_entry {
                    blocks.push(std::mem::take(&mut current));
                }
                current.push(line);
                gap_pending = false;
            }
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}
