//! Date range parsing.
//!
//! Parses the heterogeneous date-range expressions found in profile exports:
//! explicit months and years ("Jan 2020 - Present", "März 2015 – Juli 2017"),
//! bare years ("2019 - 2021"), and trailing duration annotations
//! ("· 3 yrs 2 mos", "(2 years)"). An explicitly stated duration is
//! authoritative and never recomputed from the bounds; a duration is derived
//! by subtraction only when no annotation exists and both bounds are known.

use crate::model::{DateEnd, DateRange, Duration, YearMonth};

use super::vocab;

/// Parse a text span suspected to contain a date range.
///
/// Returns `None` when the span is not a recognizable range; callers treat
/// that as "date range absent" rather than aborting the entry.
///
/// # Example
///
/// ```
/// use unprofile::{parse_date_range, model::DateEnd};
///
/// let range = parse_date_range("Jan 2020 - Present").unwrap();
/// assert_eq!(range.start.unwrap().year, 2020);
/// assert_eq!(range.start.unwrap().month, Some(1));
/// assert_eq!(range.end, Some(DateEnd::Present));
/// assert!(range.duration.is_none());
/// ```
pub fn parse_date_range(text: &str) -> Option<DateRange> {
    let (main, annotation) = split_annotation(text.trim());

    let stated_duration = annotation.as_deref().and_then(parse_duration);

    let tokens: Vec<&str> = tokenize(main);
    if tokens.is_empty() {
        return None;
    }

    // Split the token stream at the first separator into start and end sides.
    let sep_idx = tokens.iter().position(|t| vocab::is_separator_token(t));
    let (start_tokens, end_tokens) = match sep_idx {
        Some(idx) => (&tokens[..idx], &tokens[idx + 1..]),
        None => (&tokens[..], &[][..]),
    };

    let start = parse_point(start_tokens);
    let end = if end_tokens.iter().any(|t| vocab::is_present_token(t)) {
        Some(DateEnd::Present)
    } else {
        parse_point(end_tokens).map(DateEnd::Date)
    };

    // At least one concrete date must have resolved; a lone "Present" or a
    // pair of month names without years is not a usable range.
    let has_concrete = start.is_some() || matches!(end, Some(DateEnd::Date(_)));
    if !has_concrete {
        return None;
    }

    let duration = stated_duration.or_else(|| derive_duration(start, end));

    Some(DateRange {
        start,
        end,
        duration,
    })
}

/// Whether a line is shaped like a date range: every token is a date token
/// and at least one month or year is present.
///
/// This is the boundary-detection predicate the entry parsers share. A line
/// that passes this test but fails [`parse_date_range`] is malformed rather
/// than absent, which the caller reports as a warning.
pub(crate) fn is_date_range_line(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() || text.len() > 64 {
        return false;
    }

    let (main, annotation) = split_annotation(text);
    if let Some(ann) = annotation {
        if !annotation_is_duration_like(&ann) {
            return false;
        }
    }

    let tokens = tokenize(main);
    if tokens.is_empty() {
        return false;
    }

    let mut has_date_token = false;
    for token in &tokens {
        if year_number(token).is_some() || vocab::month_number(token).is_some() {
            has_date_token = true;
        } else if !(vocab::is_separator_token(token) || vocab::is_present_token(token)) {
            return false;
        }
    }
    has_date_token
}

/// Parse an explicit duration annotation ("3 yrs 2 mos", "2 years").
pub(crate) fn parse_duration(text: &str) -> Option<Duration> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut total_months: u32 = 0;
    let mut found = false;

    let mut pending: Option<u32> = None;
    for token in tokens {
        let cleaned = token.trim_matches(|c: char| !c.is_alphanumeric());
        if let Ok(n) = cleaned.parse::<u32>() {
            pending = Some(n);
        } else if let Some(unit) = vocab::duration_unit_months(cleaned) {
            if let Some(n) = pending.take() {
                total_months += n * unit;
                found = true;
            }
        }
    }

    found.then(|| Duration::from_months(total_months))
}

/// Split a trailing annotation off the main range text.
///
/// Annotations appear after a "·"/"•" separator or as a trailing
/// parenthetical: "Jan 2020 - Present · 2 yrs", "2015 - 2017 (2 years)".
fn split_annotation(text: &str) -> (&str, Option<String>) {
    if let Some(idx) = text.find(['·', '•']) {
        let (main, rest) = text.split_at(idx);
        let ann = rest.trim_start_matches(['·', '•']).trim();
        return (main.trim(), (!ann.is_empty()).then(|| ann.to_string()));
    }

    if text.ends_with(')') {
        if let Some(open) = text.rfind('(') {
            let inner = &text[open + 1..text.len() - 1];
            return (text[..open].trim(), Some(inner.trim().to_string()));
        }
    }

    (text, None)
}

/// Whether an annotation consists only of duration-shaped tokens.
fn annotation_is_duration_like(text: &str) -> bool {
    let mut any = false;
    for token in text.split_whitespace() {
        let cleaned = token.trim_matches(|c: char| !c.is_alphanumeric());
        if cleaned.is_empty() {
            continue;
        }
        if cleaned.parse::<u32>().is_ok() {
            continue;
        }
        if vocab::duration_unit_months(cleaned).is_some() {
            any = true;
            continue;
        }
        return false;
    }
    any
}

/// Tokenize the main range text, treating dashes as standalone tokens.
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .flat_map(|word| {
            // "2019-2021" carries the separator without surrounding spaces.
            if word.len() > 1 && word.contains(['-', '–', '—']) && !word.starts_with(['-', '–', '—'])
            {
                split_on_dash(word)
            } else {
                vec![word]
            }
        })
        .collect()
}

fn split_on_dash(word: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = word;
    while let Some(idx) = rest.find(['-', '–', '—']) {
        let (before, after) = rest.split_at(idx);
        if !before.is_empty() {
            parts.push(before);
        }
        let dash_len = after.chars().next().map_or(1, char::len_utf8);
        parts.push(&after[..dash_len]);
        rest = &after[dash_len..];
    }
    if !rest.is_empty() {
        parts.push(rest);
    }
    parts
}

/// Parse one side of a range: a month name optionally followed by a year,
/// or a year alone.
fn parse_point(tokens: &[&str]) -> Option<YearMonth> {
    let mut month = None;
    let mut year = None;

    for token in tokens {
        if let Some(y) = year_number(token) {
            year = Some(y);
        } else if let Some(m) = vocab::month_number(token) {
            month = month.or(Some(m));
        }
    }

    year.map(|year| YearMonth { year, month })
}

/// Parse a plausible calendar year token.
fn year_number(token: &str) -> Option<i32> {
    let cleaned = token.trim_matches(|c: char| !c.is_ascii_digit());
    if cleaned.len() != 4 {
        return None;
    }
    let year: i32 = cleaned.parse().ok()?;
    (1900..=2100).contains(&year).then_some(year)
}

/// Derive a duration by subtraction when both bounds are concrete.
fn derive_duration(start: Option<YearMonth>, end: Option<DateEnd>) -> Option<Duration> {
    let start = start?;
    let end = match end? {
        DateEnd::Date(date) => date,
        DateEnd::Present => return None,
    };

    match (start.month, end.month) {
        (Some(sm), Some(em)) => {
            let total = (end.year - start.year) * 12 + em as i32 - sm as i32;
            (total >= 0).then(|| Duration::from_months(total as u32))
        }
        _ => {
            let years = end.year - start.year;
            (years >= 0).then(|| Duration {
                years: years as u32,
                months: 0,
            })
        }
    }
}
