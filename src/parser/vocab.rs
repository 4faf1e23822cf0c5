//! Heuristic rule tables.
//!
//! Every weak-signal match in the pipeline — heading vocabulary, month and
//! present-sentinel locales, bullet markers, boilerplate and suffix shapes —
//! lives here as an inspectable table or compiled pattern. Adding a locale
//! or export variant means extending a table, not adding a branch.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::SectionLabel;

/// Known heading phrases mapped to their section label.
///
/// Matching is case-insensitive on punctuation-stripped text; when several
/// phrases match the same line, the longest phrase wins.
const HEADING_VOCAB: &[(&str, SectionLabel)] = &[
    // English
    ("summary", SectionLabel::Summary),
    ("about", SectionLabel::Summary),
    ("experience", SectionLabel::Experience),
    ("work experience", SectionLabel::Experience),
    ("professional experience", SectionLabel::Experience),
    ("education", SectionLabel::Education),
    ("skills", SectionLabel::Skills),
    ("top skills", SectionLabel::Skills),
    ("skills & expertise", SectionLabel::Skills),
    ("certifications", SectionLabel::Certifications),
    ("licenses & certifications", SectionLabel::Certifications),
    ("languages", SectionLabel::Languages),
    ("contact", SectionLabel::Contact),
    // German
    ("zusammenfassung", SectionLabel::Summary),
    ("berufserfahrung", SectionLabel::Experience),
    ("ausbildung", SectionLabel::Education),
    ("kenntnisse", SectionLabel::Skills),
    ("kenntnisse und fähigkeiten", SectionLabel::Skills),
    ("top-kenntnisse", SectionLabel::Skills),
    ("zertifizierungen", SectionLabel::Certifications),
    ("sprachen", SectionLabel::Languages),
    ("kontakt", SectionLabel::Contact),
    // French
    ("résumé", SectionLabel::Summary),
    ("expérience", SectionLabel::Experience),
    ("formation", SectionLabel::Education),
    ("compétences", SectionLabel::Skills),
    ("principales compétences", SectionLabel::Skills),
    ("certifications", SectionLabel::Certifications),
    ("langues", SectionLabel::Languages),
    ("coordonnées", SectionLabel::Contact),
    // Spanish
    ("extracto", SectionLabel::Summary),
    ("experiencia", SectionLabel::Experience),
    ("educación", SectionLabel::Education),
    ("aptitudes principales", SectionLabel::Skills),
    ("conocimientos", SectionLabel::Skills),
    ("certificaciones", SectionLabel::Certifications),
    ("idiomas", SectionLabel::Languages),
    ("contactar", SectionLabel::Contact),
];

/// Month names and abbreviations mapped to month numbers, all locales mixed.
const MONTHS: &[(&str, u32)] = &[
    // English
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sept", 9),
    ("sep", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
    // German
    ("januar", 1),
    ("februar", 2),
    ("märz", 3),
    ("mai", 5),
    ("juni", 6),
    ("juli", 7),
    ("oktober", 10),
    ("okt", 10),
    ("dezember", 12),
    ("dez", 12),
    // French
    ("janvier", 1),
    ("février", 2),
    ("mars", 3),
    ("avril", 4),
    ("juin", 6),
    ("juillet", 7),
    ("août", 8),
    ("septembre", 9),
    ("octobre", 10),
    ("novembre", 11),
    ("décembre", 12),
    // Spanish
    ("enero", 1),
    ("febrero", 2),
    ("marzo", 3),
    ("abril", 4),
    ("mayo", 5),
    ("junio", 6),
    ("julio", 7),
    ("agosto", 8),
    ("septiembre", 9),
    ("octubre", 10),
    ("noviembre", 11),
    ("diciembre", 12),
];

/// Locale-specific tokens meaning an open-ended, ongoing range end.
const PRESENT_SENTINELS: &[&str] = &[
    "present",
    "current",
    "today",
    "heute",
    "aktuell",
    "aujourd'hui",
    "actuellement",
    "présent",
    "actualidad",
    "presente",
    "actual",
];

/// Words that separate the two bounds of a date range.
const RANGE_SEPARATORS: &[&str] = &["to", "bis", "au", "hasta", "a"];

/// Unit words for explicit duration annotations, mapped to months-per-unit.
const DURATION_UNITS: &[(&str, u32)] = &[
    ("yr", 12),
    ("yrs", 12),
    ("year", 12),
    ("years", 12),
    ("jahr", 12),
    ("jahre", 12),
    ("jahren", 12),
    ("an", 12),
    ("ans", 12),
    ("año", 12),
    ("años", 12),
    ("mo", 1),
    ("mos", 1),
    ("month", 1),
    ("months", 1),
    ("monat", 1),
    ("monate", 1),
    ("monaten", 1),
    ("mois", 1),
    ("mes", 1),
    ("meses", 1),
];

/// Characters that open a bullet item.
const BULLET_MARKERS: &[char] = &['•', '●', '○', '▪', '‣', '·', '-', '–', '*'];

/// Normalize a heading candidate: lowercase, strip punctuation, collapse
/// whitespace.
pub(crate) fn normalize_heading(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '&' || c == '-' || c == '\'' {
                c
            } else {
                ' '
            }
        })
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Look up the section label for a heading line, longest match wins.
pub(crate) fn section_for_heading(text: &str) -> Option<SectionLabel> {
    let normalized = normalize_heading(text);
    if normalized.is_empty() {
        return None;
    }

    let mut best: Option<(&str, SectionLabel)> = None;
    for &(phrase, label) in HEADING_VOCAB {
        if normalized == phrase && best.map_or(true, |(b, _)| phrase.len() > b.len()) {
            best = Some((phrase, label));
        }
    }
    best.map(|(_, label)| label)
}

/// Look up a month-name token.
pub(crate) fn month_number(token: &str) -> Option<u32> {
    let key = token.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
    MONTHS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|&(_, num)| num)
}

/// Whether a token is a present sentinel.
pub(crate) fn is_present_token(token: &str) -> bool {
    let key = token.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'').to_lowercase();
    PRESENT_SENTINELS.contains(&key.as_str())
}

/// Whether a token separates the two bounds of a range.
pub(crate) fn is_separator_token(token: &str) -> bool {
    if token.chars().all(|c| matches!(c, '-' | '–' | '—' | '−')) && !token.is_empty() {
        return true;
    }
    RANGE_SEPARATORS.contains(&token.to_lowercase().as_str())
}

/// Months per unit for a duration unit token, if it is one.
pub(crate) fn duration_unit_months(token: &str) -> Option<u32> {
    let key = token.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
    DURATION_UNITS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|&(_, months)| months)
}

/// Whether a line opens with a bullet marker.
pub(crate) fn is_bullet_line(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if BULLET_MARKERS.contains(&first) => {
            matches!(chars.next(), Some(c) if c.is_whitespace())
        }
        _ => false,
    }
}

/// Pattern for pure page-number lines ("3", "Page 3 of 12").
pub(crate) fn page_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:page\s+)?\d{1,4}(?:\s*(?:of|/|von|de|sur)\s*\d{1,4})?$").unwrap()
    })
}

/// Pattern for a trailing endorsement-count suffix on a skill line.
pub(crate) fn endorsements_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\s*[·•]?\s*\(?(\d+)\)?\s+endorsements?\s*$").unwrap())
}

/// Pattern for a bare trailing "(N)" count.
pub(crate) fn trailing_count_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\((\d+)\)\s*$").unwrap())
}

/// Pattern for a trailing parenthetical ("(Amazon Web Services)").
pub(crate) fn trailing_paren_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\(([^()]+)\)\s*$").unwrap())
}

/// Whether a line looks like a location ("San Francisco, CA",
/// "Greater Seattle Area").
pub(crate) fn is_location_like(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() || text.len() > 60 {
        return false;
    }
    if text.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    if text.ends_with(['.', '!', '?', ':', ';']) {
        return false;
    }
    text.contains(", ") || text.ends_with("Area")
}
