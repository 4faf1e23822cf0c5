//! Education entry parsing.

use crate::model::{DateRange, EducationEntry, Section, Warning};
use crate::parser::dates;

use super::split_entry_blocks;

/// Parse an Education section into ordered entries.
///
/// Entry shape: institution line, then a degree line ("Master of Science
/// (MS), Computer Science · (2015 - 2017)") whose comma-separated tail is
/// the field of study and whose trailing annotation or segment may carry the
/// date range, then description text.
pub(crate) fn parse_education(section: &Section) -> (Vec<EducationEntry>, Vec<Warning>) {
    let mut entries = Vec::new();
    let mut warnings = Vec::new();

    for block in split_entry_blocks(&section.body) {
        let texts: Vec<&str> = block.iter().map(|l| l.text.as_str()).collect();
        if let Some(entry) = parse_block(&texts, &mut warnings) {
            entries.push(entry);
        }
    }

    (entries, warnings)
}

fn parse_block(lines: &[&str], warnings: &mut Vec<Warning>) -> Option<EducationEntry> {
    let first = *lines.first()?;
    if dates::is_date_range_line(first) {
        warnings.push(Warning::new(
            "education",
            format!("entry dropped: no institution line before \"{}\"", first),
        ));
        return None;
    }

    let institution = first.to_string();
    let mut degree = None;
    let mut field_of_study = None;
    let mut date_range: Option<DateRange> = None;
    let mut description_lines: Vec<&str> = Vec::new();

    let mut rest = 1;
    if let Some(line) = lines.get(1) {
        if dates::is_date_range_line(line) {
            date_range = parse_or_warn(line, warnings);
            rest = 2;
        } else {
            let (deg, field, range) = split_degree_line(line);
            degree = deg;
            field_of_study = field;
            date_range = range;
            rest = 2;
        }
    }

    for &line in &lines[rest..] {
        if dates::is_date_range_line(line) {
            if date_range.is_none() {
                date_range = parse_or_warn(line, warnings);
            }
        } else {
            description_lines.push(line);
        }
    }

    let description = (!description_lines.is_empty()).then(|| description_lines.join("\n"));

    Some(EducationEntry {
        institution,
        degree,
        field_of_study,
        date_range,
        description,
    })
}

fn parse_or_warn(line: &str, warnings: &mut Vec<Warning>) -> Option<DateRange> {
    let range = dates::parse_date_range(line);
    if range.is_none() {
        warnings.push(Warning::new(
            "education",
            format!("malformed date range \"{}\"", line),
        ));
    }
    range
}

/// Split a degree line into degree, field of study, and a trailing range.
fn split_degree_line(line: &str) -> (Option<String>, Option<String>, Option<DateRange>) {
    // Strip a trailing "· (2015 - 2017)" style annotation first.
    let (main, range) = match line.rfind(['·', '•']) {
        Some(idx) => {
            let tail = line[idx..].trim_start_matches(['·', '•']).trim();
            let tail = tail.trim_start_matches('(').trim_end_matches(')').trim();
            match dates::parse_date_range(tail) {
                Some(range) => (line[..idx].trim(), Some(range)),
                None => (line.trim(), None),
            }
        }
        None => (line.trim(), None),
    };

    // Comma-separated segments; trailing date segments fold into the range.
    let mut segments: Vec<&str> = main.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
    let mut range = range;
    while let Some(last) = segments.last() {
        if dates::is_date_range_line(last) {
            if range.is_none() {
                range = dates::parse_date_range(last);
            }
            segments.pop();
        } else {
            break;
        }
    }

    let degree = segments.first().map(|s| s.to_string());
    let field = (segments.len() > 1).then(|| segments[1..].join(", "));

    (degree, field, range)
}
