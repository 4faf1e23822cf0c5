//! Experience entry parsing.

use crate::model::{DateRange, ExperienceEntry, Section, Warning};
use crate::parser::{dates, vocab};

use super::split_entry_blocks;

/// Parse an Experience section into ordered entries.
///
/// Entry shape, in positional order: title line, optional company line, one
/// or more date-range lines (several consecutive ranges are stints of the
/// same role), an optional location line, then description text. An entry
/// with no structural line before its first date range cannot be resolved
/// and is dropped with a warning; siblings are unaffected.
pub(crate) fn parse_experience(section: &Section) -> (Vec<ExperienceEntry>, Vec<Warning>) {
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

fn parse_block(lines: &[&str], warnings: &mut Vec<Warning>) -> Option<ExperienceEntry> {
    let first_date = lines.iter().position(|l| dates::is_date_range_line(l));

    let structural = &lines[..first_date.unwrap_or(lines.len())];
    if structural.is_empty() {
        warnings.push(Warning::new(
            "experience",
            format!(
                "entry dropped: no title or company line before \"{}\"",
                lines.first().copied().unwrap_or_default()
            ),
        ));
        return None;
    }

    let title = structural[0].to_string();
    let company = structural
        .get(1)
        .filter(|l| !vocab::is_bullet_line(l))
        .map(|l| l.to_string());

    let mut description_lines: Vec<&str> = Vec::new();
    // Structural lines past title and company are early description text
    // (a wrapped headline the normalizer could not join).
    let skip = if company.is_some() { 2 } else { 1 };
    description_lines.extend(&structural[skip.min(structural.len())..]);

    // Consecutive date-range lines are additional stints of the same role.
    let mut date_ranges: Vec<DateRange> = Vec::new();
    let mut rest = first_date.unwrap_or(lines.len());
    while rest < lines.len() && dates::is_date_range_line(lines[rest]) {
        match dates::parse_date_range(lines[rest]) {
            Some(range) => date_ranges.push(range),
            None => warnings.push(Warning::new(
                "experience",
                format!("malformed date range \"{}\"", lines[rest]),
            )),
        }
        rest += 1;
    }

    let mut location = None;
    if rest < lines.len() && vocab::is_location_like(lines[rest]) {
        location = Some(lines[rest].to_string());
        rest += 1;
    }

    for &line in &lines[rest..] {
        if dates::is_date_range_line(line) {
            // A later date line separated from the stint block; keep the
            // parse if it succeeds, otherwise warn.
            match dates::parse_date_range(line) {
                Some(range) => date_ranges.push(range),
                None => warnings.push(Warning::new(
                    "experience",
                    format!("malformed date range \"{}\"", line),
                )),
            }
        } else {
            description_lines.push(line);
        }
    }

    let description = (!description_lines.is_empty()).then(|| description_lines.join("\n"));

    Some(ExperienceEntry {
        title,
        company,
        location,
        date_ranges,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DateEnd, Duration, LineToken, NormalizedLine, SectionLabel};

    fn section(lines: &[&str], gaps_before: &[usize]) -> Section {
        let mut section = Section::new(SectionLabel::Experience, Some("Experience".to_string()));
        for (i, text) in lines.iter().enumerate() {
            if gaps_before.contains(&i) {
                section.body.push(LineToken::BlankGap);
            }
            section
                .body
                .push(LineToken::Line(NormalizedLine::new(*text, 0)));
        }
        section
    }

    #[test]
    fn test_single_entry() {
        let section = section(
            &[
                "Software Engineer",
                "Acme",
                "Jan 2020 - Present · 2 yrs",
                "San Francisco, CA",
                "Built the ingestion pipeline.",
            ],
            &[],
        );

        let (entries, warnings) = parse_experience(&section);
        assert!(warnings.is_empty());
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.title, "Software Engineer");
        assert_eq!(entry.company.as_deref(), Some("Acme"));
        assert_eq!(entry.location.as_deref(), Some("San Francisco, CA"));
        assert_eq!(entry.date_ranges.len(), 1);
        assert_eq!(entry.date_ranges[0].end, Some(DateEnd::Present));
        assert_eq!(
            entry.date_ranges[0].duration,
            Some(Duration { years: 2, months: 0 })
        );
        assert_eq!(
            entry.description.as_deref(),
            Some("Built the ingestion pipeline.")
        );
    }

    #[test]
    fn test_multiple_stints_one_entry() {
        let section = section(
            &[
                "Engineering Manager",
                "Acme",
                "Jan 2018 - Dec 2019",
                "Jan 2021 - Present",
            ],
            &[],
        );

        let (entries, warnings) = parse_experience(&section);
        assert!(warnings.is_empty());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date_ranges.len(), 2);
    }

    #[test]
    fn test_date_only_entry_dropped_with_warning() {
        let section = section(
            &["Mar 2015 - Dec 2016", "Engineer", "Beta Corp", "Jan 2017 - Feb 2018"],
            &[1],
        );

        let (entries, warnings) = parse_experience(&section);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Engineer");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "experience");
        assert!(warnings[0].message.contains("entry dropped"));
    }

    #[test]
    fn test_malformed_date_warns_but_keeps_entry() {
        let section = section(&["Engineer", "Acme", "Jan - Mar"], &[]);

        let (entries, warnings) = parse_experience(&section);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].date_ranges.is_empty());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("malformed date range"));
    }

    #[test]
    fn test_entry_without_dates() {
        let section = section(&["Founder", "Garage Startup", "Bootstrapped everything."], &[]);

        let (entries, warnings) = parse_experience(&section);
        assert!(warnings.is_empty());
        assert_eq!(entries[0].title, "Founder");
        assert_eq!(entries[0].company.as_deref(), Some("Garage Startup"));
        assert!(entries[0].date_ranges.is_empty());
        assert_eq!(
            entries[0].description.as_deref(),
            Some("Bootstrapped everything.")
        );
    }
}
