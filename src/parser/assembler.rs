//! Profile assembly.
//!
//! Extracts identity fields from the Header pseudo-section, fans the typed
//! sections out to their entry parsers (in parallel when enabled; section
//! parses are pure functions of their section, so the only synchronization
//! point is the index-stable join here), and merges everything into the
//! final record.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{
    CertificationEntry, EducationEntry, ExperienceEntry, LanguageEntry, LineToken, ProfileRecord,
    Section, SectionLabel, SkillEntry, Warning,
};

use super::options::ParseOptions;
use super::{entries, vocab};

/// Output of one section parse.
enum SectionOutput {
    Experience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
    Skills(Vec<SkillEntry>),
    Certifications(Vec<CertificationEntry>),
    Languages(Vec<LanguageEntry>),
    Summary(String),
    Nothing,
}

/// Merge section outputs into the final ProfileRecord.
pub(crate) fn assemble(
    sections: &[Section],
    mut warnings: Vec<Warning>,
    options: &ParseOptions,
) -> Result<ProfileRecord> {
    let header = sections.iter().find(|s| s.label == SectionLabel::Header);
    let identity = extract_identity(header);

    let name = match identity.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(Error::MissingRequiredSection("header".to_string())),
    };
    warnings.extend(identity.warnings);

    // Section parses are independent; rayon's collect keeps them in input
    // order, so the merge below is deterministic either way.
    let outputs: Vec<(SectionOutput, Vec<Warning>)> = if options.parallel {
        sections.par_iter().map(parse_section).collect()
    } else {
        sections.iter().map(parse_section).collect()
    };

    let mut record = ProfileRecord::new(name);
    record.headline = identity.headline;
    record.location = identity.location;

    for (output, section_warnings) in outputs {
        match output {
            SectionOutput::Experience(list) => record.experience.extend(list),
            SectionOutput::Education(list) => record.education.extend(list),
            SectionOutput::Skills(list) => record.skills.extend(list),
            SectionOutput::Certifications(list) => record.certifications.extend(list),
            SectionOutput::Languages(list) => record.languages.extend(list),
            SectionOutput::Summary(text) => {
                record.summary = Some(match record.summary.take() {
                    Some(existing) => format!("{}\n\n{}", existing, text),
                    None => text,
                });
            }
            SectionOutput::Nothing => {}
        }
        warnings.extend(section_warnings);
    }

    record.warnings = warnings;
    Ok(record)
}

fn parse_section(section: &Section) -> (SectionOutput, Vec<Warning>) {
    match section.label {
        SectionLabel::Experience => {
            let (list, warnings) = entries::parse_experience(section);
            (SectionOutput::Experience(list), warnings)
        }
        SectionLabel::Education => {
            let (list, warnings) = entries::parse_education(section);
            (SectionOutput::Education(list), warnings)
        }
        SectionLabel::Skills => (SectionOutput::Skills(entries::parse_skills(section)), Vec::new()),
        SectionLabel::Certifications => (
            SectionOutput::Certifications(entries::parse_certifications(section)),
            Vec::new(),
        ),
        SectionLabel::Languages => (
            SectionOutput::Languages(entries::parse_languages(section)),
            Vec::new(),
        ),
        SectionLabel::Summary => {
            let text = summary_text(section);
            if text.is_empty() {
                (SectionOutput::Nothing, Vec::new())
            } else {
                (SectionOutput::Summary(text), Vec::new())
            }
        }
        // Header is handled by identity extraction; Contact and Unknown are
        // diagnostics only.
        SectionLabel::Header | SectionLabel::Contact | SectionLabel::Unknown => {
            (SectionOutput::Nothing, Vec::new())
        }
    }
}

/// Join a Summary section's lines, keeping gap-separated paragraphs apart.
fn summary_text(section: &Section) -> String {
    let mut paragraphs: Vec<Vec<&str>> = vec![Vec::new()];
    for token in &section.body {
        match token {
            LineToken::Line(line) => paragraphs.last_mut().unwrap().push(&line.text),
            LineToken::BlankGap => {
                if !paragraphs.last().unwrap().is_empty() {
                    paragraphs.push(Vec::new());
                }
            }
        }
    }

    paragraphs
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| p.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

struct Identity {
    name: Option<String>,
    headline: Option<String>,
    location: Option<String>,
    warnings: Vec<Warning>,
}

/// Identity extraction from the Header pseudo-section.
///
/// This is the weakest-signal component in the pipeline: the name is the
/// first line of the largest size bucket present, the headline is the line
/// after it, and the location is a later short line matching the location
/// shape. Every miss degrades to `None` plus a warning; nothing is guessed.
fn extract_identity(header: Option<&Section>) -> Identity {
    let mut identity = Identity {
        name: None,
        headline: None,
        location: None,
        warnings: Vec::new(),
    };

    let lines: Vec<_> = match header {
        Some(section) => section.lines().collect(),
        None => Vec::new(),
    };
    if lines.is_empty() {
        return identity;
    }

    let largest = lines.iter().map(|l| l.size).max().unwrap();
    let name_idx = lines.iter().position(|l| l.size == largest).unwrap();
    identity.name = Some(lines[name_idx].text.clone());

    match lines.get(name_idx + 1) {
        Some(line) => identity.headline = Some(line.text.clone()),
        None => identity
            .warnings
            .push(Warning::new("headline", "no line after the name")),
    }

    let location = lines
        .get(name_idx + 2..)
        .unwrap_or_default()
        .iter()
        .find(|l| vocab::is_location_like(&l.text));
    match location {
        Some(line) => identity.location = Some(line.text.clone()),
        None => identity.warnings.push(Warning::new(
            "location",
            "no location-like line in the header",
        )),
    }

    identity
}
