//! One-entry-per-line parsers: skills, certifications, languages.

use crate::model::{CertificationEntry, LanguageEntry, Section, SkillEntry};
use crate::parser::vocab;

/// Parse a Skills section: each non-blank line is one skill, with an
/// optional trailing endorsement count ("Rust · 42 endorsements", "Go (17)").
pub(crate) fn parse_skills(section: &Section) -> Vec<SkillEntry> {
    section
        .lines()
        .filter_map(|line| {
            let (name, endorsements) = strip_count(&line.text);
            (!name.is_empty()).then(|| SkillEntry { name, endorsements })
        })
        .collect()
}

/// Parse a Certifications section: each non-blank line is one certification,
/// with the issuer taken from a trailing parenthetical.
pub(crate) fn parse_certifications(section: &Section) -> Vec<CertificationEntry> {
    section
        .lines()
        .filter_map(|line| {
            let (name, issuer) = strip_parenthetical(&line.text);
            (!name.is_empty()).then(|| CertificationEntry { name, issuer })
        })
        .collect()
}

/// Parse a Languages section: each non-blank line is one language, with the
/// proficiency taken from a trailing parenthetical.
pub(crate) fn parse_languages(section: &Section) -> Vec<LanguageEntry> {
    section
        .lines()
        .filter_map(|line| {
            let (name, proficiency) = strip_parenthetical(&line.text);
            (!name.is_empty()).then(|| LanguageEntry { name, proficiency })
        })
        .collect()
}

/// Strip a trailing endorsement-count suffix.
fn strip_count(text: &str) -> (String, Option<u32>) {
    if let Some(caps) = vocab::endorsements_re().captures(text) {
        let count = caps.get(1).and_then(|m| m.as_str().parse().ok());
        let name = text[..caps.get(0).unwrap().start()].trim().to_string();
        return (name, count);
    }
    if let Some(caps) = vocab::trailing_count_re().captures(text) {
        let count = caps.get(1).and_then(|m| m.as_str().parse().ok());
        let name = text[..caps.get(0).unwrap().start()].trim().to_string();
        return (name, count);
    }
    (text.trim().to_string(), None)
}

/// Strip a trailing parenthetical suffix.
fn strip_parenthetical(text: &str) -> (String, Option<String>) {
    if let Some(caps) = vocab::trailing_paren_re().captures(text) {
        let inner = caps.get(1).map(|m| m.as_str().trim().to_string());
        let name = text[..caps.get(0).unwrap().start()].trim().to_string();
        if !name.is_empty() {
            return (name, inner);
        }
    }
    (text.trim().to_string(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineToken, NormalizedLine, SectionLabel};

    fn section(label: SectionLabel, lines: &[&str]) -> Section {
        let mut section = Section::new(label, None);
        for text in lines {
            section
                .body
                .push(LineToken::Line(NormalizedLine::new(*text, 0)));
        }
        section
    }

    #[test]
    fn test_skills_with_endorsements() {
        let section = section(
            SectionLabel::Skills,
            &["Rust · 42 endorsements", "Go (17)", "Distributed Systems"],
        );

        let skills = parse_skills(&section);
        assert_eq!(skills.len(), 3);
        assert_eq!(skills[0].name, "Rust");
        assert_eq!(skills[0].endorsements, Some(42));
        assert_eq!(skills[1].name, "Go");
        assert_eq!(skills[1].endorsements, Some(17));
        assert_eq!(skills[2].name, "Distributed Systems");
        assert_eq!(skills[2].endorsements, None);
    }

    #[test]
    fn test_certifications_with_issuer() {
        let section = section(
            SectionLabel::Certifications,
            &[
                "AWS Certified Solutions Architect (Amazon Web Services)",
                "CKA",
            ],
        );

        let certs = parse_certifications(&section);
        assert_eq!(certs[0].name, "AWS Certified Solutions Architect");
        assert_eq!(certs[0].issuer.as_deref(), Some("Amazon Web Services"));
        assert_eq!(certs[1].name, "CKA");
        assert!(certs[1].issuer.is_none());
    }

    #[test]
    fn test_languages_with_proficiency() {
        let section = section(
            SectionLabel::Languages,
            &["English (Native or Bilingual)", "German (Limited Working)", "Tagalog"],
        );

        let langs = parse_languages(&section);
        assert_eq!(langs[0].name, "English");
        assert_eq!(langs[0].proficiency.as_deref(), Some("Native or Bilingual"));
        assert_eq!(langs[2].name, "Tagalog");
        assert!(langs[2].proficiency.is_none());
    }
}
