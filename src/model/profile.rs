//! The final profile record and its entry types.

use serde::{Deserialize, Serialize};

use super::DateRange;

/// One work experience entry.
///
/// Entries preserve source order; the document convention is
/// most-recent-first, but the parser copies order rather than inferring it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Job title
    pub title: String,

    /// Employer name
    pub company: Option<String>,

    /// Role location
    pub location: Option<String>,

    /// One or more stints; a single role may list several date ranges
    pub date_ranges: Vec<DateRange>,

    /// Free-text description, newlines preserved
    pub description: Option<String>,
}

/// One education entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Institution name
    pub institution: String,

    /// Degree, e.g. "Master of Science (MS)"
    pub degree: Option<String>,

    /// Field of study
    pub field_of_study: Option<String>,

    /// Attendance range
    pub date_range: Option<DateRange>,

    /// Free-text description
    pub description: Option<String>,
}

/// One skill entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    /// Skill name
    pub name: String,

    /// Endorsement count when the source text stated one
    pub endorsements: Option<u32>,
}

/// One certification entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationEntry {
    /// Certification name
    pub name: String,

    /// Issuing organization, from a trailing parenthetical
    pub issuer: Option<String>,
}

/// One language entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Language name
    pub name: String,

    /// Proficiency, e.g. "Native or Bilingual"
    pub proficiency: Option<String>,
}

/// A field the parser could not confidently resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    /// The affected field or section
    pub field: String,

    /// What happened
    pub message: String,
}

impl Warning {
    /// Create a warning.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The structured profile record.
///
/// Entry lists are independently optional: an absent section yields an empty
/// list, never null, so the output shape stays uniform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Profile name
    pub name: String,

    /// Headline under the name
    pub headline: Option<String>,

    /// Profile location
    pub location: Option<String>,

    /// Summary / about text
    pub summary: Option<String>,

    /// Work experience, in source order
    pub experience: Vec<ExperienceEntry>,

    /// Education, in source order
    pub education: Vec<EducationEntry>,

    /// Skills, in source order
    pub skills: Vec<SkillEntry>,

    /// Certifications, in source order
    pub certifications: Vec<CertificationEntry>,

    /// Languages, in source order
    pub languages: Vec<LanguageEntry>,

    /// Fields the heuristics had to guess or give up on
    pub warnings: Vec<Warning>,
}

impl ProfileRecord {
    /// Create an empty record for the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            headline: None,
            location: None,
            summary: None,
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            certifications: Vec::new(),
            languages: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_shape() {
        let record = ProfileRecord::new("Jane Doe");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["name"], "Jane Doe");
        assert!(json["headline"].is_null());
        // Absent sections serialize as empty lists, not null.
        assert!(json["experience"].as_array().unwrap().is_empty());
        assert!(json["skills"].as_array().unwrap().is_empty());
        assert!(json["warnings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_warning_constructor() {
        let w = Warning::new("location", "no location-like line found");
        assert_eq!(w.field, "location");
    }
}
