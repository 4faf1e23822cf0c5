//! Profile model types.
//!
//! This module defines the intermediate representation that bridges the
//! extraction collaborator's raw fragments and the final profile record:
//! fragments come in, normalized lines and sections flow through the
//! pipeline, and a [`ProfileRecord`] comes out.

mod dates;
mod fragment;
mod line;
mod profile;
mod section;

pub use dates::{DateEnd, DateRange, Duration, YearMonth};
pub use fragment::{FontSizeBucket, PageFragments, TextFragment};
pub use line::{LineToken, NormalizedLine};
pub use profile::{
    CertificationEntry, EducationEntry, ExperienceEntry, LanguageEntry, ProfileRecord, SkillEntry,
    Warning,
};
pub use section::{Section, SectionLabel};
