//! # unprofile
//!
//! Heuristic structural parser for LinkedIn profile exports.
//!
//! The "save as document" export is visually columnar but textually
//! flattened: no schema, no delimiters, section order and presence varying
//! across locales and export versions. This library takes the ordered text
//! fragments an extraction collaborator pulls from the document pages and
//! reconstructs the semantic structure — section boundaries, entry
//! boundaries, and typed fields — from weak signals: a heading vocabulary,
//! blank-line gaps, date-range patterns, and position/style hints.
//!
//! ## Quick Start
//!
//! ```
//! use unprofile::model::{FontSizeBucket, PageFragments, TextFragment};
//!
//! fn main() -> unprofile::Result<()> {
//!     let mut page = PageFragments::new(0);
//!     page.add(
//!         TextFragment::new("Jane Doe", 0, 48.0, 40.0)
//!             .with_style(true, FontSizeBucket::Huge),
//!     );
//!     page.add(TextFragment::new("Software Engineer at Acme", 0, 48.0, 64.0));
//!
//!     let record = unprofile::parse_pages(&[page])?;
//!     assert_eq!(record.name, "Jane Doe");
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! A single forward pass: the fragment normalizer produces clean logical
//! lines with explicit blank-gap markers, the segmenter partitions them into
//! labeled sections, one entry parser per section kind produces typed
//! entries (sections are independent, so they parse in parallel), and the
//! assembler extracts the identity fields and merges everything into a
//! [`ProfileRecord`](model::ProfileRecord).
//!
//! The pipeline is a pure, stateless transformation: parsing the same input
//! twice yields byte-identical output. Heuristic misses degrade to explicit
//! absences plus entries in the record's `warnings` list; only an empty
//! document or an unresolvable name abort the parse.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    CertificationEntry, DateEnd, DateRange, Duration, EducationEntry, ExperienceEntry,
    FontSizeBucket, LanguageEntry, LineToken, NormalizedLine, PageFragments, ProfileRecord,
    Section, SectionLabel, SkillEntry, TextFragment, Warning, YearMonth,
};
pub use parser::{parse_date_range, ParseOptions};
pub use render::{to_json, JsonFormat};

/// Parse a fragment sequence into a profile record.
///
/// # Arguments
///
/// * `pages` - Ordered pages of text fragments from the extraction
///   collaborator
///
/// # Errors
///
/// Returns [`Error::EmptyDocument`] when no usable content remains after
/// normalization, and [`Error::MissingRequiredSection`] when no name can be
/// resolved from the document header. All other irregularities degrade to
/// warnings on the record.
pub fn parse_pages(pages: &[PageFragments]) -> Result<ProfileRecord> {
    parse_pages_with_options(pages, ParseOptions::default())
}

/// Parse a fragment sequence with custom options.
///
/// # Example
///
/// ```no_run
/// use unprofile::{parse_pages_with_options, ParseOptions};
///
/// # let pages = vec![];
/// let options = ParseOptions::new().sequential();
/// let record = parse_pages_with_options(&pages, options)?;
/// # Ok::<(), unprofile::Error>(())
/// ```
pub fn parse_pages_with_options(
    pages: &[PageFragments],
    options: ParseOptions,
) -> Result<ProfileRecord> {
    let tokens = parser::normalize(pages, &options)?;
    parse_tokens(&tokens, &options)
}

/// Parse an already-normalized line-token sequence.
///
/// Useful when the normalization step has been run separately, or for
/// driving the segmenter from synthetic line sequences in tests.
pub fn parse_tokens(tokens: &[LineToken], options: &ParseOptions) -> Result<ProfileRecord> {
    let mut warnings = Vec::new();
    let sections = parser::segment(tokens, &mut warnings);
    parser::assemble(&sections, warnings, options)
}
