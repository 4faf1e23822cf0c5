//! JSON rendering for profile records.

use crate::error::{Error, Result};
use crate::model::ProfileRecord;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a profile record to JSON.
pub fn to_json(record: &ProfileRecord, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(record),
        JsonFormat::Compact => serde_json::to_string(record),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SkillEntry;

    #[test]
    fn test_to_json_pretty() {
        let mut record = ProfileRecord::new("Jane Doe");
        record.skills.push(SkillEntry {
            name: "Rust".to_string(),
            endorsements: Some(42),
        });

        let json = to_json(&record, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"name\""));
        assert!(json.contains("Jane Doe"));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let record = ProfileRecord::new("Jane Doe");
        let json = to_json(&record, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
    }
}
