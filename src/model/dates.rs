//! Date range types.

use serde::{Deserialize, Serialize};

/// A point in time at year or year-month granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMonth {
    /// Calendar year
    pub year: i32,

    /// Month 1-12, when the source text stated one
    pub month: Option<u32>,
}

impl YearMonth {
    /// A year with no month component.
    pub fn year(year: i32) -> Self {
        Self { year, month: None }
    }

    /// A specific year and month.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: Some(month),
        }
    }
}

/// The end of a date range: a concrete date or the open-ended present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateEnd {
    /// A stated end date
    Date(YearMonth),

    /// The locale-specific "Present" sentinel: the range is ongoing
    Present,
}

/// A duration in whole years and months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duration {
    /// Whole years
    pub years: u32,

    /// Remaining months, 0-11
    pub months: u32,
}

impl Duration {
    /// Build a duration from a total month count.
    pub fn from_months(total: u32) -> Self {
        Self {
            years: total / 12,
            months: total % 12,
        }
    }
}

/// A parsed date range with an optional duration.
///
/// The duration is the one stated literally in the source text when an
/// explicit annotation was present; explicit text is authoritative over
/// derived arithmetic. It is derived by subtraction only when no annotation
/// exists and both bounds are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    /// Start of the range
    pub start: Option<YearMonth>,

    /// End of the range
    pub end: Option<DateEnd>,

    /// Stated or derived duration
    pub duration: Option<Duration>,
}

impl DateRange {
    /// Whether the range carries no information at all.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.duration.is_none()
    }

    /// Whether the range is ongoing.
    pub fn is_present(&self) -> bool {
        matches!(self.end, Some(DateEnd::Present))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_from_months() {
        let d = Duration::from_months(27);
        assert_eq!(d.years, 2);
        assert_eq!(d.months, 3);

        let d = Duration::from_months(11);
        assert_eq!(d.years, 0);
        assert_eq!(d.months, 11);
    }

    #[test]
    fn test_range_predicates() {
        let range = DateRange {
            start: Some(YearMonth::new(2020, 1)),
            end: Some(DateEnd::Present),
            duration: None,
        };
        assert!(range.is_present());
        assert!(!range.is_empty());
        assert!(DateRange::default().is_empty());
    }

    #[test]
    fn test_date_end_serialization() {
        let end = DateEnd::Date(YearMonth::new(2021, 6));
        let json = serde_json::to_string(&end).unwrap();
        assert!(json.contains("\"kind\":\"date\""));
        assert!(json.contains("\"year\":2021"));

        let present = serde_json::to_string(&DateEnd::Present).unwrap();
        assert_eq!(present, r#"{"kind":"present"}"#);
    }
}
