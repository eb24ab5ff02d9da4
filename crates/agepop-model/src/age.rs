//! Age labels as they appear in the source column headers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};

/// Unit suffix of a single-year age label ("23세").
pub const AGE_UNIT: &str = "세";

/// Marker of the open-ended terminal bucket ("100세 이상").
pub const OPEN_ENDED_MARKER: &str = "이상";

/// Numeric age assigned to the open-ended terminal bucket.
pub const OPEN_ENDED_AGE: u32 = 100;

/// A single-year age bucket label such as `"0세"` or `"100세 이상"`.
///
/// Ordering between labels is never derived from the text; the position of
/// the label in the source header is the canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgeLabel(String);

impl AgeLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the open-ended terminal bucket.
    pub fn is_open_ended(&self) -> bool {
        self.0.contains(OPEN_ENDED_MARKER)
    }

    /// Numeric age used for bucketing.
    ///
    /// The open-ended bucket maps to [`OPEN_ENDED_AGE`]; every other label
    /// must be digits followed by the unit suffix.
    pub fn numeric_age(&self) -> Result<u32> {
        if self.is_open_ended() {
            return Ok(OPEN_ENDED_AGE);
        }
        let trimmed = self.0.trim();
        let digits = trimmed.strip_suffix(AGE_UNIT).unwrap_or(trimmed).trim();
        digits.parse().map_err(|_| ParseError::InvalidAgeLabel {
            label: self.0.clone(),
        })
    }
}

impl fmt::Display for AgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AgeLabel {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AgeLabel {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_age_single_year() {
        assert_eq!(AgeLabel::from("23세").numeric_age(), Ok(23));
        assert_eq!(AgeLabel::from("0세").numeric_age(), Ok(0));
        assert_eq!(AgeLabel::from(" 7세 ").numeric_age(), Ok(7));
    }

    #[test]
    fn test_numeric_age_open_ended() {
        let label = AgeLabel::from("100세 이상");
        assert!(label.is_open_ended());
        assert_eq!(label.numeric_age(), Ok(100));
    }

    #[test]
    fn test_numeric_age_invalid() {
        let result = AgeLabel::from("총인구수").numeric_age();
        assert_eq!(
            result,
            Err(ParseError::InvalidAgeLabel {
                label: "총인구수".to_string()
            })
        );
    }

    #[test]
    fn test_label_serializes_as_string() {
        let json = serde_json::to_string(&AgeLabel::from("5세")).unwrap();
        assert_eq!(json, "\"5세\"");
    }
}
