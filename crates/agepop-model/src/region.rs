//! Per-region age records and the vectors derived from them.

use serde::{Deserialize, Serialize};

use crate::age::AgeLabel;
use crate::error::{ParseError, RegionNotFound, Result};

/// Name parts of an administrative area string such as `"종로구(1111000000)"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionName {
    /// Canonical short name (`"종로구"`).
    pub name: String,
    /// The raw area string as it appeared in the source.
    pub full_name: String,
    /// Administrative code from the trailing parentheses, if present.
    pub code: Option<String>,
}

impl RegionName {
    /// Returns true if the area carries an administrative code, i.e. it is
    /// an addressable region rather than an aggregate row.
    pub fn is_addressable(&self) -> bool {
        self.code.is_some()
    }
}

/// One row of the source table: male and female counts per age label.
///
/// The per-sex counts are parallel to `ages`, so both sexes always share the
/// same key set in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRecord {
    #[serde(flatten)]
    pub region: RegionName,
    pub ages: Vec<AgeLabel>,
    pub male: Vec<u64>,
    pub female: Vec<u64>,
}

impl RegionRecord {
    /// Builds a record, rejecting per-sex vectors that do not match the labels.
    pub fn new(
        region: RegionName,
        ages: Vec<AgeLabel>,
        male: Vec<u64>,
        female: Vec<u64>,
    ) -> Result<Self> {
        if male.len() != female.len() {
            return Err(ParseError::MismatchedAgeColumns {
                male: male.len(),
                female: female.len(),
            });
        }
        if male.len() != ages.len() {
            return Err(ParseError::MismatchedAgeLabels {
                labels: ages.len(),
                counts: male.len(),
            });
        }
        // Every per-age and per-sex sum is bounded by this one.
        let total = male
            .iter()
            .chain(&female)
            .try_fold(0u64, |acc, &count| acc.checked_add(count));
        if total.is_none() {
            return Err(ParseError::PopulationOverflow {
                region: region.name,
            });
        }
        Ok(Self {
            region,
            ages,
            male,
            female,
        })
    }

    /// Canonical short name.
    pub fn name(&self) -> &str {
        &self.region.name
    }

    pub fn male_by_age(&self) -> impl Iterator<Item = (&AgeLabel, u64)> {
        self.ages.iter().zip(self.male.iter().copied())
    }

    pub fn female_by_age(&self) -> impl Iterator<Item = (&AgeLabel, u64)> {
        self.ages.iter().zip(self.female.iter().copied())
    }

    /// Elementwise male + female counts.
    pub fn combined(&self) -> CombinedVector {
        self.male
            .iter()
            .zip(&self.female)
            .map(|(m, f)| m + f)
            .collect()
    }

    pub fn male_total(&self) -> u64 {
        self.male.iter().sum()
    }

    pub fn female_total(&self) -> u64 {
        self.female.iter().sum()
    }

    pub fn total_population(&self) -> u64 {
        self.male_total() + self.female_total()
    }
}

/// Both-sexes population per age, in source age order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CombinedVector(Vec<u64>);

impl CombinedVector {
    pub fn new(counts: Vec<u64>) -> Self {
        Self(counts)
    }

    pub fn counts(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all entries.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Counts as floating point, for the similarity metrics.
    pub fn to_f64(&self) -> Vec<f64> {
        self.0.iter().map(|&v| v as f64).collect()
    }
}

impl From<Vec<u64>> for CombinedVector {
    fn from(value: Vec<u64>) -> Self {
        Self(value)
    }
}

impl FromIterator<u64> for CombinedVector {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A region with only both-sexes counts, from a combined-total export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalRecord {
    #[serde(flatten)]
    pub region: RegionName,
    pub total: CombinedVector,
}

/// Anything the similarity scan can compare: a named age vector.
pub trait AgeProfile {
    /// Canonical short name, used to exclude the query region.
    fn name(&self) -> &str;

    /// Both-sexes counts in source age order.
    fn combined(&self) -> CombinedVector;
}

impl AgeProfile for RegionRecord {
    fn name(&self) -> &str {
        &self.region.name
    }

    fn combined(&self) -> CombinedVector {
        RegionRecord::combined(self)
    }
}

impl AgeProfile for TotalRecord {
    fn name(&self) -> &str {
        &self.region.name
    }

    fn combined(&self) -> CombinedVector {
        self.total.clone()
    }
}

/// All regions extracted from one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSet {
    /// Age labels shared by every record, in header order.
    pub ages: Vec<AgeLabel>,
    /// Addressable regions, in source row order.
    pub records: Vec<RegionRecord>,
    /// First data row of the table, usually the city-wide total.
    pub summary: Option<RegionRecord>,
}

impl RegionSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionRecord> {
        self.records.iter()
    }

    /// Canonical names in source order.
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(RegionRecord::name).collect()
    }

    /// First record whose canonical name equals `name` (surrounding
    /// whitespace ignored).
    pub fn find(&self, name: &str) -> Option<&RegionRecord> {
        let name = name.trim();
        self.records.iter().find(|r| r.name() == name)
    }

    /// Like [`RegionSet::find`], but a miss is an error.
    pub fn get(&self, name: &str) -> std::result::Result<&RegionRecord, RegionNotFound> {
        self.find(name).ok_or_else(|| RegionNotFound {
            name: name.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(name: &str, code: Option<&str>) -> RegionName {
        RegionName {
            name: name.to_string(),
            full_name: match code {
                Some(code) => format!("{name}({code})"),
                None => name.to_string(),
            },
            code: code.map(str::to_string),
        }
    }

    fn ages() -> Vec<AgeLabel> {
        vec!["0세".into(), "1세".into(), "100세 이상".into()]
    }

    #[test]
    fn test_record_rejects_mismatched_lengths() {
        let result = RegionRecord::new(
            region("종로구", Some("1111000000")),
            ages(),
            vec![1, 2, 3],
            vec![1, 2],
        );
        assert_eq!(
            result,
            Err(ParseError::MismatchedAgeColumns { male: 3, female: 2 })
        );
    }

    #[test]
    fn test_record_rejects_label_count_mismatch() {
        let result = RegionRecord::new(
            region("종로구", Some("1111000000")),
            ages(),
            vec![1, 2],
            vec![3, 4],
        );
        assert_eq!(
            result,
            Err(ParseError::MismatchedAgeLabels { labels: 3, counts: 2 })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "2 counts per sex for 3 age labels"
        );
    }

    #[test]
    fn test_record_rejects_overflowing_population() {
        let result = RegionRecord::new(
            region("가", Some("1")),
            ages(),
            vec![u64::MAX, 0, 0],
            vec![1, 0, 0],
        );
        assert_eq!(
            result,
            Err(ParseError::PopulationOverflow {
                region: "가".to_string()
            })
        );
    }

    #[test]
    fn test_combined_and_totals() {
        let record = RegionRecord::new(
            region("종로구", Some("1111000000")),
            ages(),
            vec![1, 2, 3],
            vec![4, 5, 6],
        )
        .unwrap();
        assert_eq!(record.combined().counts(), &[5, 7, 9]);
        assert_eq!(record.male_total(), 6);
        assert_eq!(record.female_total(), 15);
        assert_eq!(record.total_population(), 21);

        let female: Vec<_> = record.female_by_age().collect();
        assert_eq!(female[2], (&AgeLabel::from("100세 이상"), 6));
    }

    #[test]
    fn test_region_set_lookup() {
        let record = RegionRecord::new(
            region("중구", Some("1114000000")),
            ages(),
            vec![0, 0, 0],
            vec![0, 0, 0],
        )
        .unwrap();
        let set = RegionSet {
            ages: ages(),
            records: vec![record],
            summary: None,
        };
        assert_eq!(set.names(), vec!["중구"]);
        assert!(set.find(" 중구 ").is_some());
        assert_eq!(
            set.get("용산구").unwrap_err(),
            RegionNotFound {
                name: "용산구".to_string()
            }
        );
    }

    #[test]
    fn test_region_name_addressable() {
        assert!(region("종로구", Some("1111000000")).is_addressable());
        assert!(!region("서울특별시", None).is_addressable());
    }
}
