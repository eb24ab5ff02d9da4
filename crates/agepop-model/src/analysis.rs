//! Result types produced by the analysis pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::age::AgeLabel;
use crate::region::CombinedVector;

/// Similarity measure used when searching for the closest region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Cosine similarity of the raw age vectors; higher is closer.
    Cosine,
    /// Age-proportion distance plus relative population-size distance;
    /// lower is closer.
    #[default]
    Hybrid,
}

impl Metric {
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Cosine => "cosine",
            Metric::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Units of a per-age distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// Absolute head counts.
    #[default]
    Count,
    /// Percent of the region's total population (both sexes).
    Percent,
}

/// Closest candidate found by the similarity scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub matched_region_name: String,
    pub matched_vector: CombinedVector,
    pub score: f64,
    pub metric: Metric,
}

/// A named age range: `min_age <= age < max_age`, either bound optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBucket {
    pub name: String,
    #[serde(default)]
    pub min_age: Option<u32>,
    #[serde(default)]
    pub max_age: Option<u32>,
}

impl AgeBucket {
    pub fn new(name: impl Into<String>, min_age: Option<u32>, max_age: Option<u32>) -> Self {
        Self {
            name: name.into(),
            min_age,
            max_age,
        }
    }

    pub fn contains(&self, age: u32) -> bool {
        self.min_age.is_none_or(|min| age >= min) && self.max_age.is_none_or(|max| age < max)
    }

    /// Under 20, youth (20-39), middle-aged (40-64), elderly (65+).
    pub fn defaults() -> Vec<AgeBucket> {
        vec![
            AgeBucket::new("under 20", None, Some(20)),
            AgeBucket::new("youth", Some(20), Some(40)),
            AgeBucket::new("middle-aged", Some(40), Some(65)),
            AgeBucket::new("elderly", Some(65), None),
        ]
    }
}

/// Population of one bucket and its share of the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketShare {
    pub name: String,
    pub population: u64,
    /// Percent of total population, rounded to 2 decimal places.
    pub percent: f64,
}

/// Per-sex series for one region, ready for a bar or pyramid chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeDistribution {
    pub region: String,
    pub scale: Scale,
    pub ages: Vec<AgeLabel>,
    pub male: Vec<f64>,
    pub female: Vec<f64>,
    pub total_population: u64,
}

/// Everything computed for one selected region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionReport {
    pub region: String,
    pub distribution: AgeDistribution,
    pub buckets: Vec<BucketShare>,
    /// `None` when no candidate was eligible.
    pub most_similar: Option<SimilarityResult>,
}
