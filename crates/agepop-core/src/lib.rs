//! Region analysis over extracted age vectors.
//!
//! - [`find_most_similar`]: nearest region under a [`SimilarityMetric`]
//! - [`bucket_shares`]: population share of named age ranges
//! - [`age_distribution`]: per-sex chart series in counts or percent
//! - [`analyze_region`]: all of the above for one selected region

mod buckets;
mod distribution;
mod error;
mod pipeline;
mod similarity;

pub use buckets::{bucket_shares, numeric_ages, percent_of, round2};
pub use distribution::age_distribution;
pub use error::{AnalysisError, Result};
pub use pipeline::{AnalysisOptions, analyze_region};
pub use similarity::{
    Cosine, Hybrid, HybridDistance, SimilarityMetric, cosine_similarity, find_most_similar,
    hybrid_distance,
};
