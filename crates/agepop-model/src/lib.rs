pub mod age;
pub mod analysis;
pub mod error;
pub mod region;

pub use age::{AGE_UNIT, AgeLabel, OPEN_ENDED_AGE, OPEN_ENDED_MARKER};
pub use analysis::{
    AgeBucket, AgeDistribution, BucketShare, Metric, RegionReport, Scale, SimilarityResult,
};
pub use error::{ParseError, RegionNotFound, Result};
pub use region::{AgeProfile, CombinedVector, RegionName, RegionRecord, RegionSet, TotalRecord};
