//! Error types for region analysis.

use agepop_model::{ParseError, RegionNotFound};
use thiserror::Error;

/// Errors that can occur while analyzing a region.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The selected region has no record.
    #[error(transparent)]
    RegionNotFound(#[from] RegionNotFound),

    /// An age label could not be bucketed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
