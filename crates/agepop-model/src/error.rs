use thiserror::Error;

/// A count cell or age label could not be converted to a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A population cell is not a non-negative integer after cleaning.
    #[error("invalid count '{value}' in column '{field}'")]
    InvalidCount { field: String, value: String },

    /// An age label has no numeric part.
    #[error("invalid age label '{label}'")]
    InvalidAgeLabel { label: String },

    /// Male and female age column sets have different lengths.
    #[error("age columns do not align: {male} male columns vs {female} female columns")]
    MismatchedAgeColumns { male: usize, female: usize },

    /// Per-sex vectors do not have one count per age label.
    #[error("{counts} counts per sex for {labels} age labels")]
    MismatchedAgeLabels { labels: usize, counts: usize },

    /// A region's population does not fit in a 64-bit count.
    #[error("population of '{region}' overflows")]
    PopulationOverflow { region: String },
}

/// A requested region has no matching record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("region not found: {name}")]
pub struct RegionNotFound {
    pub name: String,
}

pub type Result<T> = std::result::Result<T, ParseError>;
