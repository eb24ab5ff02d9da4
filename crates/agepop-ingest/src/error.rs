//! Error types for population table ingestion.

use std::path::PathBuf;

use agepop_model::{ParseError, RegionNotFound};
use thiserror::Error;

/// Errors that can occur while loading a table or extracting regions from it.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file too large: {path} ({size} bytes, max {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Decoding Errors ===
    /// Bytes are not valid in the selected encoding.
    #[error("{origin} is not valid {encoding}")]
    Decode {
        origin: String,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {origin}: {message}")]
    Csv { origin: String, message: String },

    /// CSV has no header row.
    #[error("CSV is empty: {origin}")]
    EmptyTable { origin: String },

    // === Extraction Errors ===
    /// Required column not found in the header.
    #[error("required column '{column}' not found")]
    MissingColumn { column: String },

    /// No column matched the age and sex markers.
    #[error("no age columns matching '{age_marker}' and '{sex_marker}'")]
    NoAgeColumns {
        age_marker: String,
        sex_marker: String,
    },

    /// A cell or label could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Requested region has no row.
    #[error(transparent)]
    RegionNotFound(#[from] RegionNotFound),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
