//! Population table ingestion.
//!
//! This crate turns a resident population export (CSV, usually CP949) into
//! per-region male and female age vectors.
//!
//! # Features
//!
//! - **CSV Loading**: Decode CP949/UTF-8 input from a path or any reader
//! - **Column Selection**: Find per-sex age columns by naming convention
//! - **Region Resolution**: Strip administrative codes, drop aggregate rows
//! - **Extraction**: Build [`agepop_model::RegionSet`] with parsed counts
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use agepop_ingest::{ColumnConvention, TableEncoding, extract_regions, read_table};
//!
//! let table = read_table(Path::new("population.csv"), TableEncoding::Cp949)?;
//! let regions = extract_regions(&table, &ColumnConvention::default())?;
//! let jongno = regions.get("종로구")?;
//! ```

mod convention;
mod csv;
mod error;
mod extract;
mod region;
mod values;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    MAX_CSV_FILE_SIZE, Table, TableEncoding, check_file_size, check_file_size_with_limit,
    decode_bytes, detect_encoding, parse_table, read_table, read_table_from_reader,
    read_table_from_reader_with_limit,
};

// === Column Convention ===
pub use convention::{AgeColumns, ColumnConvention};

// === Extraction ===
pub use extract::{extract_region, extract_regions, extract_totals};
pub use region::{canonical_region_name, parse_region_name};
pub use values::parse_count;
