//! CSV loading from files and readers.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::{IngestError, Result};

use super::encoding::{TableEncoding, decode_bytes};
use super::table::{Table, normalize_header};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

fn io_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Reads a CSV file into a [`Table`].
pub fn read_table(path: &Path, encoding: TableEncoding) -> Result<Table> {
    check_file_size(path)?;
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    let origin = path.display().to_string();
    let table = parse_table(&bytes, encoding, &origin)?;
    tracing::info!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "loaded table"
    );
    Ok(table)
}

/// Reads a CSV from any reader (an upload, stdin, a fetched body).
///
/// `origin` names the input in error messages. Input past
/// [`MAX_CSV_FILE_SIZE`] is rejected, as for files.
pub fn read_table_from_reader<R: Read>(
    reader: R,
    encoding: TableEncoding,
    origin: &str,
) -> Result<Table> {
    read_table_from_reader_with_limit(reader, encoding, origin, MAX_CSV_FILE_SIZE)
}

/// Reads a CSV from a reader, failing once more than `max_size` bytes arrive.
pub fn read_table_from_reader_with_limit<R: Read>(
    reader: R,
    encoding: TableEncoding,
    origin: &str,
    max_size: u64,
) -> Result<Table> {
    let mut bytes = Vec::new();
    reader
        .take(max_size.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|e| IngestError::FileRead {
            path: origin.into(),
            source: e,
        })?;
    if bytes.len() as u64 > max_size {
        return Err(IngestError::FileTooLarge {
            path: origin.into(),
            size: bytes.len() as u64,
            max_size,
        });
    }
    parse_table(&bytes, encoding, origin)
}

/// Decodes and parses raw CSV bytes.
pub fn parse_table(bytes: &[u8], encoding: TableEncoding, origin: &str) -> Result<Table> {
    let text = decode_bytes(bytes, encoding, origin)?;
    let csv_error = |e: csv::Error| IngestError::Csv {
        origin: origin.to_string(),
        message: e.to_string(),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();

    if columns.is_empty() || columns.iter().all(String::is_empty) {
        return Err(IngestError::EmptyTable {
            origin: origin.to_string(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(columns, rows))
}
