//! Text encoding selection and decoding.

use std::fmt;

use encoding_rs::{EUC_KR, Encoding, UTF_8};
use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Encoding of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableEncoding {
    /// BOM if present, else UTF-8 if the bytes are valid UTF-8, else CP949.
    #[default]
    Auto,
    /// Korean legacy code page (EUC-KR / CP949).
    Cp949,
    /// UTF-8, with or without BOM.
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
}

impl fmt::Display for TableEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TableEncoding::Auto => "auto",
            TableEncoding::Cp949 => "cp949",
            TableEncoding::Utf8 => "utf-8",
        })
    }
}

/// Picks the concrete encoding for `bytes` and the number of BOM bytes to skip.
pub fn detect_encoding(bytes: &[u8], requested: TableEncoding) -> (&'static Encoding, usize) {
    match requested {
        TableEncoding::Cp949 => (EUC_KR, 0),
        TableEncoding::Utf8 => {
            let bom = if bytes.starts_with(b"\xEF\xBB\xBF") { 3 } else { 0 };
            (UTF_8, bom)
        }
        TableEncoding::Auto => {
            if let Some((encoding, bom)) = Encoding::for_bom(bytes) {
                return (encoding, bom);
            }
            if std::str::from_utf8(bytes).is_ok() {
                (UTF_8, 0)
            } else {
                (EUC_KR, 0)
            }
        }
    }
}

/// Decodes `bytes` to a string, failing on malformed sequences.
///
/// `origin` names the input in error messages.
pub fn decode_bytes(bytes: &[u8], requested: TableEncoding, origin: &str) -> Result<String> {
    let (encoding, bom) = detect_encoding(bytes, requested);
    let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom..]);
    if had_errors {
        return Err(IngestError::Decode {
            origin: origin.to_string(),
            encoding: encoding.name(),
        });
    }
    tracing::debug!(
        origin,
        encoding = encoding.name(),
        bytes = bytes.len(),
        "decoded input"
    );
    Ok(text.into_owned())
}
