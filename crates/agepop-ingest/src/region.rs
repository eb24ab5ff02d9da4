//! Administrative-area name resolution.

use std::sync::LazyLock;

use agepop_model::RegionName;
use regex::Regex;

static CODE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\((\d+)\)\s*$").expect("valid administrative code regex")
});

/// Splits an area string such as `"종로구(1111000000)"` into its parts.
///
/// The canonical name is everything before the first `(`, trimmed. Only a
/// trailing parenthesised numeric code makes the area addressable; strings
/// without one are aggregate rows.
pub fn parse_region_name(raw: &str) -> RegionName {
    let name = raw.split('(').next().unwrap_or(raw).trim().to_string();
    let code = CODE_SUFFIX
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());
    RegionName {
        name,
        full_name: raw.trim().to_string(),
        code,
    }
}

/// Canonical short name of an area string.
pub fn canonical_region_name(raw: &str) -> String {
    parse_region_name(raw).name
}
