//! Count cell parsing.

use agepop_model::ParseError;

/// Parses a population cell such as `"1,234"`.
///
/// Thousands separators and surrounding whitespace are removed; a blank or
/// missing cell is zero. A single cell holds at most `u32::MAX` people, so
/// sums over a row cannot overflow. `field` names the column in the error.
pub fn parse_count(field: &str, value: Option<&str>) -> Result<u64, ParseError> {
    let cleaned: String = value
        .unwrap_or("")
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Ok(0);
    }

    cleaned
        .parse::<u32>()
        .map(u64::from)
        .map_err(|_| ParseError::InvalidCount {
            field: field.to_string(),
            value: value.unwrap_or("").to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_thousands_separator() {
        assert_eq!(parse_count("c", Some("1,234")), Ok(1234));
        assert_eq!(parse_count("c", Some("1,234,567")), Ok(1_234_567));
    }

    #[test]
    fn test_blank_and_missing() {
        assert_eq!(parse_count("c", Some("")), Ok(0));
        assert_eq!(parse_count("c", Some("   ")), Ok(0));
        assert_eq!(parse_count("c", None), Ok(0));
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            parse_count("2025년04월_남_0세", Some("12명")),
            Err(ParseError::InvalidCount {
                field: "2025년04월_남_0세".to_string(),
                value: "12명".to_string(),
            })
        );
        assert!(parse_count("c", Some("-5")).is_err());
        assert!(parse_count("c", Some("1.5")).is_err());
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(parse_count("c", Some("4,294,967,295")), Ok(4_294_967_295));
        assert!(parse_count("c", Some("4294967296")).is_err());
        assert!(parse_count("c", Some("18446744073709551615")).is_err());
    }

    proptest! {
        #[test]
        fn clean_integers_parse_to_themselves(n in any::<u32>()) {
            let text = n.to_string();
            let once = parse_count("c", Some(&text)).unwrap();
            prop_assert_eq!(once, u64::from(n));
            let again = parse_count("c", Some(&once.to_string())).unwrap();
            prop_assert_eq!(again, once);
        }

        #[test]
        fn separators_are_ignored(n in 0u64..=u64::from(u32::MAX)) {
            let plain = n.to_string();
            let mut grouped = String::new();
            for (i, c) in plain.chars().enumerate() {
                if i > 0 && (plain.len() - i) % 3 == 0 {
                    grouped.push(',');
                }
                grouped.push(c);
            }
            prop_assert_eq!(parse_count("c", Some(&grouped)).unwrap(), n);
        }
    }
}
