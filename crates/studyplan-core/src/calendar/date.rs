//! Canonical `YYYY-MM-DD` date handling.
//!
//! Dates travel as zero-padded ISO strings but are held as [`NaiveDate`], so
//! ordering is chronological by construction rather than by string convention.

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Parse a strict `YYYY-MM-DD` string.
///
/// Unlike `NaiveDate::from_str`, unpadded forms such as `2025-5-6` are rejected.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    let bytes = s.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return Err(ValidationError::invalid(
            "date",
            format!("'{s}' is not in YYYY-MM-DD form"),
        ));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| ValidationError::invalid("date", format!("'{s}': {e}")))
}

/// The canonical key used for event dates, e.g. `2025-05-06`.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Short display label used by the detail panel and sidebar, e.g. `Tue, May 6`.
pub fn display_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Serde adapter enforcing [`parse_date`] on input.
pub mod canonical {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::date_key(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_dates() {
        let d = parse_date("2025-05-06").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 5, 6).unwrap());
    }

    #[test]
    fn rejects_unpadded_and_garbage() {
        assert!(parse_date("2025-5-6").is_err());
        assert!(parse_date("2025/05/06").is_err());
        assert!(parse_date("May 6, 2025").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn rejects_impossible_days() {
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("2025-04-31").is_err());
        assert!(parse_date("2024-02-29").is_ok());
    }

    #[test]
    fn key_is_zero_padded() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        assert_eq!(date_key(d), "2025-01-03");
    }

    #[test]
    fn display_label_uses_short_names() {
        let d = NaiveDate::from_ymd_opt(2025, 5, 6).unwrap();
        assert_eq!(display_label(d), "Tue, May 6");
    }
}
