//! Datetime helpers.
//!
//! Account stores write local timestamps as `"%Y-%m-%d %H:%M:%S"`. This module provides:
//! - Splitting such a string into its date and time parts for display
//! - Serde support for `NaiveDateTime` fields:
//!   - Serialization: `NaiveDateTime` -> `"%Y-%m-%d %H:%M:%S"`
//!   - Deserialization: that layout, RFC3339, or Unix timestamp -> `NaiveDateTime`

use chrono::{DateTime, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

/// Storage layout of change timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a timestamp in the storage layout.
#[must_use]
pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time, truncated to whole seconds.
#[must_use]
pub fn now_local() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Splits `"<date> <time>"` on the first space.
///
/// Without a space, the whole string is the date and the time is empty.
#[must_use]
pub fn split_date_time(value: &str) -> (String, String) {
    match value.split_once(' ') {
        Some((date, time)) => (date.to_string(), time.to_string()),
        None => (value.to_string(), String::new()),
    }
}

/// Serializes `NaiveDateTime` in the storage layout.
pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(dt))
}

/// Deserializes `NaiveDateTime` from the storage layout, RFC3339 or a Unix timestamp.
///
/// Unix timestamps are auto-detected as seconds or milliseconds.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TimestampOrString {
        String(String),
        I64(i64),
    }

    match TimestampOrString::deserialize(deserializer)? {
        TimestampOrString::String(s) => parse_timestamp(&s)
            .ok_or_else(|| Error::custom(format!("Invalid timestamp: {s}"))),
        TimestampOrString::I64(ts) => {
            parse_unix_timestamp(ts).ok_or_else(|| Error::custom("Invalid Unix timestamp"))
        }
    }
}

/// Parses the storage layout first, then RFC3339 (converted to local time).
fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
}

/// Parses a Unix timestamp with second/millisecond auto-detection.
fn parse_unix_timestamp(ts: i64) -> Option<NaiveDateTime> {
    // Values larger than 10^11 are interpreted as milliseconds.
    let utc = if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }?;
    Some(utc.with_timezone(&Local).naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_space_only() {
        assert_eq!(
            split_date_time("2024-05-01 12:30:00"),
            ("2024-05-01".to_string(), "12:30:00".to_string())
        );
        assert_eq!(
            split_date_time("2024-05-01 12:30:00 +08"),
            ("2024-05-01".to_string(), "12:30:00 +08".to_string())
        );
    }

    #[test]
    fn split_without_space_keeps_full_date() {
        assert_eq!(
            split_date_time("2024-05-01"),
            ("2024-05-01".to_string(), String::new())
        );
        assert_eq!(split_date_time(""), (String::new(), String::new()));
    }

    #[test]
    fn storage_layout_round_trips() {
        let parsed = parse_timestamp("2024-05-01 08:09:10").unwrap();
        assert_eq!(format_timestamp(&parsed), "2024-05-01 08:09:10");
    }

    #[test]
    fn now_has_no_subsecond_part() {
        assert_eq!(now_local().nanosecond(), 0);
    }
}
