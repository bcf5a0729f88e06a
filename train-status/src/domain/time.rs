//! Timestamp handling for upstream train data.
//!
//! The upstream feed reports scheduled and actual times as ISO-8601
//! strings. Most carry an explicit offset, but some omit it; those are
//! read as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Naive formats accepted when the timestamp has no offset.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Error returned when parsing a timestamp fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {value:?}: expected ISO-8601")]
pub struct TimestampError {
    value: String,
}

/// Parse an ISO-8601 timestamp.
///
/// Returns `Ok(None)` for an empty or whitespace-only value: upstream
/// uses empty strings to mean "not known yet". A value without an offset
/// is interpreted as UTC.
///
/// # Examples
///
/// ```
/// use train_status::domain::parse_timestamp;
///
/// let with_offset = parse_timestamp("2024-01-01T05:00:00-05:00").unwrap().unwrap();
/// let naive = parse_timestamp("2024-01-01T10:00:00").unwrap().unwrap();
/// assert_eq!(with_offset, naive);
///
/// assert_eq!(parse_timestamp("").unwrap(), None);
/// assert!(parse_timestamp("yesterday").is_err());
/// ```
pub fn parse_timestamp(s: &str) -> Result<Option<DateTime<Utc>>, TimestampError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }

    // Offsets written without a colon, e.g. "+0000"
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Ok(Some(dt.with_timezone(&Utc)));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(Some(naive.and_utc()));
        }
    }

    Err(TimestampError {
        value: s.to_string(),
    })
}

/// Whole minutes from `scheduled` to `actual`, rounded toward negative infinity.
///
/// A departure one second early is therefore -1 minutes, not 0.
pub fn minutes_between(scheduled: DateTime<Utc>, actual: DateTime<Utc>) -> i64 {
    actual
        .signed_duration_since(scheduled)
        .num_milliseconds()
        .div_euclid(60_000)
}
