use chrono::{DateTime, SecondsFormat, Utc};

use crate::TimestampError;

/// Textual form of an instant as produced by JavaScript's `Date.toISOString()`
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Parse an ISO-8601 (RFC 3339) timestamp into a UTC instant.
///
/// Offsets other than `Z` are accepted and normalized to UTC.
pub fn parse_session_date(value: &str) -> Result<DateTime<Utc>, TimestampError> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|err| TimestampError::invalid(value, err))
}

/// Render an instant the way `Date.toISOString()` does (UTC, millisecond precision)
pub fn to_iso_string(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter for `DateTime<Utc>` fields stored as `toISOString()` text
pub mod iso_millis {
    use super::{parse_session_date, to_iso_string};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_iso_string(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_session_date(&raw).map_err(serde::de::Error::custom)
    }
}
