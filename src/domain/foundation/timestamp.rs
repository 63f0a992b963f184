//! Timestamp value object for immutable points in time.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Serialize, Serializer};

/// Immutable point in time, always UTC.
///
/// Serializes as an ISO 8601 string with millisecond precision
/// (`2026-01-15T09:30:00.000Z`), the format the checkout UI expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Creates a timestamp from Unix seconds.
    ///
    /// Returns `None` if the value is outside chrono's representable range.
    pub fn from_unix_secs(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Unix seconds for this instant.
    pub fn unix_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Formats as ISO 8601 with millisecond precision and a `Z` suffix.
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso8601_uses_millis_and_z_suffix() {
        let ts = Timestamp::from_unix_secs(1_704_067_200).unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn serializes_as_iso_string() {
        let ts = Timestamp::from_unix_secs(1_704_067_200).unwrap();
        let json = serde_json::to_value(ts).unwrap();
        assert_eq!(json, serde_json::json!("2024-01-01T00:00:00.000Z"));
    }

    #[test]
    fn unix_secs_round_trips() {
        let ts = Timestamp::from_unix_secs(1_700_000_000).unwrap();
        assert_eq!(ts.unix_secs(), 1_700_000_000);
    }

    #[test]
    fn out_of_range_unix_secs_is_rejected() {
        assert!(Timestamp::from_unix_secs(i64::MAX).is_none());
    }

    #[test]
    fn now_is_after_fixed_past_instant() {
        let past = Timestamp::from_unix_secs(1_600_000_000).unwrap();
        assert!(Timestamp::now() > past);
    }
}
