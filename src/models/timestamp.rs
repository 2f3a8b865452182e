//! Specifies how to (de)serialize the backend's ISO 8601 timestamps.
//!
//! The backend sends date-times with an offset (`2026-02-15T10:00:00Z`) or,
//! for columns without a timezone, naive date-times (`2026-02-15T10:00:00.123456`).
//! Naive date-times are interpreted as UTC. Timestamps are always serialized as RFC 3339.

use serde::{Deserialize, Deserializer, Serializer};
use time::{
    OffsetDateTime, PrimitiveDateTime, format_description::BorrowedFormatItem,
    format_description::well_known::Rfc3339, macros::format_description,
};

const NAIVE_DATE_TIME_FORMAT: &[BorrowedFormatItem] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
);

pub fn serialize<S>(dt: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let formatted = dt.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&formatted)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(serde::de::Error::custom)
}

/// Parse an RFC 3339 date-time, falling back to a naive date-time in UTC.
pub fn parse(s: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(s, &Rfc3339).or_else(|rfc3339_error| {
        PrimitiveDateTime::parse(s, NAIVE_DATE_TIME_FORMAT)
            .map(PrimitiveDateTime::assume_utc)
            .map_err(|_| rfc3339_error)
    })
}
