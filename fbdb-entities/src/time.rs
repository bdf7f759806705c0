use std::{cmp::Ordering, str::FromStr};

use thiserror::Error;
use time::{
    format_description::well_known::{Iso8601, Rfc3339},
    macros::format_description,
    Date, OffsetDateTime, PrimitiveDateTime,
};

/// Point in time as declared by the submitting client.
///
/// The original text is preserved verbatim and returned unchanged,
/// while comparisons are based on the parsed instant. Accepted are
/// ISO 8601 date-times (RFC 3339 included) and plain calendar dates
/// (`YYYY-MM-DD`). Date-times without an offset and plain dates are
/// interpreted as UTC, the latter at midnight.
#[derive(Debug, Clone)]
pub struct SubmittedAt {
    text: String,
    instant: OffsetDateTime,
}

#[derive(Debug, Error)]
#[error("Invalid timestamp: '{0}'")]
pub struct SubmittedAtParseError(String);

impl SubmittedAt {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Unix timestamp in **milli**seconds
    pub fn unix_timestamp_millis(&self) -> i64 {
        (self.instant.unix_timestamp_nanos() / 1_000_000) as i64
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl FromStr for SubmittedAt {
    type Err = SubmittedAtParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let instant = OffsetDateTime::parse(s, &Rfc3339)
            .or_else(|_| OffsetDateTime::parse(s, &Iso8601::DEFAULT))
            .or_else(|_| PrimitiveDateTime::parse(s, &Iso8601::DEFAULT).map(|dt| dt.assume_utc()))
            .or_else(|_| {
                Date::parse(s, format_description!("[year]-[month]-[day]"))
                    .map(|date| date.midnight().assume_utc())
            })
            .map_err(|_| SubmittedAtParseError(s.to_owned()))?;
        Ok(Self {
            text: s.to_owned(),
            instant,
        })
    }
}

impl PartialEq for SubmittedAt {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for SubmittedAt {}

impl PartialOrd for SubmittedAt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SubmittedAt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}
