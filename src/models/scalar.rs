//! Timestamp and date scalars with the provider's format fallbacks.
//!
//! The provider is inconsistent about how it encodes instants: most
//! endpoints use RFC 3339, some use a bare `YYYY-MM-DD HH:MM:SS`, a few
//! legacy ones emit RFC 1123 or a Unix epoch. Fields typed as [`Timestamp`]
//! or [`Date`] accept all of them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Layout of the provider's space-separated timestamps, always UTC.
const SPACED_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

/// Layout of plain calendar dates.
const PLAIN_DATE: &str = "%Y-%m-%d";

/// A scalar string matched none of the accepted layouts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScalarError {
    /// Not a recognizable timestamp.
    #[error("unrecognized timestamp '{0}'")]
    Timestamp(String),

    /// Not a recognizable date.
    #[error("unrecognized date '{0}'")]
    Date(String),
}

/// Which layout a [`Timestamp`] was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// RFC 3339, fractional seconds optional
    Rfc3339,
    /// `YYYY-MM-DD HH:MM:SS`, interpreted as UTC
    Spaced,
    /// RFC 1123 / RFC 2822
    Rfc1123,
    /// Unix epoch seconds
    UnixSeconds,
}

/// An instant in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Parses `s`, trying each layout in order and keeping the first match.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::Timestamp`] if no layout matches.
    pub fn parse(s: &str) -> Result<Self, ScalarError> {
        Self::parse_with_format(s).map(|(ts, _)| ts)
    }

    /// Like [`parse`](Self::parse) but also reports the matching layout.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::Timestamp`] if no layout matches.
    pub fn parse_with_format(s: &str) -> Result<(Self, TimestampFormat), ScalarError> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok((Self(dt.with_timezone(&Utc)), TimestampFormat::Rfc3339));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, SPACED_DATETIME) {
            return Ok((Self(naive.and_utc()), TimestampFormat::Spaced));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
            return Ok((Self(dt.with_timezone(&Utc)), TimestampFormat::Rfc1123));
        }
        if let Some(ts) = s.parse::<i64>().ok().and_then(Self::from_unix_seconds) {
            return Ok((ts, TimestampFormat::UnixSeconds));
        }
        Err(ScalarError::Timestamp(s.to_string()))
    }

    /// Builds a timestamp from Unix seconds; `None` if out of range.
    #[must_use]
    pub fn from_unix_seconds(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(Self)
    }

    /// Returns the wrapped instant.
    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Unwraps into the inner instant.
    #[must_use]
    pub const fn into_inner(self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl FromStr for Timestamp {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an RFC 3339, 'YYYY-MM-DD HH:MM:SS', RFC 1123 or Unix epoch timestamp")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Timestamp::parse(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Timestamp::from_unix_seconds(v)
            .ok_or_else(|| E::custom(format!("epoch seconds out of range: {v}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let secs = i64::try_from(v)
            .map_err(|_| E::custom(format!("epoch seconds out of range: {v}")))?;
        self.visit_i64(secs)
    }
}

/// A calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Parses an RFC 3339 instant (keeping its local date) or `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::Date`] if neither layout matches.
    pub fn parse(s: &str) -> Result<Self, ScalarError> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.date_naive()));
        }
        NaiveDate::parse_from_str(s, PLAIN_DATE)
            .map(Self)
            .map_err(|_| ScalarError::Date(s.to_string()))
    }

    /// Returns the wrapped date.
    #[must_use]
    pub const fn as_naive(&self) -> &NaiveDate {
        &self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl FromStr for Date {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(PLAIN_DATE))
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
