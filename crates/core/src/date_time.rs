//! UTC date and time with a canonical textual form.
//!
//! Serialized as RFC3339; the canonical form used for hashing is
//! always normalized to UTC with nanosecond precision so that the
//! same instant written with different offsets hashes identically.

use crate::{constants::CANONICAL_TIME_FORMAT, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use time::{
    format_description::{self, well_known::Rfc3339},
    OffsetDateTime, UtcOffset,
};

/// Date and time with canonical formatting support.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Ord, PartialOrd, Eq, PartialEq,
)]
pub struct UtcDateTime(
    #[serde(with = "time::serde::rfc3339")] pub(crate) OffsetDateTime,
);

impl Default for UtcDateTime {
    fn default() -> Self {
        Self(OffsetDateTime::now_utc())
    }
}

impl UtcDateTime {
    /// Create a UTC date time for now.
    pub fn now() -> Self {
        Default::default()
    }

    /// Parse as RFC3339.
    pub fn parse_rfc3339(value: &str) -> Result<Self> {
        Ok(Self(OffsetDateTime::parse(value, &Rfc3339)?))
    }

    /// Convert this date and time to a RFC3339 formatted string.
    pub fn to_rfc3339(&self) -> Result<String> {
        Ok(self.0.format(&Rfc3339)?)
    }

    /// Canonical text used when hashing.
    ///
    /// Always UTC, always nine fractional digits and always
    /// terminated with `Z`.
    pub fn to_canonical(&self) -> Result<String> {
        let format = format_description::parse(CANONICAL_TIME_FORMAT)?;
        Ok(self.0.to_offset(UtcOffset::UTC).format(&format)?)
    }

    /// Offset of the underlying date time.
    pub fn offset(&self) -> UtcOffset {
        self.0.offset()
    }
}

impl fmt::Display for UtcDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_rfc3339() {
            Ok(value) => write!(f, "{}", value),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

impl From<OffsetDateTime> for UtcDateTime {
    fn from(value: OffsetDateTime) -> Self {
        Self(value)
    }
}

impl From<UtcDateTime> for OffsetDateTime {
    fn from(value: UtcDateTime) -> Self {
        value.0
    }
}
