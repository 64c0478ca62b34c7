//! The creation time encoded in a snowflake.
//!
//! The [`Timestamp`] newtype wraps `time::OffsetDateTime`, or `chrono::DateTime<Utc>` if the
//! `chrono` feature is enabled.
//!
//! # Formatting
//! ```
//! # use sticker_model::model::id::StickerId;
//! # use sticker_model::model::Timestamp;
//! #
//! let timestamp: Timestamp = StickerId::new(175928847299117063).created_at();
//! assert_eq!(timestamp.unix_timestamp(), 1462015105);
//! assert_eq!(timestamp.to_string(), "2016-04-30T11:18:25.796Z");
//! ```

use std::fmt;

#[cfg(feature = "chrono")]
use chrono::{DateTime, Duration, SecondsFormat, Utc};
#[cfg(not(feature = "chrono"))]
use dep_time::{format_description::well_known::Rfc3339, Duration, OffsetDateTime};

use crate::constants::DISCORD_EPOCH;

/// Representation of a Unix timestamp, always in UTC.
///
/// The struct implements the `std::fmt::Display` trait to format the underlying type as an RFC
/// 3339 date and time string such as `2016-04-30T11:18:25.796Z`.
#[cfg(feature = "chrono")]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Timestamp(DateTime<Utc>);

/// Representation of a Unix timestamp, always in UTC.
///
/// The struct implements the `std::fmt::Display` trait to format the underlying type as an RFC
/// 3339 date and time string such as `2016-04-30T11:18:25.796Z`.
#[cfg(not(feature = "chrono"))]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    /// Decodes the creation time from the top 42 bits of a snowflake, in milliseconds since
    /// [`DISCORD_EPOCH`].
    pub(crate) fn from_discord_id(id: u64) -> Timestamp {
        // `(u64::MAX >> 22) + DISCORD_EPOCH` = 5818116911103 = "Wed May 15 2154 07:35:11 GMT+0000"
        let offset = Duration::milliseconds(((id >> 22) + DISCORD_EPOCH) as i64);

        #[cfg(feature = "chrono")]
        let timestamp = DateTime::<Utc>::default() + offset;
        #[cfg(not(feature = "chrono"))]
        let timestamp = OffsetDateTime::UNIX_EPOCH + offset;

        Self(timestamp)
    }

    /// Returns the number of non-leap seconds since January 1, 1970 0:00:00 UTC
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn unix_timestamp(&self) -> i64 {
        self.0.timestamp()
    }

    /// Returns the number of non-leap seconds since January 1, 1970 0:00:00 UTC
    #[cfg(not(feature = "chrono"))]
    #[must_use]
    pub fn unix_timestamp(&self) -> i64 {
        self.0.unix_timestamp()
    }
}

impl fmt::Display for Timestamp {
    #[cfg(feature = "chrono")]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    #[cfg(not(feature = "chrono"))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}
