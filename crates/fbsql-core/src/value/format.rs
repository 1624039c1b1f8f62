use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

use crate::error::ConversionError;

const TIMESTAMP_OUTPUT: &str = "%Y-%m-%d %H:%M:%S%.6f";
const TIMESTAMP_INPUT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Rendering settings for values, attached to a connection.
///
/// Timestamps are stored as absolute instants; the configured offset only
/// affects how they are written and how zone-less text is read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueFormat {
    time_zone: FixedOffset,
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self::utc()
    }
}

impl ValueFormat {
    /// Renders timestamps in UTC.
    #[must_use]
    pub fn utc() -> Self {
        Self {
            time_zone: Utc.fix(),
        }
    }

    /// Renders timestamps at the given offset.
    #[must_use]
    pub const fn with_time_zone(time_zone: FixedOffset) -> Self {
        Self { time_zone }
    }

    /// Returns the configured offset.
    #[must_use]
    pub const fn time_zone(&self) -> FixedOffset {
        self.time_zone
    }

    /// Formats a timestamp as `YYYY-MM-DD HH:MM:SS.ffffff` in the configured
    /// zone.
    #[must_use]
    pub fn format_timestamp(&self, timestamp: &DateTime<Utc>) -> String {
        timestamp
            .with_timezone(&self.time_zone)
            .format(TIMESTAMP_OUTPUT)
            .to_string()
    }

    /// Parses zone-less timestamp text, interpreting it in the configured
    /// zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a timestamp.
    pub fn parse_timestamp(&self, text: &str) -> Result<DateTime<Utc>, ConversionError> {
        let naive = NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_INPUT)
            .map_err(|e| ConversionError::invalid("DateTime<Utc>", e.to_string()))?;
        self.time_zone
            .from_local_datetime(&naive)
            .single()
            .map(|local| local.with_timezone(&Utc))
            .ok_or_else(|| ConversionError::invalid("DateTime<Utc>", "ambiguous local time"))
    }
}
