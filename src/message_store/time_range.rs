use chrono::{Local, NaiveDateTime, TimeZone};

use crate::message_store::error::{Result, StoreError};

/// Textual datetime format accepted for window bounds: second precision, no timezone
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// What a range query does when a bound cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeParsePolicy {
    /// Treat the query as matching nothing and return an empty result
    #[default]
    Lenient,
    /// Reject the query with `StoreError::MalformedTimeRange`
    Strict,
}

/// Inclusive score window `[start, end]` in seconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: i64,
    pub end: i64,
}

impl TimeWindow {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Parse both bounds from `YYYY-MM-DDTHH:MM:SS` strings in local time
    ///
    /// # Examples
    ///
    /// ```
    /// use message_timeline::message_store::TimeWindow;
    ///
    /// let window = TimeWindow::parse("2024-03-01T10:00:00", "2024-03-01T11:00:00").unwrap();
    /// assert_eq!(window.end - window.start, 3600);
    ///
    /// assert!(TimeWindow::parse("2024-03-01 10:00:00", "2024-03-01T11:00:00").is_err());
    /// ```
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        match (parse_timestamp(start), parse_timestamp(end)) {
            (Some(start_ts), Some(end_ts)) => Ok(Self::new(start_ts, end_ts)),
            _ => Err(StoreError::MalformedTimeRange {
                start: start.to_string(),
                end: end.to_string(),
            }),
        }
    }

    #[cfg(test)]
    pub fn contains(&self, score: i64) -> bool {
        self.start <= score && score <= self.end
    }

    /// An inverted window matches nothing
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Parse a naive local datetime into seconds since the Unix epoch.
///
/// Returns None on a format mismatch or for a local time skipped by a DST
/// transition. An ambiguous local time resolves to its earliest instant.
pub fn parse_timestamp(value: &str) -> Option<i64> {
    let naive = NaiveDateTime::parse_from_str(value, TIME_FORMAT).ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp())
}

/// Render seconds since the Unix epoch in the window bound format, in local time
#[cfg(test)]
pub fn format_timestamp(timestamp: i64) -> Option<String> {
    Local
        .timestamp_opt(timestamp, 0)
        .earliest()
        .map(|dt| dt.format(TIME_FORMAT).to_string())
}
