// Time utility functions

use anyhow::{anyhow, Result};
use chrono::NaiveTime;

/// Parses a textual time of day into a `NaiveTime`.
///
/// Accepts the schedule source's 12-hour form ("6:00:00 AM", "1:30 PM")
/// and plain 24-hour forms ("06:00", "13:30:00").
pub fn parse_time_of_day(text: &str) -> Result<NaiveTime> {
    let trimmed = text.trim();
    NaiveTime::parse_from_str(trimmed, "%I:%M:%S %p")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%I:%M %p"))
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| anyhow!("Unrecognized time of day: '{}'", text))
}
