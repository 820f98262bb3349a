// Meeting module
// Input records describing one recurring course meeting

use anyhow::{Context, Result};
use chrono::NaiveTime;
use serde::Deserialize;

use crate::utils::time::parse_time_of_day;

/// One meeting record as delivered by the schedule source.
///
/// Times stay textual ("6:00:00 AM") until resolution so that a malformed
/// record surfaces as an error before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MeetingRecord {
    pub subject: String,
    pub start: String,
    pub end: String,
    #[serde(rename = "meetingDays")]
    pub meeting_days: String,
}

/// A meeting record with parsed times, ready for grid generation.
///
/// `meeting_days` is the raw code string (e.g. "TR"); codes outside the
/// known weekday set are carried along and simply never match a grid row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    pub subject: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub meeting_days: String,
}

impl Meeting {
    /// Resolves a raw record, parsing both clock times.
    pub fn from_record(record: &MeetingRecord) -> Result<Self> {
        let start = parse_time_of_day(&record.start)
            .with_context(|| format!("Invalid start time for '{}'", record.subject))?;
        let end = parse_time_of_day(&record.end)
            .with_context(|| format!("Invalid end time for '{}'", record.subject))?;

        Ok(Self {
            subject: record.subject.clone(),
            start,
            end,
            meeting_days: record.meeting_days.clone(),
        })
    }
}

/// Resolves every record, failing on the first malformed one.
pub fn resolve_records(records: &[MeetingRecord]) -> Result<Vec<Meeting>> {
    records.iter().map(Meeting::from_record).collect()
}
