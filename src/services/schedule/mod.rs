// Schedule source service
// Supplies meeting records to the generator

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::meeting::MeetingRecord;

/// Anything that can produce the meeting records for one schedule run.
///
/// The production source is a JSON export of the student-information
/// system's schedule; tests and the no-argument case use the empty source.
pub trait ScheduleSource {
    fn fetch(&self) -> Result<Vec<MeetingRecord>>;
}

/// Reads meeting records from a JSON file holding an array of
/// `{subject, start, end, meetingDays}` objects.
pub struct JsonScheduleSource {
    path: PathBuf,
}

impl JsonScheduleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScheduleSource for JsonScheduleSource {
    fn fetch(&self) -> Result<Vec<MeetingRecord>> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read schedule file {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse schedule file {}", self.path.display()))
    }
}

/// Source used when no schedule is supplied: yields no records, so the
/// grid comes out as the bare base pattern.
pub struct EmptyScheduleSource;

impl ScheduleSource for EmptyScheduleSource {
    fn fetch(&self) -> Result<Vec<MeetingRecord>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_json_source_reads_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"subject": "Physics", "start": "6:00:00 AM", "end": "10:00:00 AM", "meetingDays": "TR"}}]"#
        )
        .unwrap();

        let source = JsonScheduleSource::new(file.path());
        let records = source.fetch().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subject, "Physics");
        assert_eq!(records[0].meeting_days, "TR");
    }

    #[test]
    fn test_json_source_missing_file() {
        let source = JsonScheduleSource::new("/nonexistent/schedule.json");
        let err = source.fetch().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read schedule file"));
    }

    #[test]
    fn test_json_source_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let source = JsonScheduleSource::new(file.path());
        let err = source.fetch().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse schedule file"));
    }

    #[test]
    fn test_empty_source_yields_no_records() {
        assert!(EmptyScheduleSource.fetch().unwrap().is_empty());
    }
}
