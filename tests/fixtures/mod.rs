// Test fixtures - reusable test data
// Provides consistent schedules across the integration tests
#![allow(dead_code)] // each test binary uses its own subset

use chrono::NaiveTime;
use timegrid::models::meeting::{Meeting, MeetingRecord};

pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// The canonical end-to-end record: Physics, 06:00-10:00, Tuesday/Thursday.
pub fn physics_record() -> MeetingRecord {
    MeetingRecord {
        subject: "Physics".to_string(),
        start: "6:00:00 AM".to_string(),
        end: "10:00:00 AM".to_string(),
        meeting_days: "TR".to_string(),
    }
}

/// A Monday/Wednesday/Friday morning lecture.
pub fn math_record() -> MeetingRecord {
    MeetingRecord {
        subject: "Math".to_string(),
        start: "9:00:00 AM".to_string(),
        end: "10:30:00 AM".to_string(),
        meeting_days: "MWF".to_string(),
    }
}

/// A resolved meeting built directly, skipping the textual times.
pub fn meeting(subject: &str, start: NaiveTime, end: NaiveTime, days: &str) -> Meeting {
    Meeting {
        subject: subject.to_string(),
        start,
        end,
        meeting_days: days.to_string(),
    }
}
