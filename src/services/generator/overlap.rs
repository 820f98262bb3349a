use chrono::NaiveTime;

use crate::models::meeting::Meeting;

/// True when `meeting` occupies `instant` on the day identified by
/// `day_code`.
///
/// The interval is half-open: an instant equal to `meeting.end` is free,
/// so a 06:00-10:00 meeting occupies the 09:55 slot but not the 10:00 one.
pub fn occupies(meeting: &Meeting, day_code: char, instant: NaiveTime) -> bool {
    meeting.meeting_days.chars().any(|code| code == day_code)
        && instant >= meeting.start
        && instant < meeting.end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn physics() -> Meeting {
        Meeting {
            subject: "Physics".to_string(),
            start: hm(6, 0),
            end: hm(10, 0),
            meeting_days: "TR".to_string(),
        }
    }

    #[test]
    fn test_start_is_occupied() {
        assert!(occupies(&physics(), 'T', hm(6, 0)));
    }

    #[test]
    fn test_end_is_free() {
        let meeting = physics();
        assert!(occupies(&meeting, 'T', hm(9, 55)));
        assert!(!occupies(&meeting, 'T', hm(10, 0)));
    }

    #[test]
    fn test_non_meeting_day_is_free() {
        let meeting = physics();
        assert!(!occupies(&meeting, 'M', hm(7, 0)));
        assert!(!occupies(&meeting, 'U', hm(7, 0)));
    }

    #[test]
    fn test_before_start_is_free() {
        assert!(!occupies(&physics(), 'R', hm(5, 55)));
    }

    #[test]
    fn test_day_codes_match_anywhere_in_string() {
        let mut meeting = physics();
        meeting.meeting_days = "RFU".to_string();
        assert!(occupies(&meeting, 'U', hm(7, 0)));
        assert!(occupies(&meeting, 'F', hm(7, 0)));
        assert!(!occupies(&meeting, 'T', hm(7, 0)));
    }
}
