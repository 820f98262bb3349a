// Grid generation service
// Folds meeting occupancy into the timetable grid

pub mod day_mapper;
pub mod overlap;
pub mod painter;
pub mod slots;

use crate::models::grid::{Grid, GridError};
use crate::models::meeting::Meeting;

/// Rebuilds `grid` from scratch: base pattern first, then one highlight
/// pass per meeting.
///
/// Every meeting is evaluated against all seven day rows and every slot,
/// whether or not it meets that day; a non-matching (meeting, day) pair
/// simply produces no occupied slots and leaves the row's base fill alone.
/// Highlights are a plain union, so input order never matters.
pub fn generate(grid: &mut Grid, meetings: &[Meeting]) -> Result<(), GridError> {
    painter::reset_to_base(grid)?;

    if meetings.is_empty() {
        return Ok(());
    }

    for meeting in meetings {
        log::debug!(
            "Filling '{}' ({} - {}) on days {}",
            meeting.subject,
            meeting.start,
            meeting.end,
            meeting.meeting_days
        );
        fill_meeting(grid, meeting)?;
    }

    Ok(())
}

fn fill_meeting(grid: &mut Grid, meeting: &Meeting) -> Result<(), GridError> {
    let day_codes = grid.geometry().day_row_order;
    for day_code in day_codes {
        match day_mapper::row_of(grid.geometry(), day_code) {
            Some(row) => fill_day(grid, meeting, day_code, row)?,
            None => log::debug!("No grid row for day code '{day_code}', skipping"),
        }
    }
    Ok(())
}

fn fill_day(grid: &mut Grid, meeting: &Meeting, day_code: char, row: usize) -> Result<(), GridError> {
    for slot in 0..grid.slots() {
        let instant = slots::time_of_slot(grid.geometry(), slot);
        if overlap::occupies(meeting, day_code, instant) {
            painter::apply_occupancy(grid, row, slot)?;
        }
    }
    Ok(())
}
