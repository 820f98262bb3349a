// Grid module
// In-memory timetable grid and its geometry

use chrono::NaiveTime;
use thiserror::Error;

/// Fill applied to one grid cell.
///
/// The three base fills reproduce the paper timetable's row banding; the
/// highlight fill marks a slot occupied by at least one meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillState {
    WhiteBase,
    LightGrayBase,
    DarkGrayBase,
    Highlighted,
}

impl FillState {
    pub fn is_highlighted(self) -> bool {
        self == FillState::Highlighted
    }
}

/// Errors raised by out-of-range grid addressing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("day row {row} is outside the grid (rows 0..{rows})")]
    RowOutOfRange { row: usize, rows: usize },
    #[error("slot {slot} is outside the grid (slots 0..{slots})")]
    SlotOutOfRange { slot: usize, slots: usize },
}

/// Declared geometry of the timetable grid.
///
/// Collects everything that used to be scattered magic values: the daily
/// window, the slot granularity, the row order of the weekday codes, and
/// where the grid sits on the spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGeometry {
    /// First instant shown on the grid.
    pub window_start: NaiveTime,
    /// End of the daily window; no slot starts at or after this instant.
    pub window_end: NaiveTime,
    /// Width of one slot, in minutes.
    pub granularity_minutes: u32,
    /// Weekday code occupying each grid row, top to bottom.
    pub day_row_order: [char; 7],
    /// Gray rows drawn in the lighter shade (Tuesday and Thursday).
    pub stripe_rows: [usize; 2],
    /// Zero-based sheet row of grid row 0 (sheet row 3 in spreadsheet terms).
    pub first_sheet_row: u32,
    /// Zero-based sheet column of slot 0 (sheet column B).
    pub first_sheet_col: u16,
}

impl GridGeometry {
    /// The standard timetable layout: 06:00-22:00 in 5-minute slots,
    /// Sunday through Saturday.
    pub fn timetable() -> Self {
        Self {
            window_start: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            window_end: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            granularity_minutes: 5,
            day_row_order: ['U', 'M', 'T', 'W', 'R', 'F', 'S'],
            stripe_rows: [2, 4],
            first_sheet_row: 2,
            first_sheet_col: 1,
        }
    }

    pub fn day_count(&self) -> usize {
        self.day_row_order.len()
    }

    /// Number of slots in the daily window (192 for the standard layout).
    pub fn slot_count(&self) -> usize {
        let window = self.window_end - self.window_start;
        (window.num_minutes() / self.granularity_minutes as i64) as usize
    }

    /// Base fill for a grid row, before any meeting is overlaid.
    ///
    /// Rows alternate white and gray down the sheet; the two stripe rows
    /// take the lighter gray, the remaining gray rows the darker one.
    pub fn base_fill(&self, row: usize) -> FillState {
        if row % 2 == 1 {
            FillState::WhiteBase
        } else if self.stripe_rows.contains(&row) {
            FillState::LightGrayBase
        } else {
            FillState::DarkGrayBase
        }
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::timetable()
    }
}

/// The addressable cell matrix the generator works on.
///
/// Owned by the caller and threaded explicitly through every operation;
/// no grid state lives outside this value.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    geometry: GridGeometry,
    cells: Vec<FillState>,
}

impl Grid {
    /// Creates a grid with every cell at its base fill.
    pub fn new(geometry: GridGeometry) -> Self {
        let rows = geometry.day_count();
        let slots = geometry.slot_count();
        let mut cells = Vec::with_capacity(rows * slots);
        for row in 0..rows {
            let fill = geometry.base_fill(row);
            cells.extend(std::iter::repeat(fill).take(slots));
        }
        Self { geometry, cells }
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn rows(&self) -> usize {
        self.geometry.day_count()
    }

    pub fn slots(&self) -> usize {
        self.geometry.slot_count()
    }

    pub fn cell(&self, row: usize, slot: usize) -> Result<FillState, GridError> {
        let idx = self.index(row, slot)?;
        Ok(self.cells[idx])
    }

    pub fn set_cell(&mut self, row: usize, slot: usize, fill: FillState) -> Result<(), GridError> {
        let idx = self.index(row, slot)?;
        self.cells[idx] = fill;
        Ok(())
    }

    /// Count of highlighted cells across the whole grid.
    pub fn highlighted_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_highlighted()).count()
    }

    fn index(&self, row: usize, slot: usize) -> Result<usize, GridError> {
        let rows = self.rows();
        let slots = self.slots();
        if row >= rows {
            return Err(GridError::RowOutOfRange { row, rows });
        }
        if slot >= slots {
            return Err(GridError::SlotOutOfRange { slot, slots });
        }
        Ok(row * slots + slot)
    }
}
