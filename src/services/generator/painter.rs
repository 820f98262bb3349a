use crate::models::grid::{FillState, Grid, GridError};

/// Overwrites every cell with its base fill, discarding any highlights.
///
/// Idempotent: applying it twice leaves the same grid as applying it once,
/// whatever state the grid held before.
pub fn reset_to_base(grid: &mut Grid) -> Result<(), GridError> {
    for row in 0..grid.rows() {
        let fill = grid.geometry().base_fill(row);
        for slot in 0..grid.slots() {
            grid.set_cell(row, slot, fill)?;
        }
    }
    Ok(())
}

/// Marks one cell occupied.
///
/// Highlighting is one-way within a run: re-highlighting an already
/// highlighted cell is a no-op, and nothing un-highlights a cell short of
/// a full reset.
pub fn apply_occupancy(grid: &mut Grid, row: usize, slot: usize) -> Result<(), GridError> {
    grid.set_cell(row, slot, FillState::Highlighted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid::GridGeometry;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reset_restores_base_pattern() {
        let mut grid = Grid::new(GridGeometry::timetable());
        apply_occupancy(&mut grid, 2, 40).unwrap();
        apply_occupancy(&mut grid, 6, 0).unwrap();

        reset_to_base(&mut grid).unwrap();

        assert_eq!(grid, Grid::new(GridGeometry::timetable()));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut once = Grid::new(GridGeometry::timetable());
        apply_occupancy(&mut once, 3, 12).unwrap();
        reset_to_base(&mut once).unwrap();

        let mut twice = once.clone();
        reset_to_base(&mut twice).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_occupancy_is_idempotent() {
        let mut grid = Grid::new(GridGeometry::timetable());
        apply_occupancy(&mut grid, 4, 100).unwrap();
        let after_first = grid.clone();
        apply_occupancy(&mut grid, 4, 100).unwrap();

        assert_eq!(grid, after_first);
        assert_eq!(grid.highlighted_count(), 1);
    }

    #[test]
    fn test_apply_occupancy_rejects_bad_slot() {
        let mut grid = Grid::new(GridGeometry::timetable());
        assert!(apply_occupancy(&mut grid, 0, 500).is_err());
    }
}
