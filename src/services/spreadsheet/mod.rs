// Spreadsheet rendering service
// Writes the finished grid to an xlsx timetable

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, FormatAlign, Workbook};

use crate::models::grid::{FillState, Grid};
use crate::services::generator::slots;

/// Cell formats for the timetable, one per fill plus the label styles.
///
/// Colors match the paper grid: plain white, two grays for the row
/// banding, mint green for occupied slots.
struct SheetFormats {
    white: Format,
    light_gray: Format,
    dark_gray: Format,
    highlight: Format,
    day_label: Format,
    hour_label: Format,
}

impl SheetFormats {
    fn new() -> Self {
        Self {
            white: Format::new().set_background_color(0xFFFFFF),
            light_gray: Format::new().set_background_color(0xD3D3D3),
            dark_gray: Format::new().set_background_color(0xC0C0C0),
            highlight: Format::new().set_background_color(0x98FF98),
            day_label: Format::new().set_bold(),
            hour_label: Format::new().set_bold().set_align(FormatAlign::Left),
        }
    }

    fn for_fill(&self, fill: FillState) -> &Format {
        match fill {
            FillState::WhiteBase => &self.white,
            FillState::LightGrayBase => &self.light_gray,
            FillState::DarkGrayBase => &self.dark_gray,
            FillState::Highlighted => &self.highlight,
        }
    }
}

fn day_label(day_code: char) -> &'static str {
    match day_code {
        'U' => "Sunday",
        'M' => "Monday",
        'T' => "Tuesday",
        'W' => "Wednesday",
        'R' => "Thursday",
        'F' => "Friday",
        'S' => "Saturday",
        _ => "?",
    }
}

/// Renders the grid into a workbook: day labels down the first column,
/// hour labels across the header row, and one colored blank cell per
/// (day, slot).
pub fn render(grid: &Grid) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let formats = SheetFormats::new();
    let geometry = grid.geometry();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Timetable").context("Failed to name worksheet")?;

    // Narrow slot columns so a full day fits on screen; the label column
    // stays readable.
    sheet
        .set_column_width(geometry.first_sheet_col - 1, 10)
        .context("Failed to size label column")?;
    for slot in 0..grid.slots() {
        sheet
            .set_column_width(geometry.first_sheet_col + slot as u16, 2)
            .context("Failed to size slot column")?;
    }

    // Hour labels over the first slot of each hour block.
    let slots_per_hour = (60 / geometry.granularity_minutes) as usize;
    let header_row = geometry.first_sheet_row - 1;
    for hour_slot in (0..grid.slots()).step_by(slots_per_hour) {
        let label = slots::time_of_slot(geometry, hour_slot)
            .format("%-I %p")
            .to_string();
        let col = geometry.first_sheet_col + hour_slot as u16;
        sheet
            .write_with_format(header_row, col, &label, &formats.hour_label)
            .context("Failed to write hour label")?;
    }

    for row in 0..grid.rows() {
        let sheet_row = geometry.first_sheet_row + row as u32;
        let name = day_label(geometry.day_row_order[row]);
        sheet
            .write_with_format(sheet_row, geometry.first_sheet_col - 1, name, &formats.day_label)
            .context("Failed to write day label")?;

        for slot in 0..grid.slots() {
            let fill = grid.cell(row, slot)?;
            sheet
                .write_blank(
                    sheet_row,
                    geometry.first_sheet_col + slot as u16,
                    formats.for_fill(fill),
                )
                .context("Failed to fill grid cell")?;
        }
    }

    Ok(workbook)
}

/// Renders and writes the workbook in one shot.
///
/// The workbook is produced fully in memory before the target file is
/// touched, so a failed render never clobbers the previous artifact.
pub fn save(grid: &Grid, path: &Path) -> Result<()> {
    let mut workbook = render(grid)?;
    let buffer = workbook
        .save_to_buffer()
        .context("Failed to serialize timetable workbook")?;
    fs::write(path, buffer)
        .with_context(|| format!("Failed to write timetable to {}", path.display()))?;
    Ok(())
}
