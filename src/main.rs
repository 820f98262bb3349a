// Timegrid Application
// Regenerates the highlighted weekly availability grid for a timetable

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::Parser;

use timegrid::models::grid::{Grid, GridGeometry};
use timegrid::models::meeting::resolve_records;
use timegrid::services::generator;
use timegrid::services::schedule::{EmptyScheduleSource, JsonScheduleSource, ScheduleSource};
use timegrid::services::spreadsheet;

/// Regenerates a timetable workbook, highlighting every 5-minute slot
/// occupied by a meeting in the supplied schedule.
#[derive(Parser)]
#[command(name = "timegrid", version, about)]
struct Cli {
    /// Path to the existing timetable workbook to regenerate
    timetable: PathBuf,

    /// JSON file with the meeting records; omitted means an empty schedule
    #[arg(long)]
    schedule: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    log::info!("Starting timegrid");
    log::info!("Timetable path: {}", cli.timetable.display());

    if !cli.timetable.exists() {
        bail!(
            "The timetable workbook does not exist at {}",
            cli.timetable.display()
        );
    }

    let source: Box<dyn ScheduleSource> = match &cli.schedule {
        Some(path) => Box::new(JsonScheduleSource::new(path)),
        None => Box::new(EmptyScheduleSource),
    };

    let records = source.fetch()?;
    if records.is_empty() {
        log::warn!("No schedule data returned; the grid will show no meetings");
    }

    // All times parse before any output is written, so a malformed record
    // leaves the previous artifact untouched.
    let meetings = resolve_records(&records)?;

    let mut grid = Grid::new(GridGeometry::timetable());
    generator::generate(&mut grid, &meetings)?;
    log::info!(
        "Generated grid: {} meetings, {} highlighted slots",
        meetings.len(),
        grid.highlighted_count()
    );

    spreadsheet::save(&grid, &cli.timetable)?;
    log::info!("Saved timetable to {}", cli.timetable.display());

    Ok(())
}
