use chrono::{Duration, NaiveTime};

use crate::models::grid::GridGeometry;

/// Wall-clock instant at the start of `slot` within the daily window.
///
/// Defined for slot indices in `[0, slot_count)`; the generation loop only
/// ever walks slots ascending, so no reverse lookup exists.
pub fn time_of_slot(geometry: &GridGeometry, slot: usize) -> NaiveTime {
    geometry.window_start + Duration::minutes(slot as i64 * geometry.granularity_minutes as i64)
}
