use crate::models::grid::GridGeometry;

/// Returns the grid row for a weekday code, or `None` for anything outside
/// the configured row order.
///
/// Codes follow the registrar convention: U=Sunday, M=Monday, T=Tuesday,
/// W=Wednesday, R=Thursday, F=Friday, S=Saturday. Unknown codes are not an
/// error; the caller treats them as a no-op.
pub fn row_of(geometry: &GridGeometry, day_code: char) -> Option<usize> {
    geometry
        .day_row_order
        .iter()
        .position(|&code| code == day_code)
}
