use restock_core::columns::{COLUMNS, COLUMN_COUNT};
use restock_engine::grid::Grid;

use crate::util;

/// Display geometry for the grid: per-column widths plus the row-number
/// gutter. Unlike a file viewer the data changes under the user, so this
/// is recomputed after every committed mutation.
pub(crate) struct GridLayout {
    /// Column widths in display cells, clamped to the configured band
    pub col_widths: Vec<usize>,
    /// Width of the row-number gutter
    pub row_num_width: usize,
}

impl GridLayout {
    /// Scan the header labels and every row, clamping each column to
    /// `[min_width, max_width]`. A band with `max_width < min_width`
    /// collapses to `min_width`.
    pub fn compute(grid: &Grid, min_width: usize, max_width: usize) -> Self {
        // Settings can invert the band; clamp() panics on a backwards range
        let max_width = max_width.max(min_width);
        let col_widths = (0..COLUMN_COUNT)
            .map(|c| {
                let header_w = util::display_width(COLUMNS[c].label);
                let max_cell = grid
                    .rows()
                    .iter()
                    .map(|row| util::display_width(row.cell(c)))
                    .max()
                    .unwrap_or(0);
                header_w.max(max_cell).clamp(min_width, max_width)
            })
            .collect();

        let digits = match grid.row_count() {
            0 => 1,
            n => (n as f64).log10().floor() as usize + 1,
        };

        Self {
            col_widths,
            row_num_width: digits.max(3) + 1,
        }
    }
}
