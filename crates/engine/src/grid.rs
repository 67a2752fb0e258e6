use serde::{Deserialize, Serialize};

use restock_core::columns::{COLUMN_COUNT, MIN_COL};
use restock_core::selection::RowSelection;

use crate::validation;

/// One reorder record: a fixed run of raw text cells.
///
/// Cells hold whatever the user typed; nothing is coerced to a numeric
/// type. Serializes as a plain array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: [String; COLUMN_COUNT],
}

impl Row {
    /// A row with every cell empty.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Build a row from stored cells, normalizing to the schema width:
    /// missing cells become empty text, extras are dropped.
    pub fn from_cells(cells: Vec<String>) -> Self {
        let mut row = Self::blank();
        for (slot, cell) in row.cells.iter_mut().zip(cells) {
            *slot = cell;
        }
        row
    }

    /// The cell text at `col`. Panics if `col >= COLUMN_COUNT`.
    pub fn cell(&self, col: usize) -> &str {
        &self.cells[col]
    }

    /// All cells in column order.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    fn set(&mut self, col: usize, value: &str) {
        self.cells[col] = value.to_string();
    }
}

/// Result of an attempted cell edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The value was written into the grid.
    Committed,
    /// The value failed the min-column check; the grid is unchanged and
    /// the row is flagged.
    Rejected,
    /// The target cell does not exist.
    OutOfBounds,
}

/// The reorder table: ordered rows plus a parallel per-row error flag.
///
/// `rows` and `row_errors` always have the same length; every operation
/// that adds or removes rows maintains both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
    row_errors: Vec<bool>,
}

impl Grid {
    /// A fresh grid starts with a single blank record.
    pub fn new() -> Self {
        Self {
            rows: vec![Row::blank()],
            row_errors: vec![false],
        }
    }

    /// Rebuild a grid from stored rows, recomputing each error flag from
    /// the min column's current contents. Loaded data may legitimately be
    /// empty (the user deleted every row before saving).
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let row_errors = rows
            .iter()
            .map(|r| validation::check_min_input(r.cell(MIN_COL)).is_err())
            .collect();
        Self { rows, row_errors }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Error flags, index-aligned with `rows()`.
    pub fn row_errors(&self) -> &[bool] {
        &self.row_errors
    }

    /// Whether `row` currently holds a rejected min entry. Out-of-range
    /// rows report no error.
    pub fn row_error(&self, row: usize) -> bool {
        self.row_errors.get(row).copied().unwrap_or(false)
    }

    /// Append one blank record.
    pub fn add_row(&mut self) {
        self.rows.push(Row::blank());
        self.row_errors.push(false);
    }

    /// Apply an edit to a single cell.
    ///
    /// The error flag for `row` is refreshed on every edit: it is set when
    /// a min entry fails the check and cleared otherwise, so editing any
    /// other cell of a flagged row clears the stale flag. A failing value
    /// is never written; the previous cell text stays in place.
    pub fn edit_cell(&mut self, row: usize, col: usize, value: &str) -> EditOutcome {
        if row >= self.rows.len() || col >= COLUMN_COUNT {
            return EditOutcome::OutOfBounds;
        }

        let invalid = validation::edit_is_invalid(col, value);
        self.row_errors[row] = invalid;

        if invalid {
            return EditOutcome::Rejected;
        }

        self.rows[row].set(col, value);
        EditOutcome::Committed
    }

    /// Remove every row whose index is selected, keeping the error flags
    /// aligned. Indices not present in the grid are ignored.
    pub fn delete_rows(&mut self, selected: &RowSelection) {
        let mut index = 0;
        self.rows.retain(|_| {
            let keep = !selected.contains(index);
            index += 1;
            keep
        });

        let mut index = 0;
        self.row_errors.retain(|_| {
            let keep = !selected.contains(index);
            index += 1;
            keep
        });
    }
}
