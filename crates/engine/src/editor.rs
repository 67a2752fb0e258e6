use restock_core::selection::RowSelection;

use crate::grid::{EditOutcome, Grid};

/// Owns everything the reorder screen mutates: the grid, the delete
/// selection, and whether the confirmation prompt is showing.
///
/// Every user interaction maps to one method and runs synchronously; the
/// view re-derives from the state after the call returns. The prompt
/// itself carries no state of its own, only this visibility flag.
#[derive(Debug, Clone, Default)]
pub struct GridEditor {
    grid: Grid,
    selection: RowSelection,
    confirm_visible: bool,
}

impl GridEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing grid (for example one loaded from storage).
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            selection: RowSelection::new(),
            confirm_visible: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selection(&self) -> &RowSelection {
        &self.selection
    }

    pub fn confirm_visible(&self) -> bool {
        self.confirm_visible
    }

    /// Append one blank record.
    pub fn add_row(&mut self) {
        self.grid.add_row();
    }

    /// Apply an edit to a single cell. See [`Grid::edit_cell`] for the
    /// commit/reject rule.
    pub fn edit_cell(&mut self, row: usize, col: usize, value: &str) -> EditOutcome {
        self.grid.edit_cell(row, col, value)
    }

    /// Mark or unmark a row for deletion. Rows outside the grid are
    /// ignored so the selection can never point past the last row.
    pub fn toggle_row_selection(&mut self, row: usize) {
        if row < self.grid.row_count() {
            self.selection.toggle(row);
        }
    }

    /// Ask to delete the marked rows. Does nothing while the selection is
    /// empty; otherwise the confirmation prompt becomes visible.
    pub fn request_delete(&mut self) {
        if !self.selection.is_empty() {
            self.confirm_visible = true;
        }
    }

    /// Dismiss the confirmation prompt without touching the grid.
    pub fn cancel_delete(&mut self) {
        self.confirm_visible = false;
    }

    /// Carry out the requested deletion: drop every selected row and its
    /// error flag, clear the selection, hide the prompt.
    pub fn confirm_delete(&mut self) {
        self.grid.delete_rows(&self.selection);
        self.selection.clear();
        self.confirm_visible = false;
    }

    /// Whether a row gets the warning background. Selected rows and rows
    /// with a rejected min entry share the one warning color.
    pub fn row_highlighted(&self, row: usize) -> bool {
        self.selection.contains(row) || self.grid.row_error(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restock_core::columns::MIN_COL;

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut editor = GridEditor::new();
        editor.add_row();
        assert!(!editor.selection().contains(1));

        editor.toggle_row_selection(1);
        assert!(editor.selection().contains(1));

        editor.toggle_row_selection(1);
        assert!(!editor.selection().contains(1));
        assert!(editor.selection().is_empty());
    }

    #[test]
    fn test_toggle_out_of_bounds_ignored() {
        let mut editor = GridEditor::new();
        editor.toggle_row_selection(5);
        assert!(editor.selection().is_empty());
    }

    #[test]
    fn test_request_delete_needs_selection() {
        let mut editor = GridEditor::new();
        editor.request_delete();
        assert!(!editor.confirm_visible());

        editor.toggle_row_selection(0);
        editor.request_delete();
        assert!(editor.confirm_visible());
    }

    #[test]
    fn test_cancel_keeps_grid_and_selection() {
        let mut editor = GridEditor::new();
        editor.add_row();
        editor.toggle_row_selection(0);
        editor.request_delete();

        editor.cancel_delete();
        assert!(!editor.confirm_visible());
        assert_eq!(editor.grid().row_count(), 2);
        assert!(editor.selection().contains(0));
    }

    #[test]
    fn test_confirm_delete_filters_clears_and_hides() {
        let mut editor = GridEditor::new();
        for _ in 0..3 {
            editor.add_row();
        }
        for row in 0..4 {
            editor.edit_cell(row, 0, &format!("supplier-{}", row));
        }

        editor.toggle_row_selection(1);
        editor.toggle_row_selection(3);
        editor.request_delete();
        editor.confirm_delete();

        assert_eq!(editor.grid().row_count(), 2);
        assert_eq!(editor.grid().rows()[0].cell(0), "supplier-0");
        assert_eq!(editor.grid().rows()[1].cell(0), "supplier-2");
        assert!(editor.selection().is_empty());
        assert!(!editor.confirm_visible());
    }

    #[test]
    fn test_highlight_covers_selected_and_flagged_rows() {
        let mut editor = GridEditor::new();
        editor.add_row();
        editor.add_row();

        editor.toggle_row_selection(0);
        editor.edit_cell(1, MIN_COL, "not a number");

        assert!(editor.row_highlighted(0));
        assert!(editor.row_highlighted(1));
        assert!(!editor.row_highlighted(2));
    }

    #[test]
    fn test_add_then_invalid_min_scenario() {
        let mut editor = GridEditor::new();
        editor.add_row();
        editor.add_row();
        assert_eq!(editor.grid().row_count(), 3);
        assert_eq!(editor.grid().row_errors(), &[false, false, false]);

        editor.edit_cell(1, MIN_COL, "3.5");
        assert_eq!(editor.grid().row_errors(), &[false, true, false]);
        assert_eq!(editor.grid().rows()[1].cell(MIN_COL), "");
    }

    #[test]
    fn test_delete_all_rows_leaves_working_editor() {
        let mut editor = GridEditor::new();
        editor.toggle_row_selection(0);
        editor.request_delete();
        editor.confirm_delete();
        assert!(editor.grid().is_empty());

        editor.add_row();
        assert_eq!(editor.grid().row_count(), 1);
        assert_eq!(editor.grid().row_errors(), &[false]);
    }
}
