/// Number of columns in a reorder record.
pub const COLUMN_COUNT: usize = 8;

/// Index of the "Min" column, the only column with input validation.
pub const MIN_COL: usize = 5;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// Static description of one grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub alignment: Alignment,
}

/// The fixed reorder-grid schema, in display order. Text columns are
/// left-aligned, quantity columns right-aligned.
pub const COLUMNS: [Column; COLUMN_COUNT] = [
    Column { label: "Supplier name", alignment: Alignment::Left },
    Column { label: "Item_id", alignment: Alignment::Left },
    Column { label: "Balance Qty", alignment: Alignment::Right },
    Column { label: "Daily Run Rate", alignment: Alignment::Right },
    Column { label: "Safety Stock", alignment: Alignment::Right },
    Column { label: "Min", alignment: Alignment::Right },
    Column { label: "Max", alignment: Alignment::Right },
    Column { label: "Reorder Qty", alignment: Alignment::Right },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_shape() {
        assert_eq!(COLUMNS.len(), COLUMN_COUNT);
        assert_eq!(COLUMNS[MIN_COL].label, "Min");
    }

    #[test]
    fn test_alignment_split() {
        for (i, col) in COLUMNS.iter().enumerate() {
            if i < 2 {
                assert_eq!(col.alignment, Alignment::Left, "{}", col.label);
            } else {
                assert_eq!(col.alignment, Alignment::Right, "{}", col.label);
            }
        }
    }
}
