// Grid <-> JSON text codec

use restock_engine::grid::{Grid, Row};

use crate::store::StoreError;

/// Encode the full grid as a JSON array of arrays of cell text, one inner
/// array per row. Blank cells are kept so the stored value reproduces the
/// grid exactly.
pub fn encode(grid: &Grid) -> Result<String, StoreError> {
    Ok(serde_json::to_string(grid.rows())?)
}

/// Decode a stored value back into a grid. Rows are normalized to the
/// schema width and the error flags recomputed from the min column's
/// contents.
pub fn decode(value: &str) -> Result<Grid, StoreError> {
    let rows: Vec<Vec<String>> = serde_json::from_str(value)?;
    Ok(Grid::from_rows(rows.into_iter().map(Row::from_cells).collect()))
}
