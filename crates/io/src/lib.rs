// Persistence for the reorder grid

pub mod json;
pub mod store;

use restock_engine::grid::Grid;

use store::{LocalStore, StoreError};

/// Fixed storage key for the serialized grid.
pub const TABLE_DATA_KEY: &str = "tableData";

/// Serialize the grid and write it under [`TABLE_DATA_KEY`], replacing
/// any previous snapshot.
pub fn save_grid(store: &LocalStore, grid: &Grid) -> Result<(), StoreError> {
    let value = json::encode(grid)?;
    store.set(TABLE_DATA_KEY, &value)
}

/// Read and decode the stored grid, if one has been saved.
pub fn load_grid(store: &LocalStore) -> Result<Option<Grid>, StoreError> {
    match store.get(TABLE_DATA_KEY)? {
        Some(value) => Ok(Some(json::decode(&value)?)),
        None => Ok(None),
    }
}
