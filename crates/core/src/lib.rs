pub mod columns;
pub mod selection;
