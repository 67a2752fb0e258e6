pub mod editor;
pub mod grid;
pub mod validation;
