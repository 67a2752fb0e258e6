//! Input validation for the reorder grid.
//!
//! Exactly one column is validated: "Min". A minimum-quantity entry must be
//! blank or an integer-valued number. The check runs on the raw text of an
//! edit, before anything is written to the grid; a failing edit flags the
//! row and leaves the grid untouched.
//!
//! ## What counts as an integer
//!
//! The text is trimmed, then parsed as a plain number. Any representation
//! whose value has no fractional part passes, so `3.0` and `1e3` are valid
//! alongside `42` and `-7`. `3.5` fails on the fraction; `abc`, `NaN` and
//! `inf` fail outright. Blank (including whitespace-only) is always valid.

use restock_core::columns::MIN_COL;

/// Why a minimum-quantity entry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinInputError {
    /// Input does not parse as a finite number.
    NotANumber,
    /// Input parses as a number with a fractional part.
    FractionalNotAllowed,
}

impl std::fmt::Display for MinInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MinInputError::NotANumber => write!(f, "Value is not a valid number"),
            MinInputError::FractionalNotAllowed => write!(f, "Whole number required (no decimals)"),
        }
    }
}

/// Validate text destined for the "Min" column.
pub fn check_min_input(value: &str) -> Result<(), MinInputError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Ok(());
    }

    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n.fract() == 0.0 => Ok(()),
        Ok(n) if !n.is_finite() => Err(MinInputError::NotANumber),
        Ok(_) => Err(MinInputError::FractionalNotAllowed),
        Err(_) => Err(MinInputError::NotANumber),
    }
}

/// Whether an edit of `value` into `col` must be rejected. Only the "Min"
/// column can reject; every other column accepts anything.
pub fn edit_is_invalid(col: usize, value: &str) -> bool {
    col == MIN_COL && check_min_input(value).is_err()
}
