//! Required-field validation for request options and their nested inputs.

use crate::error::ValidationError;

/// Checks that every required field is present before a request is built.
pub trait Validate {
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// A required string must be non-blank.
///
/// # Errors
///
/// [`ValidationError::missing`] when `value` is empty or whitespace.
pub fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::missing(field));
    }
    Ok(())
}

/// A required list must hold at least one element.
///
/// # Errors
///
/// [`ValidationError::empty_list`] when `items` is empty.
pub fn require_items<T>(field: &str, items: &[T]) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::empty_list(field));
    }
    Ok(())
}

/// A list must hold exactly `expected` elements.
///
/// # Errors
///
/// [`ValidationError::empty_list`] when empty, otherwise
/// [`ValidationError::cardinality`] on a size mismatch.
pub fn require_exactly<T>(field: &str, items: &[T], expected: usize) -> Result<(), ValidationError> {
    require_items(field, items)?;
    if items.len() != expected {
        return Err(ValidationError::cardinality(field, expected, items.len()));
    }
    Ok(())
}

/// Validate every element, prefixing errors with `field[index]`.
///
/// # Errors
///
/// The first element error, with its path qualified.
pub fn validate_each<T: Validate>(field: &str, items: &[T]) -> Result<(), ValidationError> {
    for (index, item) in items.iter().enumerate() {
        item.validate()
            .map_err(|e| e.within(&format!("{field}[{index}]")))?;
    }
    Ok(())
}

/// Validate a nested input when it is present.
///
/// # Errors
///
/// The nested error, with `field` prepended to its path.
pub fn validate_nested<T: Validate>(field: &str, item: Option<&T>) -> Result<(), ValidationError> {
    match item {
        Some(item) => item.validate().map_err(|e| e.within(field)),
        None => Ok(()),
    }
}
