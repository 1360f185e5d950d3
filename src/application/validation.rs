//! Field checks shared by several services.

use crate::error::AppError;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const BLANK_MESSAGE: &str = "This field may not be blank.";

/// Checks a text field.
///
/// `None` is an error only when `required`; a present value must contain
/// something other than whitespace.
pub fn check_text(
    field: &str,
    value: Option<String>,
    required: bool,
) -> Result<Option<String>, AppError> {
    match value {
        None if required => Err(AppError::field(field, REQUIRED_MESSAGE)),
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Err(AppError::field(field, BLANK_MESSAGE)),
        Some(text) => Ok(Some(text)),
    }
}
