//! Field-presence validation for incoming posts.

use crate::error::DomainError;

/// Message reported when a required request field is absent.
fn missing_field_message(field: &str) -> String {
    format!("Missing `{}` in request body", field)
}

/// Unwrap a required field, failing with a validation error naming it.
///
/// Only presence is checked; an empty string is a present value.
pub fn required<T>(value: Option<T>, field: &str) -> Result<T, DomainError> {
    value.ok_or_else(|| DomainError::Validation(missing_field_message(field)))
}
