//! Input checks shared by the services.

use crate::error::AppError;

/// Rejects blank (empty or whitespace-only) required text fields.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

pub fn require_positive_id(id: i64) -> Result<(), AppError> {
    if id <= 0 {
        return Err(AppError::Validation("invalid ID".into()));
    }
    Ok(())
}
