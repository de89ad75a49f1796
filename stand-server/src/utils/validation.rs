//! Input validation helpers
//!
//! Centralized text length constants and validation functions,
//! checked at the handler boundary before anything hits persistence.

use rust_decimal::Decimal;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: albums, recipes, expense actions
pub const MAX_NAME_LEN: usize = 200;

/// Comments and expense descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: nicknames, ingredient names
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Sanity cap on items per order
pub const MAX_ITEMS_PER_ORDER: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty (after trimming) and
/// within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length
/// limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate that an amount is strictly positive.
pub fn validate_positive_amount(amount: Decimal, field: &str) -> Result<(), AppError> {
    if amount <= Decimal::ZERO {
        return Err(AppError::validation(format!("{field} must be positive")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("maja", "nickname", 10).is_ok());
        assert!(validate_required_text("  ", "nickname", 10).is_err());
        assert!(validate_required_text("abcdefghijk", "nickname", 10).is_err());
    }

    #[test]
    fn test_positive_amount() {
        assert!(validate_positive_amount(Decimal::from(3), "amount").is_ok());
        assert!(validate_positive_amount(Decimal::ZERO, "amount").is_err());
        assert!(validate_positive_amount(Decimal::from(-1), "amount").is_err());
    }
}
