//! Price and payment validation.

use crate::error::CoreError;

/// Validate an item price: finite and non-negative.
pub fn validate_price(price: f64) -> Result<(), CoreError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CoreError::Validation(format!(
            "Price must be a non-negative number (got {price})"
        )));
    }
    Ok(())
}

/// Validate the optional amount handed over at registration.
pub fn validate_amount_given(amount: Option<f64>) -> Result<(), CoreError> {
    match amount {
        Some(a) if !a.is_finite() || a < 0.0 => Err(CoreError::Validation(format!(
            "Amount given must be a non-negative number (got {a})"
        ))),
        _ => Ok(()),
    }
}
