use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Amount must be greater than zero, got {0}")]
pub struct InvalidAmount(pub Decimal);

/// Accepts strictly positive amounts. Zero is rejected as well: a deposit,
/// withdrawal or transfer of nothing is a caller mistake, not a no-op.
pub fn validate_amount(amount: Decimal) -> Result<(), InvalidAmount> {
    if amount > Decimal::zero() {
        Ok(())
    } else {
        Err(InvalidAmount(amount))
    }
}
