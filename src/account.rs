use rust_decimal::Decimal;
use thiserror::Error;

use crate::amount::{InvalidAmount, validate_amount};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BalanceEventKind {
    Deposited,
    Withdrawn,
}

/// A movement that already passed validation and may be applied as-is.
#[derive(Debug)]
pub(crate) struct BalanceEvent {
    amount: Decimal,
    kind: BalanceEventKind,
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error(transparent)]
    InvalidAmount(#[from] InvalidAmount),
    #[error("Insufficient balance: {requested} requested, {balance} available")]
    InsufficientBalance {
        balance: Decimal,
        requested: Decimal,
    },
}

/// Balance of a single account. The name lives in the registry key and in
/// the handles issued by the bank, not here.
#[derive(Debug)]
pub(crate) struct AccountState {
    balance: Decimal,
}

impl AccountState {
    pub(crate) fn new(opening_balance: Decimal) -> Self {
        Self {
            balance: opening_balance,
        }
    }

    pub(crate) fn balance(&self) -> Decimal {
        self.balance
    }

    /// Validates a movement without touching state. Withdrawing the exact
    /// balance is allowed; anything beyond it is not.
    pub(crate) fn check(
        &self,
        amount: Decimal,
        kind: BalanceEventKind,
    ) -> Result<BalanceEvent, AccountError> {
        validate_amount(amount)?;
        if kind == BalanceEventKind::Withdrawn && self.balance < amount {
            return Err(AccountError::InsufficientBalance {
                balance: self.balance,
                requested: amount,
            });
        }
        Ok(BalanceEvent { amount, kind })
    }

    pub(crate) fn apply(&mut self, event: &BalanceEvent) {
        match event.kind {
            BalanceEventKind::Deposited => self.balance += event.amount,
            BalanceEventKind::Withdrawn => self.balance -= event.amount,
        }
    }
}
