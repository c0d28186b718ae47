use std::collections::{HashMap, hash_map::Entry};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::AccountState,
    amount::{InvalidAmount, validate_amount},
};

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    InvalidAmount(#[from] InvalidAmount),
    #[error("Account name must not be empty")]
    InvalidName,
    #[error("An account named `{0}` already exists")]
    NameAlreadyExists(String),
    #[error("No account named `{0}`")]
    MissingAccount(String),
}

/// Narrow surface through which accounts adjust the bank-wide total.
/// No validation happens here; it is only invoked after the local account
/// mutation already succeeded, so the sum invariant cannot break.
pub(crate) trait AggregateBalance {
    fn record_deposit(&mut self, amount: Decimal);
    fn record_withdraw(&mut self, amount: Decimal);
}

/// Registry of all accounts, keyed by trimmed name, plus the running total.
/// The total is maintained incrementally and never recomputed.
#[derive(Debug, Default)]
pub(crate) struct Ledger {
    accounts: HashMap<String, AccountState>,
    total_balance: Decimal,
}

impl Ledger {
    /// Registers a new account under the trimmed name and folds its opening
    /// balance into the total. Returns the trimmed name, which is the key
    /// for every later lookup.
    pub(crate) fn create_account(
        &mut self,
        name: &str,
        opening_balance: Decimal,
    ) -> Result<String, LedgerError> {
        validate_amount(opening_balance)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::InvalidName);
        }
        match self.accounts.entry(name.to_owned()) {
            Entry::Occupied(entry) => Err(LedgerError::NameAlreadyExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                let name = entry.key().clone();
                entry.insert(AccountState::new(opening_balance));
                self.total_balance += opening_balance;
                Ok(name)
            }
        }
    }

    /// Transfer recipient resolution; absence is an ordinary outcome here.
    pub(crate) fn lookup(&self, name: &str) -> Result<&AccountState, LedgerError> {
        self.accounts
            .get(name)
            .ok_or_else(|| LedgerError::MissingAccount(name.to_owned()))
    }

    /// State behind a live handle. Handles are only issued for registered
    /// accounts and accounts are never removed, so a miss is a broken
    /// invariant rather than an input error.
    pub(crate) fn state(&self, name: &str) -> &AccountState {
        self.accounts
            .get(name)
            .expect("account handles always point at a registered account")
    }

    pub(crate) fn state_mut(&mut self, name: &str) -> &mut AccountState {
        self.accounts
            .get_mut(name)
            .expect("account handles always point at a registered account")
    }

    pub(crate) fn total_balance(&self) -> Decimal {
        self.total_balance
    }
}

impl AggregateBalance for Ledger {
    fn record_deposit(&mut self, amount: Decimal) {
        self.total_balance += amount;
    }

    fn record_withdraw(&mut self, amount: Decimal) {
        self.total_balance -= amount;
    }
}
