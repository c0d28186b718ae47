use std::{cell::RefCell, rc::Rc};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{AccountError, BalanceEventKind},
    ledger::{AggregateBalance, Ledger, LedgerError},
};

#[derive(Debug, Error)]
pub enum BankError {
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Mutator capability: the only way to put new accounts into a bank.
pub struct Bank {
    ledger: Rc<RefCell<Ledger>>,
}

/// Observer capability: sees the bank-wide total and nothing else.
pub struct Reporter {
    ledger: Rc<RefCell<Ledger>>,
}

/// Handle to one account in the registry. Obtainable only through
/// [`Bank::create_account`]; the handle keeps the ledger alive, the ledger
/// does not own the handle.
#[derive(Debug)]
pub struct Account {
    ledger: Rc<RefCell<Ledger>>,
    name: String,
}

impl Bank {
    /// Creates an independent bank and splits its capabilities: the returned
    /// [`Bank`] can create accounts, the [`Reporter`] can only observe.
    pub fn open() -> (Bank, Reporter) {
        let ledger = Rc::new(RefCell::new(Ledger::default()));
        (
            Bank {
                ledger: Rc::clone(&ledger),
            },
            Reporter { ledger },
        )
    }

    pub fn create_account(&self, name: &str, opening_balance: Decimal) -> Result<Account, BankError> {
        let name = self
            .ledger
            .borrow_mut()
            .create_account(name, opening_balance)?;
        Ok(Account {
            ledger: Rc::clone(&self.ledger),
            name,
        })
    }
}

impl Reporter {
    pub fn total_bank_balance(&self) -> Decimal {
        self.ledger.borrow().total_balance()
    }
}

impl Account {
    /// The trimmed name the account was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn check_balance(&self) -> Decimal {
        self.ledger.borrow().state(&self.name).balance()
    }

    pub fn deposit(&self, amount: Decimal) -> Result<(), BankError> {
        let mut ledger = self.ledger.borrow_mut();
        let event = ledger
            .state(&self.name)
            .check(amount, BalanceEventKind::Deposited)?;
        ledger.state_mut(&self.name).apply(&event);
        let aggregate: &mut dyn AggregateBalance = &mut *ledger;
        aggregate.record_deposit(amount);
        Ok(())
    }

    pub fn withdraw(&self, amount: Decimal) -> Result<(), BankError> {
        let mut ledger = self.ledger.borrow_mut();
        let event = ledger
            .state(&self.name)
            .check(amount, BalanceEventKind::Withdrawn)?;
        ledger.state_mut(&self.name).apply(&event);
        let aggregate: &mut dyn AggregateBalance = &mut *ledger;
        aggregate.record_withdraw(amount);
        Ok(())
    }

    /// Moves `amount` to another account of the same bank. The total is not
    /// touched: money never leaves the bank. Sending to yourself is a
    /// validated no-op. The recipient is resolved only after the amount and
    /// the sender's balance passed their checks, and nothing is mutated
    /// until resolution succeeded.
    pub fn transfer(&self, recipient: &str, amount: Decimal) -> Result<(), BankError> {
        let mut ledger = self.ledger.borrow_mut();
        let debit = ledger
            .state(&self.name)
            .check(amount, BalanceEventKind::Withdrawn)?;
        let recipient = recipient.trim();
        if recipient == self.name {
            return Ok(());
        }
        let credit = ledger
            .lookup(recipient)?
            .check(amount, BalanceEventKind::Deposited)?;
        ledger.state_mut(&self.name).apply(&debit);
        ledger.state_mut(recipient).apply(&credit);
        Ok(())
    }
}
