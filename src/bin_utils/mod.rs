//! CSV-driven shell around the bank: reads a stream of operations, applies
//! them to a fresh bank and reports the final balances.

use std::{
    collections::HashMap,
    io::{Read, Write},
};

use anyhow::Result;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::bank::{Account, Bank, BankError};
use csv_parser::{CsvOperationParser, Operation, OperationKind};
use csv_printer::{AccountRow, print_accounts};
pub mod csv_parser;
pub mod csv_printer;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: OperationKind },
    #[error("Recipient is required for {kind:?}")]
    RecipientRequired { kind: OperationKind },
    #[error("No account named `{0}` has been opened")]
    UnknownAccount(String),
    #[error(transparent)]
    Bank(#[from] BankError),
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, OperationError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    /// Runs every operation from the input against a fresh bank, prints the
    /// final balances sorted by account name and returns the bank-wide
    /// total as seen by the reporter.
    pub fn run(mut self) -> Result<Decimal> {
        let parser = CsvOperationParser::new(self.input);

        let (bank, reporter) = Bank::open();
        let mut accounts: HashMap<String, Account> = HashMap::new();

        for (line, row) in parser {
            if let Err(err) = apply_operation(&bank, &mut accounts, row) {
                warn!(line, %err, "operation rejected");
                (self.error_printer)(line, err);
            }
        }

        let mut rows: Vec<AccountRow> = accounts
            .values()
            .map(|acc| AccountRow {
                name: acc.name().to_owned(),
                balance: acc.check_balance(),
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        print_accounts(self.output, rows.into_iter())?;

        Ok(reporter.total_bank_balance())
    }
}

fn apply_operation(
    bank: &Bank,
    accounts: &mut HashMap<String, Account>,
    row: Operation,
) -> Result<(), OperationError> {
    let Operation {
        kind,
        account,
        recipient,
        amount,
    } = row;
    debug!(?kind, %account, "applying operation");
    match kind {
        OperationKind::Open => {
            let amount = amount.ok_or(OperationError::AmountRequired { kind })?;
            let acc = bank.create_account(&account, amount)?;
            accounts.insert(acc.name().to_owned(), acc);
        }
        OperationKind::Deposit => {
            let amount = amount.ok_or(OperationError::AmountRequired { kind })?;
            opened(accounts, &account)?.deposit(amount)?;
        }
        OperationKind::Withdraw => {
            let amount = amount.ok_or(OperationError::AmountRequired { kind })?;
            opened(accounts, &account)?.withdraw(amount)?;
        }
        OperationKind::Transfer => {
            let amount = amount.ok_or(OperationError::AmountRequired { kind })?;
            let recipient = recipient.ok_or(OperationError::RecipientRequired { kind })?;
            opened(accounts, &account)?.transfer(&recipient, amount)?;
        }
    }
    Ok(())
}

/// Handles are issued at `open`; rows naming an account that was never
/// opened in this run fail here, before the bank is involved.
fn opened<'a>(
    accounts: &'a HashMap<String, Account>,
    name: &str,
) -> Result<&'a Account, OperationError> {
    let name = name.trim();
    accounts
        .get(name)
        .ok_or_else(|| OperationError::UnknownAccount(name.to_owned()))
}
