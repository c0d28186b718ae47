/// Screening of caller-supplied amounts. Every mutating operation on the
/// bank goes through this before touching any state.
pub mod amount;

/// All logic related to a single account's balance.
/// State is modified using events, which are created by a validating check
/// step, so a failed operation never leaves partial state behind.
pub mod account;

/// The account registry plus the bank-wide running total.
pub mod ledger;

/// Capability surface handed to callers: [`bank::Bank`] opens accounts,
/// [`bank::Account`] moves money around, [`bank::Reporter`] can only read
/// the total.
pub mod bank;

/// Would fit in a crate of its own as the binary bootstrap, but the
/// integration test drives it as well, so it stays in the library.
pub mod bin_utils;
