use thiserror::Error;

use crate::core::Balance;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Occurs when an operation references a name
    /// with no account on the ledger.
    #[error("no such account: {0}")]
    NotFound(String),
    /// Occurs when an initial balance or an amount is negative.
    #[error("invalid amount: {0}")]
    InvalidAmount(Balance),
    /// Occurs when a withdrawal or transfer asks for
    /// more than the account holds.
    #[error("insufficient funds in {name}: {requested} requested, {balance} available")]
    InsufficientFunds {
        name: String,
        balance: Balance,
        requested: Balance
    },
    #[error("account already exists: {0}")]
    DuplicateAccount(String),
    /// Occurs when crediting an account would overflow its balance.
    #[error("balance overflow in {0}")]
    BalanceOverflow(String),
}

pub type LedgerResult<T> = Result<T, LedgerError>;
