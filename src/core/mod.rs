pub mod account;
pub mod error;
pub mod ledger;
pub mod sort;

pub use account::{Account, Balance};
pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
