mod core;
mod sim;

pub use crate::core::{Account, Balance, Ledger, LedgerError, LedgerResult};
pub use crate::core::{account, ledger, sort};
pub use crate::sim::{Command, CommandError, Output, Simulation, SimulationConfig, SimulationError, SortKey};
