mod command;
mod config;
mod output;
mod simulation;

pub use command::{Command, CommandError, SortKey};
pub use config::SimulationConfig;
pub use output::Output;
pub use simulation::{Simulation, SimulationError};
