use log::{info, warn};
use thiserror::Error;

use crate::core::Ledger;
use crate::sim::command::{Command, CommandError, SortKey};
use crate::sim::config::SimulationConfig;
use crate::sim::output::Output;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("line {line}: {source}")]
    Command {
        line: usize,
        #[source]
        source: CommandError
    }
}

/// Runs command scripts against a ledger it owns.
#[derive(Debug, Default)]
pub struct Simulation {
    ledger: Ledger,
    config: SimulationConfig
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Simulation {
        Simulation { ledger: Ledger::new(), config }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Starts from an empty ledger and executes every command in order,
    /// collecting one output per executed command.
    ///
    /// Unknown commands and sort keys produce no output and are skipped,
    /// unless the config is strict. Malformed arguments always stop the run.
    pub fn run<I, S>(&mut self, commands: I) -> Result<Vec<Output>, SimulationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        self.ledger.reset();
        info!("starting simulation");

        let mut outputs = Vec::new();
        for (idx, line) in commands.into_iter().enumerate() {
            if let Some(output) = self.execute_line(line.as_ref(), idx + 1)? {
                outputs.push(output);
            }
        }

        info!("simulation finished: {} outputs, {} accounts", outputs.len(), self.ledger.len());
        return Ok(outputs);
    }

    pub fn run_to_strings<I, S>(&mut self, commands: I) -> Result<Vec<String>, SimulationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        let outputs = self.run(commands)?;
        Ok(outputs.iter().map(Output::to_string).collect())
    }

    /// Parses and executes one line against the current ledger, without
    /// resetting it. `Ok(None)` means the line was skipped: blank lines,
    /// `#` comments, and unrecognised commands in lenient mode.
    pub fn execute_line(&mut self, line: &str, line_no: usize) -> Result<Option<Output>, SimulationError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        match Command::parse(trimmed, self.config.delimiter) {
            Ok(command) => Ok(Some(self.execute(&command))),
            Err(err) if err.is_unrecognised() && !self.config.strict => {
                warn!("line {}: skipping: {}", line_no, err);
                Ok(None)
            },
            Err(err) => Err(SimulationError::Command { line: line_no, source: err })
        }
    }

    pub fn execute(&mut self, command: &Command) -> Output {
        let ledger = &mut self.ledger;
        match command {
            Command::Init { name, amount } => ledger.init(name, *amount).is_ok().into(),
            Command::Get { name } => ledger.get_balance(name).into(),
            Command::Deposit { name, amount } => ledger.deposit(name, *amount).is_ok().into(),
            Command::Transfer { from, to, amount } => ledger.transfer(from, to, *amount).is_ok().into(),
            Command::Withdrawal { name, amount } => ledger.withdraw(name, *amount).is_ok().into(),
            Command::Sort(SortKey::Name) => ledger.sort_by_name().into(),
            Command::Sort(SortKey::Balance) => ledger.sort_by_balance().into()
        }
    }
}
