use std::fmt;

use thiserror::Error;

use crate::core::Balance;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Balance
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let disp = match self {
            Self::Name => "name",
            Self::Balance => "balance"
        };
        write!(f, "{}", disp)
    }
}

/// One line of a simulation script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Init { name: String, amount: Balance },
    Get { name: String },
    Deposit { name: String, amount: Balance },
    Transfer { from: String, to: String, amount: Balance },
    Withdrawal { name: String, amount: Balance },
    Sort(SortKey)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
    #[error("{command} takes {expected} argument(s), got {found}")]
    WrongArity {
        command: &'static str,
        expected: usize,
        found: usize
    },
    #[error("not an integer amount: {0}")]
    InvalidNumber(String),
}

impl CommandError {
    /// Errors that name something the driver does not know about, as opposed
    /// to a known command with malformed arguments.
    pub fn is_unrecognised(&self) -> bool {
        matches!(self, Self::UnknownCommand(_) | Self::UnknownSortKey(_))
    }
}

impl Command {
    /// Parses a line such as `TRANSFER, Kim, Tammy, 100`. Tokens are split on
    /// `delimiter` and trimmed.
    pub fn parse(line: &str, delimiter: char) -> Result<Command, CommandError> {
        let tokens: Vec<&str> = line.split(delimiter).map(str::trim).collect();
        let (keyword, args) = match tokens.split_first() {
            Some((keyword, args)) if !keyword.is_empty() => (*keyword, args),
            _ => return Err(CommandError::Empty)
        };

        let command = match keyword {
            "INIT" => {
                let [name, amount] = arguments::<2>("INIT", args)?;
                Command::Init { name: name.to_owned(), amount: parse_amount(amount)? }
            },
            "GET" => {
                let [name] = arguments::<1>("GET", args)?;
                Command::Get { name: name.to_owned() }
            },
            "DEPOSIT" => {
                let [name, amount] = arguments::<2>("DEPOSIT", args)?;
                Command::Deposit { name: name.to_owned(), amount: parse_amount(amount)? }
            },
            "TRANSFER" => {
                let [from, to, amount] = arguments::<3>("TRANSFER", args)?;
                Command::Transfer {
                    from: from.to_owned(),
                    to: to.to_owned(),
                    amount: parse_amount(amount)?
                }
            },
            "WITHDRAWAL" => {
                let [name, amount] = arguments::<2>("WITHDRAWAL", args)?;
                Command::Withdrawal { name: name.to_owned(), amount: parse_amount(amount)? }
            },
            "SORT" => {
                let [key] = arguments::<1>("SORT", args)?;
                match key {
                    "name" => Command::Sort(SortKey::Name),
                    "balance" => Command::Sort(SortKey::Balance),
                    other => return Err(CommandError::UnknownSortKey(other.to_owned()))
                }
            },
            other => return Err(CommandError::UnknownCommand(other.to_owned()))
        };
        return Ok(command);
    }
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s, ',')
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init { name, amount } => write!(f, "INIT, {}, {}", name, amount),
            Self::Get { name } => write!(f, "GET, {}", name),
            Self::Deposit { name, amount } => write!(f, "DEPOSIT, {}, {}", name, amount),
            Self::Transfer { from, to, amount } => write!(f, "TRANSFER, {}, {}, {}", from, to, amount),
            Self::Withdrawal { name, amount } => write!(f, "WITHDRAWAL, {}, {}", name, amount),
            Self::Sort(key) => write!(f, "SORT, {}", key)
        }
    }
}

fn arguments<'a, const N: usize>(command: &'static str, args: &[&'a str]) -> Result<[&'a str; N], CommandError> {
    <[&str; N]>::try_from(args)
        .map_err(|_| CommandError::WrongArity { command, expected: N, found: args.len() })
}

fn parse_amount(token: &str) -> Result<Balance, CommandError> {
    token.parse::<Balance>()
        .map_err(|_| CommandError::InvalidNumber(token.to_owned()))
}
