use std::fmt;

use serde::{Serialize, Deserialize};

pub type Balance = i64;

#[derive(Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Account {
    name: String,
    balance: Balance,
}

impl Account {
    pub fn new(name: &str, balance: Balance) -> Account {
        Account { name: name.to_owned(), balance }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    pub(crate) fn set_balance(&mut self, balance: Balance) {
        self.balance = balance;
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.balance)
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account {} ({})", self.name, self.balance)
    }
}
