use std::collections::HashMap;

use log::{debug, trace};

use crate::core::account::{Account, Balance};
use crate::core::error::{LedgerError, LedgerResult};
use crate::core::sort;

/// Owned, insertion-ordered collection of named accounts.
///
/// Lookups go through a name index; the account vector keeps creation
/// order, which is the input order for the sorted views.
#[derive(Default, Debug)]
pub struct Ledger {
    accounts: Vec<Account>,
    index: HashMap<String, usize>,
}

impl Ledger {
    /// Returned by [`Ledger::get_balance`] when no account has the given name.
    pub const BALANCE_NOT_FOUND: Balance = -1;

    pub fn new() -> Ledger {
        return Ledger { accounts: Vec::new(), index: HashMap::new() };
    }

    pub fn reset(&mut self) {
        self.accounts.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get_account(&self, name: &str) -> Option<&Account> {
        self.index.get(name).map(|&idx| &self.accounts[idx])
    }

    pub fn balance(&self, name: &str) -> Option<Balance> {
        self.get_account(name).map(Account::balance)
    }

    /// Balance of `name`, or [`Ledger::BALANCE_NOT_FOUND`].
    pub fn get_balance(&self, name: &str) -> Balance {
        self.balance(name).unwrap_or(Self::BALANCE_NOT_FOUND)
    }

    pub fn init(&mut self, name: &str, initial_balance: Balance) -> LedgerResult<()> {
        if initial_balance < 0 {
            return Err(rejected("init", LedgerError::InvalidAmount(initial_balance)));
        }
        if self.index.contains_key(name) {
            return Err(rejected("init", LedgerError::DuplicateAccount(name.to_owned())));
        }

        self.index.insert(name.to_owned(), self.accounts.len());
        self.accounts.push(Account::new(name, initial_balance));
        trace!("opened account {} with {}", name, initial_balance);
        return Ok(());
    }

    pub fn deposit(&mut self, name: &str, amount: Balance) -> LedgerResult<()> {
        let idx = self.find(name).map_err(|err| rejected("deposit", err))?;
        check_amount(amount).map_err(|err| rejected("deposit", err))?;

        let account = &mut self.accounts[idx];
        let new_balance = account.balance().checked_add(amount)
            .ok_or_else(|| rejected("deposit", LedgerError::BalanceOverflow(name.to_owned())))?;
        account.set_balance(new_balance);
        trace!("deposited {} into {}", amount, name);
        return Ok(());
    }

    pub fn withdraw(&mut self, name: &str, amount: Balance) -> LedgerResult<()> {
        let idx = self.find(name).map_err(|err| rejected("withdraw", err))?;
        check_amount(amount).map_err(|err| rejected("withdraw", err))?;
        check_funds(&self.accounts[idx], amount).map_err(|err| rejected("withdraw", err))?;

        let account = &mut self.accounts[idx];
        account.set_balance(account.balance() - amount);
        trace!("withdrew {} from {}", amount, name);
        return Ok(());
    }

    /// Moves `amount` from one account to another. Both accounts must exist
    /// and the sender must hold at least `amount`. A transfer to the same
    /// account passes the same checks and changes nothing.
    pub fn transfer(&mut self, from: &str, to: &str, amount: Balance) -> LedgerResult<()> {
        let from_idx = self.find(from).map_err(|err| rejected("transfer", err))?;
        let to_idx = self.find(to).map_err(|err| rejected("transfer", err))?;
        check_amount(amount).map_err(|err| rejected("transfer", err))?;
        check_funds(&self.accounts[from_idx], amount).map_err(|err| rejected("transfer", err))?;

        if from_idx == to_idx {
            return Ok(());
        }

        let credited = self.accounts[to_idx].balance().checked_add(amount)
            .ok_or_else(|| rejected("transfer", LedgerError::BalanceOverflow(to.to_owned())))?;
        let debited = self.accounts[from_idx].balance() - amount;

        self.accounts[from_idx].set_balance(debited);
        self.accounts[to_idx].set_balance(credited);
        trace!("transferred {} from {} to {}", amount, from, to);
        return Ok(());
    }

    pub fn sort_by_name(&self) -> Vec<String> {
        sort::sort_by_name(&self.accounts)
    }

    pub fn sort_by_balance(&self) -> Vec<String> {
        sort::sort_by_balance(&self.accounts)
    }

    fn find(&self, name: &str) -> LedgerResult<usize> {
        self.index.get(name)
            .copied()
            .ok_or_else(|| LedgerError::NotFound(name.to_owned()))
    }
}

fn check_amount(amount: Balance) -> LedgerResult<()> {
    if amount < 0 {
        return Err(LedgerError::InvalidAmount(amount));
    }
    Ok(())
}

fn check_funds(account: &Account, amount: Balance) -> LedgerResult<()> {
    if account.balance() < amount {
        return Err(LedgerError::InsufficientFunds {
            name: account.name().to_owned(),
            balance: account.balance(),
            requested: amount
        });
    }
    Ok(())
}

fn rejected(operation: &str, err: LedgerError) -> LedgerError {
    debug!("{} rejected: {}", operation, err);
    err
}
