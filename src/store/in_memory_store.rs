use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rust_decimal::Decimal;

use crate::account::{Account, AccountId, AccountUpdate};

use super::{AccountStore, CreateAccountError};

/// Account store backed by a sharded concurrent map.
///
/// Each map operation locks only the shard holding the key, so updates
/// to distinct accounts proceed in parallel while a single account's
/// read-modify-write stays indivisible. The two legs of a transfer are
/// applied one after the other; a concurrent reader can observe the
/// state between them (known consistency gap, see [`crate::service`]).
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: DashMap<AccountId, Account>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every account, in no particular order.
    pub fn accounts(&self) -> Vec<Account> {
        self.accounts.iter().map(|entry| entry.value().clone()).collect()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn create_account(&self, account: Account) -> Result<(), CreateAccountError> {
        if account.account_id.trim().is_empty() {
            return Err(CreateAccountError::BlankAccountId);
        }
        if account.balance < Decimal::ZERO {
            return Err(CreateAccountError::NegativeInitialBalance);
        }
        match self.accounts.entry(account.account_id.clone()) {
            Entry::Occupied(entry) => Err(CreateAccountError::DuplicateAccountId(
                entry.key().clone(),
            )),
            Entry::Vacant(entry) => {
                entry.insert(account);
                Ok(())
            }
        }
    }

    fn get_account(&self, account_id: &str) -> Option<Account> {
        self.accounts.get(account_id).map(|entry| entry.value().clone())
    }

    fn clear_all(&self) {
        self.accounts.clear();
    }

    fn apply_updates(&self, updates: &[AccountUpdate]) -> bool {
        for update in updates {
            // get_mut holds the shard lock for the whole add
            if let Some(mut account) = self.accounts.get_mut(&update.account_id) {
                account.balance += update.amount;
            }
        }
        true
    }
}
