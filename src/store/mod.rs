use thiserror::Error;

use crate::account::{Account, AccountId, AccountUpdate};

pub mod in_memory_store;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CreateAccountError {
    #[error("Account id {0} already exists!")]
    DuplicateAccountId(AccountId),
    #[error("Account id must not be blank.")]
    BlankAccountId,
    #[error("Initial balance must not be negative.")]
    NegativeInitialBalance,
}

/// Storage contract for account balances.
///
/// All methods take `&self`; implementations must be safe to share
/// between threads and must make every single-account balance mutation
/// an indivisible read-modify-write step.
pub trait AccountStore: Send + Sync {
    /// Inserts the account if its id is absent. Exactly one of several
    /// concurrent creators of the same id wins; the rest get
    /// [`CreateAccountError::DuplicateAccountId`].
    fn create_account(&self, account: Account) -> Result<(), CreateAccountError>;

    /// Snapshot of the account, or `None` when the id was never created.
    /// Absence is a normal outcome here, not an error.
    fn get_account(&self, account_id: &str) -> Option<Account>;

    /// Removes every account. Only used to reset state between test
    /// scenarios.
    fn clear_all(&self);

    /// Adds each signed delta to the matching account's balance. Updates
    /// naming an unknown id are silently skipped, and the batch reports
    /// success once the loop completes; there is no per-update failure
    /// reporting. Callers are expected to only submit ids they have
    /// already seen in the store.
    fn apply_updates(&self, updates: &[AccountUpdate]) -> bool;
}
