use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{Account, AccountUpdate},
    notification::{LoggingNotificationService, NotificationService},
    store::{AccountStore, CreateAccountError, in_memory_store::InMemoryAccountStore},
    transfer::{Transfer, TransferError, validate},
};

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    CreateErr(#[from] CreateAccountError),
    #[error(transparent)]
    TransferErr(#[from] TransferError),
}

/// Coordinates the store, the validator and the notification port.
///
/// A transfer validates against snapshots fetched once at the start and
/// does not re-validate before applying the updates, so a concurrent
/// transfer may drain the source between validation and apply. The
/// reference behavior tolerates this window; tightening it would need
/// cross-account locking in the store.
pub struct LedgerService<S, N> {
    store: S,
    notification_service: N,
}

impl LedgerService<InMemoryAccountStore, LoggingNotificationService> {
    /// Service with the default in-memory store and logging notifier.
    pub fn in_memory() -> Self {
        Self::new(InMemoryAccountStore::new(), LoggingNotificationService)
    }
}

impl<S, N> LedgerService<S, N>
where
    S: AccountStore,
    N: NotificationService,
{
    pub fn new(store: S, notification_service: N) -> Self {
        Self {
            store,
            notification_service,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create_account(&self, account: Account) -> Result<(), CreateAccountError> {
        self.store.create_account(account)
    }

    pub fn get_account(&self, account_id: &str) -> Option<Account> {
        self.store.get_account(account_id)
    }

    /// Moves `transfer.amount` from the source account to the
    /// destination account and notifies both owners on success. On any
    /// validation failure no balance changes.
    pub fn transfer(&self, transfer: &Transfer) -> Result<(), TransferError> {
        if transfer.amount <= Decimal::ZERO {
            return Err(TransferError::NonPositiveAmount);
        }

        let account_from = self.store.get_account(&transfer.account_from_id);
        let account_to = self.store.get_account(&transfer.account_to_id);
        let (account_from, account_to) =
            validate(account_from.as_ref(), account_to.as_ref(), transfer)?;

        // the two legs go in as one batch, but the store applies them
        // one by one; a reader may observe the debited-only state
        let successful = self.store.apply_updates(&[
            AccountUpdate::new(transfer.account_from_id.clone(), -transfer.amount),
            AccountUpdate::new(transfer.account_to_id.clone(), transfer.amount),
        ]);

        if successful {
            self.notification_service.notify_about_transfer(
                account_from,
                &format!(
                    "The transfer to the account with ID {} is now complete for the amount of {}.",
                    account_to.account_id, transfer.amount
                ),
            );
            self.notification_service.notify_about_transfer(
                account_to,
                &format!(
                    "The account with ID {} has transferred {} into your account.",
                    account_from.account_id, transfer.amount
                ),
            );
        }
        Ok(())
    }
}
