use rust_decimal::Decimal;
use thiserror::Error;

use crate::account::{Account, AccountId};

/// Request to move a positive amount from one account to another.
/// Lives only for the duration of one service call.
#[derive(Debug, Clone)]
pub struct Transfer {
    pub account_from_id: AccountId,
    pub account_to_id: AccountId,
    pub amount: Decimal,
}

impl Transfer {
    pub fn new(
        account_from_id: impl Into<AccountId>,
        account_to_id: impl Into<AccountId>,
        amount: Decimal,
    ) -> Self {
        Self {
            account_from_id: account_from_id.into(),
            account_to_id: account_to_id.into(),
            amount,
        }
    }
}

/// Which leg of the transfer an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferSide {
    Source,
    Destination,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferError {
    #[error("Account {account_id} not found.")]
    AccountNotFound {
        side: TransferSide,
        account_id: AccountId,
    },
    #[error("Transfer to self not permitted.")]
    SelfTransfer,
    #[error("Not enough funds on account {account_id} balance={balance}")]
    InsufficientFunds {
        account_id: AccountId,
        balance: Decimal,
    },
    #[error("Transfer amount must be positive.")]
    NonPositiveAmount,
}

/// Validates a transfer against the two account snapshots fetched by the
/// caller. First failing check wins, in this order: source exists,
/// destination exists, source differs from destination, source covers the
/// amount.
///
/// Pure and side effect free; on success returns the two snapshots back
/// so the caller can keep working with proven-present accounts.
pub fn validate<'a>(
    account_from: Option<&'a Account>,
    account_to: Option<&'a Account>,
    transfer: &Transfer,
) -> Result<(&'a Account, &'a Account), TransferError> {
    let Some(from) = account_from else {
        return Err(TransferError::AccountNotFound {
            side: TransferSide::Source,
            account_id: transfer.account_from_id.clone(),
        });
    };
    let Some(to) = account_to else {
        return Err(TransferError::AccountNotFound {
            side: TransferSide::Destination,
            account_id: transfer.account_to_id.clone(),
        });
    };
    if transfer.account_from_id == transfer.account_to_id {
        return Err(TransferError::SelfTransfer);
    }
    if from.balance - transfer.amount < Decimal::ZERO {
        return Err(TransferError::InsufficientFunds {
            account_id: from.account_id.clone(),
            balance: from.balance,
        });
    }
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn missing_source_reported_first() {
        let to = Account::with_balance("Id-2", dec("100"));
        let transfer = Transfer::new("Id-1", "Id-2", dec("10"));
        let err = validate(None, Some(&to), &transfer).unwrap_err();
        assert_eq!(
            err,
            TransferError::AccountNotFound {
                side: TransferSide::Source,
                account_id: "Id-1".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Account Id-1 not found.");
    }

    #[test]
    fn missing_destination_reported_second() {
        let from = Account::with_balance("Id-1", dec("100"));
        let transfer = Transfer::new("Id-1", "Id-2", dec("10"));
        let err = validate(Some(&from), None, &transfer).unwrap_err();
        assert_eq!(
            err,
            TransferError::AccountNotFound {
                side: TransferSide::Destination,
                account_id: "Id-2".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Account Id-2 not found.");
    }

    #[test]
    fn transfer_to_self_rejected() {
        let acc = Account::with_balance("Id-1", dec("100"));
        let transfer = Transfer::new("Id-1", "Id-1", dec("10"));
        let err = validate(Some(&acc), Some(&acc), &transfer).unwrap_err();
        assert_eq!(err, TransferError::SelfTransfer);
        assert_eq!(err.to_string(), "Transfer to self not permitted.");
    }

    #[test]
    fn self_check_precedes_funds_check() {
        // even with insufficient funds, a self transfer reports SelfTransfer
        let acc = Account::with_balance("Id-1", dec("1"));
        let transfer = Transfer::new("Id-1", "Id-1", dec("10"));
        let err = validate(Some(&acc), Some(&acc), &transfer).unwrap_err();
        assert_eq!(err, TransferError::SelfTransfer);
    }

    #[test]
    fn insufficient_funds_carries_balance() {
        let from = Account::with_balance("Id-1", dec("20.50"));
        let to = Account::with_balance("Id-2", dec("1000.00"));
        let transfer = Transfer::new("Id-1", "Id-2", dec("21"));
        let err = validate(Some(&from), Some(&to), &transfer).unwrap_err();
        assert_eq!(
            err,
            TransferError::InsufficientFunds {
                account_id: "Id-1".to_string(),
                balance: dec("20.50"),
            }
        );
        assert_eq!(
            err.to_string(),
            "Not enough funds on account Id-1 balance=20.50"
        );
    }

    #[test]
    fn exact_balance_is_enough() {
        let from = Account::with_balance("Id-1", dec("2000.20"));
        let to = Account::with_balance("Id-2", dec("100.00"));
        let transfer = Transfer::new("Id-1", "Id-2", dec("2000.20"));
        let (f, t) = validate(Some(&from), Some(&to), &transfer).unwrap();
        assert_eq!(f.account_id, "Id-1");
        assert_eq!(t.account_id, "Id-2");
    }
}
