use rust_decimal::Decimal;

pub type AccountId = String;

/// Account snapshot: identifier plus current balance.
///
/// The identifier is immutable once the account is created. The balance
/// is owned by the store and mutated only through
/// [`crate::store::AccountStore::apply_updates`]; a value of this type
/// held by a caller is a point-in-time snapshot and may be stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub account_id: AccountId,
    pub balance: Decimal,
}

impl Account {
    /// Account with zero starting balance.
    pub fn new(account_id: impl Into<AccountId>) -> Self {
        Self {
            account_id: account_id.into(),
            balance: Decimal::ZERO,
        }
    }

    pub fn with_balance(account_id: impl Into<AccountId>, balance: Decimal) -> Self {
        Self {
            account_id: account_id.into(),
            balance,
        }
    }
}

/// One leg of a transfer: a signed delta for a single account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountUpdate {
    pub account_id: AccountId,
    pub amount: Decimal,
}

impl AccountUpdate {
    pub fn new(account_id: impl Into<AccountId>, amount: Decimal) -> Self {
        Self {
            account_id: account_id.into(),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_starts_empty() {
        let acc = Account::new("Id-1");
        assert_eq!(acc.account_id, "Id-1");
        assert_eq!(acc.balance, Decimal::ZERO);
    }

    #[test]
    fn with_balance_keeps_scale() {
        let acc = Account::with_balance("Id-1", "2000.20".parse().unwrap());
        assert_eq!(acc.balance.to_string(), "2000.20");
    }
}
