//! This module could be a separate crate on its own, to bootstrap [`mini_ledger`] within binary
//! but for simplicitly purposes, I include this module directly in binary.

use std::io::{Read, Write};

use anyhow::Result;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::{
    account::Account,
    notification::LoggingNotificationService,
    service::{LedgerError, LedgerService},
    store::in_memory_store::InMemoryAccountStore,
    transfer::Transfer,
};
use csv_parser::{CsvOperationParser, Operation, OperationKind};
use csv_printer::{BalanceRow, print_balances};

pub mod csv_parser;
pub mod csv_printer;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("Destination account is required for a transfer")]
    DestinationRequired,
    #[error("Amount is required for a transfer")]
    AmountRequired,
    #[error(transparent)]
    LedgerErr(#[from] LedgerError),
}

/// Log to stderr, filtered via `RUST_LOG` (defaults to `info`), so the
/// notification events of [`LoggingNotificationService`] are visible.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, OperationError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input);

        let ledger = LedgerService::in_memory();

        for (line, row) in parser {
            if let Err(err) = apply_operation(&ledger, row) {
                (self.error_printer)(line, err);
            }
        }

        print_balances(
            self.output,
            ledger.store().accounts().into_iter().map(|acc| BalanceRow {
                account: acc.account_id,
                balance: acc.balance,
            }),
        )
    }
}

fn apply_operation(
    ledger: &LedgerService<InMemoryAccountStore, LoggingNotificationService>,
    row: Operation,
) -> Result<(), OperationError> {
    match row.op {
        OperationKind::Create => {
            let balance = row.amount.unwrap_or(Decimal::ZERO);
            ledger
                .create_account(Account::with_balance(row.account, balance))
                .map_err(LedgerError::from)?;
        }
        OperationKind::Transfer => {
            let to = row.to.ok_or(OperationError::DestinationRequired)?;
            let amount = row.amount.ok_or(OperationError::AmountRequired)?;
            ledger
                .transfer(&Transfer::new(row.account, to, amount))
                .map_err(LedgerError::from)?;
        }
    }
    Ok(())
}
