use std::fs::File;

use anyhow::{Context, Result};
use mini_ledger::bin_utils::{self, Service};

fn main() -> Result<()> {
    bin_utils::init_tracing();

    let filename = std::env::args()
        .nth(1)
        .context("Expected a file name as the first argument")?;
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        error_printer: Box::new(|line, err| {
            match err {
                mini_ledger::bin_utils::OperationError::LedgerErr(_) => {
                    // these are expected domain outcomes, so we don't need to print them
                }
                err => {
                    eprintln!("Error at line {line}: {err}")
                }
            }
        }),
    };
    service.run()
}
