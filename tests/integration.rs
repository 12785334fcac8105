use std::{
    collections::HashSet,
    str::from_utf8,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use mini_ledger::bin_utils::{OperationError, Service};

const TEST_FILE: &str = include_str!("operations.csv");

#[test]
fn process_operations() {
    let mut output = Vec::new();
    let domain_failures = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&domain_failures);
    let service = Service {
        input: TEST_FILE.as_bytes(),
        output: &mut output,
        error_printer: Box::new(move |line, err| {
            match err {
                OperationError::LedgerErr(_) => {
                    // expected domain outcomes: duplicate create, failed transfers
                    counter.fetch_add(1, Ordering::Relaxed);
                }
                err => panic!("unexpected technical error at line {line}: {err}"),
            }
        }),
    };
    service.run().unwrap();

    // rejected: duplicate Id-2 create, insufficient funds, self transfer,
    // unknown source account
    assert_eq!(domain_failures.load(Ordering::Relaxed), 4);

    // since underlying for accounts container uses cryptographic hash function
    // results are randomized, so we collect lines into hashset
    let lines: HashSet<String> = from_utf8(&output)
        .unwrap()
        .lines()
        .map(ToOwned::to_owned)
        .collect();
    assert_eq!(lines.len(), 4);
    assert!(lines.contains("account,balance"));
    assert!(lines.contains("Id-1,0.00"));
    assert!(lines.contains("Id-2,2100.20"));
    assert!(lines.contains("Id-3,0"));
}
