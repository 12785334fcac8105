/// Account, transfer request and balance update types shared by the
/// whole crate.
pub mod account;

/// Pure transfer validation: given two account snapshots and a request,
/// decides whether the transfer may proceed.
pub mod transfer;

/// Account store interface, plus "in memory" implementation backed by a
/// concurrent map.
///
/// NOTE: Technically this interface is not necessary, but it might be
/// good integration point to replace in memory implementation with
/// something more sophisticated.
pub mod store;

/// Notification capability invoked after a successful transfer.
pub mod notification;

/// Ledger service coordinating the store, the validator and the
/// notification port.
pub mod service;

/// Ideally, this module should exists on its own crate, as a way to
/// bootstrap core logic. However, I want to use it for integration test
/// so I put it here.
pub mod bin_utils;
