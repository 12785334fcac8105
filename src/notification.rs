use tracing::info;

use crate::account::Account;

/// Capability invoked once per affected account after a successful
/// transfer. Implementations could send an email or an SMS; the ledger
/// core only depends on this trait and treats delivery as
/// fire-and-forget.
pub trait NotificationService: Send + Sync {
    fn notify_about_transfer(&self, account: &Account, description: &str);
}

/// Default adapter: emits the notification as a log event.
#[derive(Debug, Default)]
pub struct LoggingNotificationService;

impl NotificationService for LoggingNotificationService {
    fn notify_about_transfer(&self, account: &Account, description: &str) {
        info!(
            account_id = %account.account_id,
            "Sending notification to owner: {description}"
        );
    }
}
