use mc_core::ports::{NotificationPort, Severity};
use tracing::{error, info, warn};

/// Notification sink that writes every toast to the log.
///
/// Useful headless and as the default until a UI registers its own sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationPort for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success | Severity::Info => info!(?severity, "{message}"),
            Severity::Warning => warn!("{message}"),
            Severity::Danger => error!("{message}"),
        }
    }
}
