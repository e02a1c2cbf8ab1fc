use std::sync::Arc;

use mc_core::{
    ports::ClipboardCapabilityPort, ClipboardOutcome, FallbackReason, ReadOutcome,
};
use tracing::{debug, warn};

/// Native clipboard access with capability detection.
///
/// The bridge only reports outcomes. It never notifies and never retries;
/// a retry is a user action through the fallback modal.
#[derive(Clone)]
pub struct ClipboardBridge {
    clipboard: Arc<dyn ClipboardCapabilityPort>,
}

impl ClipboardBridge {
    pub fn new(clipboard: Arc<dyn ClipboardCapabilityPort>) -> Self {
        Self { clipboard }
    }

    pub async fn write(&self, text: &str) -> ClipboardOutcome {
        if !self.clipboard.is_supported() {
            debug!("clipboard write skipped: capability absent");
            return ClipboardOutcome::FallbackRequired(FallbackReason::Unsupported);
        }

        match self.clipboard.write_text(text).await {
            Ok(()) => ClipboardOutcome::Completed,
            Err(err) => {
                warn!(error = %err, "clipboard write rejected");
                ClipboardOutcome::FallbackRequired(err.into())
            }
        }
    }

    pub async fn read(&self) -> ReadOutcome {
        if !self.clipboard.is_supported() {
            debug!("clipboard read skipped: capability absent");
            return ReadOutcome::FallbackRequired(FallbackReason::Unsupported);
        }

        match self.clipboard.read_text().await {
            Ok(text) => ReadOutcome::Text(text),
            Err(err) => {
                warn!(error = %err, "clipboard read rejected");
                ReadOutcome::FallbackRequired(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::MockClipboard;
    use mc_core::ClipboardError;

    #[tokio::test]
    async fn absent_capability_is_unsupported_without_calling() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_is_supported().return_const(false);
        clipboard.expect_write_text().never();
        clipboard.expect_read_text().never();

        let bridge = ClipboardBridge::new(Arc::new(clipboard));
        assert_eq!(
            bridge.write("CCO").await,
            ClipboardOutcome::FallbackRequired(FallbackReason::Unsupported)
        );
        assert_eq!(
            bridge.read().await,
            ReadOutcome::FallbackRequired(FallbackReason::Unsupported)
        );
    }

    #[tokio::test]
    async fn rejected_call_is_denied() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_is_supported().return_const(true);
        clipboard
            .expect_write_text()
            .times(1)
            .returning(|_| Err(ClipboardError::Denied("permission denied".into())));

        let bridge = ClipboardBridge::new(Arc::new(clipboard));
        assert_eq!(
            bridge.write("CCO").await,
            ClipboardOutcome::FallbackRequired(FallbackReason::Denied("permission denied".into()))
        );
    }

    #[tokio::test]
    async fn successful_calls_complete() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_is_supported().return_const(true);
        clipboard
            .expect_write_text()
            .withf(|text| text == "CCO")
            .times(1)
            .returning(|_| Ok(()));
        clipboard
            .expect_read_text()
            .times(1)
            .returning(|| Ok("c1ccccc1".into()));

        let bridge = ClipboardBridge::new(Arc::new(clipboard));
        assert_eq!(bridge.write("CCO").await, ClipboardOutcome::Completed);
        assert_eq!(bridge.read().await, ReadOutcome::Text("c1ccccc1".into()));
    }
}
