use async_trait::async_trait;

use crate::errors::ClipboardError;

/// Platform text clipboard.
///
/// Error semantics:
/// - Unsupported : no clipboard capability at all
/// - Denied      : capability exists but this call was rejected
#[async_trait]
pub trait ClipboardCapabilityPort: Send + Sync {
    /// Whether the capability exists in this environment.
    ///
    /// Checked before each call; `false` means the call is never attempted.
    fn is_supported(&self) -> bool;

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    async fn read_text(&self) -> Result<String, ClipboardError>;
}

#[cfg(test)]
mockall::mock! {
    pub Clipboard {}

    #[async_trait]
    impl ClipboardCapabilityPort for Clipboard {
        fn is_supported(&self) -> bool;
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
        async fn read_text(&self) -> Result<String, ClipboardError>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_clipboard_surfaces_denied_reason() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_is_supported().return_const(true);
        clipboard
            .expect_write_text()
            .returning(|_| Err(ClipboardError::Denied("no user gesture".into())));

        assert!(clipboard.is_supported());
        let err = clipboard.write_text("CCO").await.unwrap_err();
        assert_eq!(err.to_string(), "clipboard access denied: no user gesture");
    }
}
