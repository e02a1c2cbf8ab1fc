use async_trait::async_trait;
use mc_core::{ports::ClipboardCapabilityPort, ClipboardError};

/// Clipboard that never touches the system clipboard.
///
/// Every copy and paste goes through the manual modal. Used where clipboard
/// access is not wanted or not possible (kiosk setups, remote sessions).
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackOnlyClipboard;

#[async_trait]
impl ClipboardCapabilityPort for FallbackOnlyClipboard {
    fn is_supported(&self) -> bool {
        false
    }

    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unsupported)
    }

    async fn read_text(&self) -> Result<String, ClipboardError> {
        Err(ClipboardError::Unsupported)
    }
}
