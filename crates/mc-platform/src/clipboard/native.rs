use std::sync::{Arc, Mutex, PoisonError};

use arboard::Clipboard;
use async_trait::async_trait;
use mc_core::{ports::ClipboardCapabilityPort, ClipboardError};
use tokio::task::spawn_blocking;
use tracing::{debug, warn};

/// System clipboard through `arboard`.
///
/// If no clipboard can be opened at construction (headless session, no
/// display server) the adapter reports itself unsupported and every call
/// goes to the manual fallback. Clipboard calls block, so they run on the
/// blocking pool.
pub struct NativeClipboard {
    inner: Arc<Mutex<Option<Clipboard>>>,
}

impl NativeClipboard {
    pub fn new() -> Self {
        let clipboard = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                warn!(error = %err, "system clipboard unavailable, manual fallback only");
                None
            }
        };
        Self {
            inner: Arc::new(Mutex::new(clipboard)),
        }
    }

    async fn with_clipboard<T, F>(&self, f: F) -> Result<T, ClipboardError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Clipboard) -> Result<T, arboard::Error> + Send + 'static,
    {
        let inner = self.inner.clone();
        spawn_blocking(move || {
            let mut guard = inner.lock().unwrap_or_else(PoisonError::into_inner);
            let clipboard = guard.as_mut().ok_or(ClipboardError::Unsupported)?;
            f(clipboard).map_err(map_clipboard_err)
        })
        .await
        .map_err(|e| ClipboardError::Denied(format!("clipboard task failed: {e}")))?
    }
}

impl Default for NativeClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn map_clipboard_err(err: arboard::Error) -> ClipboardError {
    match err {
        arboard::Error::ClipboardNotSupported => ClipboardError::Unsupported,
        other => ClipboardError::Denied(other.to_string()),
    }
}

#[async_trait]
impl ClipboardCapabilityPort for NativeClipboard {
    fn is_supported(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let owned = text.to_owned();
        self.with_clipboard(move |clipboard| clipboard.set_text(owned))
            .await?;
        debug!(len = text.len(), "text written to system clipboard");
        Ok(())
    }

    async fn read_text(&self) -> Result<String, ClipboardError> {
        self.with_clipboard(|clipboard| match clipboard.get_text() {
            // an empty clipboard is an empty paste, not a failure
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            other => other,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn without_display() -> NativeClipboard {
        NativeClipboard {
            inner: Arc::new(Mutex::new(None)),
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn missing_clipboard_reports_unsupported_from_blocking_pool() {
        let clipboard = without_display();

        assert!(!clipboard.is_supported());
        let (write, read) = tokio::join!(clipboard.write_text("CCO"), clipboard.read_text());
        assert_eq!(write, Err(ClipboardError::Unsupported));
        assert_eq!(read, Err(ClipboardError::Unsupported));
    }

    #[test]
    fn not_supported_maps_to_unsupported_other_errors_to_denied() {
        assert_eq!(
            map_clipboard_err(arboard::Error::ClipboardNotSupported),
            ClipboardError::Unsupported
        );
        assert!(matches!(
            map_clipboard_err(arboard::Error::ClipboardOccupied),
            ClipboardError::Denied(_)
        ));
    }
}
