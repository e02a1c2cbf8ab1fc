//! Outcomes of clipboard attempts.

use crate::fallback::FallbackReason;

/// Result of a clipboard write attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardOutcome {
    /// The native capability succeeded
    Completed,
    FallbackRequired(FallbackReason),
}

/// Result of a clipboard read attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Text(String),
    FallbackRequired(FallbackReason),
}
