//! Fallback state machine.
//!
//! Defines a pure state transition function for the manual clipboard flow.

use serde::{Deserialize, Serialize};

use crate::errors::ClipboardError;

/// Why the native clipboard path could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum FallbackReason {
    Unsupported,
    Denied(String),
}

impl From<ClipboardError> for FallbackReason {
    fn from(err: ClipboardError) -> Self {
        match err {
            ClipboardError::Unsupported => FallbackReason::Unsupported,
            ClipboardError::Denied(message) => FallbackReason::Denied(message),
        }
    }
}

/// Coarse mode of the fallback interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallbackMode {
    Inactive,
    AwaitingRead,
    AwaitingWrite,
}

/// Fallback flow state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallbackState {
    #[default]
    Inactive,
    /// A copy failed; `text` is shown so the user can copy it by hand.
    AwaitingWrite { text: String, reason: FallbackReason },
    /// A paste failed; an input field waits for the user to paste into it.
    AwaitingRead { reason: FallbackReason },
}

impl FallbackState {
    pub fn mode(&self) -> FallbackMode {
        match self {
            FallbackState::Inactive => FallbackMode::Inactive,
            FallbackState::AwaitingRead { .. } => FallbackMode::AwaitingRead,
            FallbackState::AwaitingWrite { .. } => FallbackMode::AwaitingWrite,
        }
    }

    /// Text that failed to copy. Only set while awaiting a manual write.
    pub fn pending_text(&self) -> Option<&str> {
        match self {
            FallbackState::AwaitingWrite { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn reason(&self) -> Option<&FallbackReason> {
        match self {
            FallbackState::Inactive => None,
            FallbackState::AwaitingWrite { reason, .. } | FallbackState::AwaitingRead { reason } => {
                Some(reason)
            }
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, FallbackState::Inactive)
    }
}

/// Events that drive the fallback flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackEvent {
    /// Native write did not complete.
    WriteFailed { text: String, reason: FallbackReason },
    /// Native read did not complete.
    ReadFailed { reason: FallbackReason },
    /// A later native write went through.
    WriteSucceeded,
    /// User submitted text in the manual paste field.
    ManualTextSubmitted { text: String },
    /// User closed the modal.
    Dismissed,
    /// Paste ingestion ran to completion, successful or not.
    IngestFinished,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackAction {
    /// Show a read-only field holding the text to copy by hand.
    PresentCopyField { text: String },
    /// Show an input field to paste into by hand.
    PresentPasteField,
    /// Hand manually pasted text to the paste ingestor.
    IngestText { text: String },
    CloseModal,
}

/// Pure fallback state machine: no side effects.
pub struct FallbackStateMachine;

impl FallbackStateMachine {
    pub fn transition(
        state: FallbackState,
        event: FallbackEvent,
    ) -> (FallbackState, Vec<FallbackAction>) {
        match (state, event) {
            // A new failure replaces whatever is pending.
            (_, FallbackEvent::WriteFailed { text, reason }) => (
                FallbackState::AwaitingWrite {
                    text: text.clone(),
                    reason,
                },
                vec![FallbackAction::PresentCopyField { text }],
            ),
            (_, FallbackEvent::ReadFailed { reason }) => (
                FallbackState::AwaitingRead { reason },
                vec![FallbackAction::PresentPasteField],
            ),
            (FallbackState::AwaitingRead { reason }, FallbackEvent::ManualTextSubmitted { text }) => (
                FallbackState::AwaitingRead { reason },
                vec![FallbackAction::IngestText { text }],
            ),
            (FallbackState::AwaitingWrite { .. }, FallbackEvent::WriteSucceeded) => {
                (FallbackState::Inactive, vec![FallbackAction::CloseModal])
            }
            (FallbackState::AwaitingRead { .. }, FallbackEvent::IngestFinished) => {
                (FallbackState::Inactive, vec![FallbackAction::CloseModal])
            }
            (
                FallbackState::AwaitingRead { .. } | FallbackState::AwaitingWrite { .. },
                FallbackEvent::Dismissed,
            ) => (FallbackState::Inactive, vec![FallbackAction::CloseModal]),
            (state, _event) => (state, Vec::new()),
        }
    }
}
