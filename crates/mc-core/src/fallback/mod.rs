//! Clipboard fallback domain.
//!
//! When the native clipboard cannot complete a copy or paste silently, the user
//! is asked to do it by hand through a modal field. This module defines that
//! interaction as a pure state machine.

pub mod state_machine;

pub use state_machine::{
    FallbackAction, FallbackEvent, FallbackMode, FallbackReason, FallbackState,
    FallbackStateMachine,
};
