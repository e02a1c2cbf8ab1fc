//! # mc-core
//!
//! Core domain models and ports for the molecule clipboard interop layer.
//!
//! This crate contains pure domain logic without any infrastructure dependencies.
//! The chemistry engine, the system clipboard, the host store and the renderer
//! are only known through the traits in [`ports`].

pub mod action;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod export;
pub mod fallback;
pub mod molecule;
pub mod ports;

// Re-export commonly used types at the crate root
pub use action::HostAction;
pub use clipboard::{ClipboardOutcome, ReadOutcome};
pub use config::PanelConfig;
pub use errors::{ClipboardError, ConversionError, EngineError, ParseError, RenderExportError};
pub use export::{ExportTarget, TextFormat};
pub use fallback::{FallbackReason, FallbackState, FallbackStateMachine};
pub use molecule::{Molecule, MoleculeId, MoleculeSelection, NewMolecule};
