//! Molecule panel application layer
//!
//! This crate contains the use cases behind the molecule panel header: export
//! to clipboard / image / SVG, paste from clipboard, the manual clipboard
//! fallback, and the per-molecule toolbar actions.

pub mod deps;
pub mod error;
pub mod orchestrator;
pub mod usecases;

pub use deps::PanelDeps;
pub use error::PanelError;
pub use orchestrator::{MoleculePanelOrchestrator, PasteOutcome};
