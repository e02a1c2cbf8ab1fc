//! Panel use cases
//!
//! [ExportDispatcher] ──► [StructureConverter] ──► [ClipboardBridge]
//!                                                      │ fallback required
//! [PasteIngestor] ◄── manual text ◄── [FallbackCoordinator] ◄┘

pub mod clipboard_bridge;
pub mod convert_structure;
pub mod export_dispatcher;
pub mod fallback_coordinator;
pub mod header_model;
pub mod molecule_actions;
pub mod paste_ingestor;

#[cfg(test)]
pub(crate) mod test_support;

pub use clipboard_bridge::ClipboardBridge;
pub use convert_structure::StructureConverter;
pub use export_dispatcher::{ExportDispatcher, ExportOutcome};
pub use fallback_coordinator::{FallbackCoordinator, FallbackTicket};
pub use header_model::{Counter, HeaderModel, RenderSource, ToolId, ToolState};
pub use molecule_actions::{IndexChangeListener, MoleculeActions};
pub use paste_ingestor::{PasteIngestor, PasteResult};
