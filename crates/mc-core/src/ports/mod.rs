//! Port interfaces for the application layer
//!
//! Ports define the contract between the panel use cases and the outside
//! world: the chemistry engine, the system clipboard, the host store, the
//! notification sink and the renderer. Use cases depend only on these traits,
//! so every one of them can be exercised without a real clipboard or engine.

pub mod chemistry;
pub mod clipboard;
pub mod dispatch;
pub mod notification;
pub mod render;

pub use chemistry::{ChemistryEnginePort, HydrogenMode, MoleculeHandle};
pub use clipboard::ClipboardCapabilityPort;
pub use dispatch::DispatchPort;
pub use notification::{NotificationPort, Severity};
pub use render::RenderExportPort;
