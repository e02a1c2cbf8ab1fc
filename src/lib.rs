//! Molecule panel library
//!
//! Wires the molecule panel use cases (`mc-app`) to their platform adapters
//! (`mc-platform`) and owns process-level setup: tracing and configuration.

pub mod bootstrap;

pub use bootstrap::config::load_config;
pub use bootstrap::tracing::init_tracing_subscriber;
pub use bootstrap::wiring::{PanelBuilder, PanelRuntime};
