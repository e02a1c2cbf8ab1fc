//! # Panel dependencies
//!
//! Parameter grouping for [`MoleculePanelOrchestrator`](crate::MoleculePanelOrchestrator)
//! construction. Every port is required.

use std::sync::Arc;

use mc_core::ports::{
    ChemistryEnginePort, ClipboardCapabilityPort, DispatchPort, NotificationPort, RenderExportPort,
};

pub struct PanelDeps {
    pub engine: Arc<dyn ChemistryEnginePort>,
    pub clipboard: Arc<dyn ClipboardCapabilityPort>,
    pub dispatcher: Arc<dyn DispatchPort>,
    pub notifier: Arc<dyn NotificationPort>,
    pub renderer: Arc<dyn RenderExportPort>,
}
