use std::sync::Arc;

use mc_core::{
    ports::{ChemistryEnginePort, DispatchPort, NotificationPort, Severity},
    EngineError, HostAction, NewMolecule, ParseError,
};
use tracing::{debug, info, warn};

use super::FallbackCoordinator;

/// Outcome of a paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteResult {
    /// Nothing (or only whitespace) was pasted
    Empty,
    /// Structures handed to the host, in source order
    Added(Vec<NewMolecule>),
    Failed(ParseError),
}

/// Turns pasted text into new molecules for the host store.
///
/// Ingestion is the last step of a manual paste, so it always clears a
/// pending fallback read, whatever the outcome.
pub struct PasteIngestor {
    engine: Arc<dyn ChemistryEnginePort>,
    dispatcher: Arc<dyn DispatchPort>,
    notifier: Arc<dyn NotificationPort>,
    coordinator: Arc<FallbackCoordinator>,
    failure_message: String,
}

impl PasteIngestor {
    pub fn new(
        engine: Arc<dyn ChemistryEnginePort>,
        dispatcher: Arc<dyn DispatchPort>,
        notifier: Arc<dyn NotificationPort>,
        coordinator: Arc<FallbackCoordinator>,
        failure_message: impl Into<String>,
    ) -> Self {
        Self {
            engine,
            dispatcher,
            notifier,
            coordinator,
            failure_message: failure_message.into(),
        }
    }

    pub fn ingest(&self, raw_text: &str) -> PasteResult {
        let result = self.parse_and_dispatch(raw_text);
        self.coordinator.ingest_finished();
        result
    }

    fn parse_and_dispatch(&self, raw_text: &str) -> PasteResult {
        if raw_text.trim().is_empty() {
            debug!("empty paste ignored");
            return PasteResult::Empty;
        }

        let parsed = self.engine.parse_any(raw_text).and_then(|molecules| {
            if molecules.is_empty() {
                Err(EngineError::Unrecognized)
            } else {
                Ok(molecules)
            }
        });

        match parsed {
            Ok(molecules) => {
                info!(count = molecules.len(), "pasted molecules added");
                self.dispatcher.dispatch(HostAction::AddMolecules {
                    molecules: molecules.clone(),
                });
                PasteResult::Added(molecules)
            }
            Err(source) => {
                warn!(error = %source, len = raw_text.len(), "pasted text not recognized");
                self.notifier.notify(&self.failure_message, Severity::Danger);
                PasteResult::Failed(ParseError { source })
            }
        }
    }
}
