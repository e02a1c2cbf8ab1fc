//! Molecule panel orchestrator.
//!
//! Entry point for every user gesture on the panel header. Gestures are
//! serialized through a dispatch lock; dismissing the fallback modal is the
//! only call that bypasses it. A dismissal stops awaiting any clipboard call
//! still in flight, which releases the lock for the next gesture.

use std::sync::Arc;

use mc_core::{
    fallback::{FallbackAction, FallbackState},
    molecule::MoleculesView,
    ports::HydrogenMode,
    ExportTarget, MoleculeSelection, PanelConfig, ReadOutcome,
};
use tokio::sync::{watch, Mutex};
use tracing::{debug, info_span, warn, Instrument};

use crate::usecases::{
    ClipboardBridge, ExportDispatcher, ExportOutcome, FallbackCoordinator, HeaderModel,
    IndexChangeListener, MoleculeActions, PasteIngestor, PasteResult, RenderSource,
    StructureConverter,
};
use crate::PanelDeps;

/// Callback run when the paste button is pressed, before the clipboard is read.
pub type PasteClickListener = Arc<dyn Fn() + Send + Sync>;

/// What a paste gesture ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    Ingested(PasteResult),
    /// Native read failed; waiting for manual input
    FallbackPending,
    /// The read finished after the user had moved on
    Discarded,
}

pub struct MoleculePanelOrchestrator {
    dispatch_lock: Mutex<()>,
    coordinator: Arc<FallbackCoordinator>,
    bridge: ClipboardBridge,
    exporter: ExportDispatcher,
    ingestor: PasteIngestor,
    actions: MoleculeActions,
    on_paste_click: Option<PasteClickListener>,
}

impl MoleculePanelOrchestrator {
    pub fn new(deps: PanelDeps, config: &PanelConfig) -> Self {
        let PanelDeps {
            engine,
            clipboard,
            dispatcher,
            notifier,
            renderer,
        } = deps;

        let coordinator = Arc::new(FallbackCoordinator::new());
        let bridge = ClipboardBridge::new(clipboard);
        let exporter = ExportDispatcher::new(
            StructureConverter::new(engine.clone()),
            bridge.clone(),
            coordinator.clone(),
            renderer,
            notifier.clone(),
            config.export.clone(),
            config.messages.clone(),
        );
        let ingestor = PasteIngestor::new(
            engine.clone(),
            dispatcher.clone(),
            notifier.clone(),
            coordinator.clone(),
            config.messages.paste_failed.clone(),
        );
        let actions = MoleculeActions::new(engine, dispatcher, notifier);

        Self {
            dispatch_lock: Mutex::new(()),
            coordinator,
            bridge,
            exporter,
            ingestor,
            actions,
            on_paste_click: None,
        }
    }

    pub fn with_index_change_listener(mut self, listener: IndexChangeListener) -> Self {
        self.actions = self.actions.with_index_change_listener(listener);
        self
    }

    pub fn with_paste_click_listener(mut self, listener: PasteClickListener) -> Self {
        self.on_paste_click = Some(listener);
        self
    }

    /// Handle a selection from the export menu. Unknown ids are ignored.
    pub async fn export(
        &self,
        selection: &MoleculeSelection<'_>,
        menu_id: &str,
    ) -> Option<ExportOutcome> {
        let Some(target) = ExportTarget::from_id(menu_id) else {
            debug!(menu_id, "unknown export menu id");
            return None;
        };
        Some(self.export_target(selection, target).await)
    }

    pub async fn export_target(
        &self,
        selection: &MoleculeSelection<'_>,
        target: ExportTarget,
    ) -> ExportOutcome {
        let _guard = self.dispatch_lock.lock().await;
        self.exporter
            .dispatch(target, selection.current(), selection.current_index)
            .await
    }

    /// Read the clipboard and ingest whatever is there.
    pub async fn paste(&self) -> PasteOutcome {
        let _guard = self.dispatch_lock.lock().await;
        let span = info_span!("usecase.molecule_panel.paste");
        async {
            if let Some(listener) = &self.on_paste_click {
                listener();
            }

            let ticket = self.coordinator.issue_ticket();
            let outcome = tokio::select! {
                outcome = self.bridge.read() => outcome,
                () = self.coordinator.dismissed(ticket) => {
                    debug!("clipboard read abandoned after dismissal");
                    return PasteOutcome::Discarded;
                }
            };
            match outcome {
                ReadOutcome::Text(text) => {
                    if self.coordinator.is_stale(ticket) {
                        debug!("discarding clipboard text read after dismissal");
                        return PasteOutcome::Discarded;
                    }
                    PasteOutcome::Ingested(self.ingestor.ingest(&text))
                }
                ReadOutcome::FallbackRequired(reason) => {
                    if self.coordinator.read_failed(ticket, reason).is_empty() {
                        PasteOutcome::Discarded
                    } else {
                        PasteOutcome::FallbackPending
                    }
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Text the user typed or pasted into the manual paste field.
    ///
    /// Returns `None` when no manual paste was pending.
    pub async fn submit_manual_text(&self, text: String) -> Option<PasteResult> {
        let _guard = self.dispatch_lock.lock().await;
        let mut result = None;
        for action in self.coordinator.submit_manual_text(text) {
            match action {
                FallbackAction::IngestText { text } => {
                    result = Some(self.ingestor.ingest(&text));
                }
                other => debug!(action = ?other, "fallback action left to the view"),
            }
        }
        if result.is_none() {
            warn!("manual text submitted without a pending paste");
        }
        result
    }

    /// Close the fallback modal. No store action, no notification.
    pub fn dismiss_fallback(&self) {
        self.coordinator.dismiss();
    }

    pub fn fallback_state(&self) -> FallbackState {
        self.coordinator.state()
    }

    pub fn subscribe_fallback(&self) -> watch::Receiver<FallbackState> {
        self.coordinator.subscribe()
    }

    pub async fn delete_current(&self, selection: &MoleculeSelection<'_>) {
        let _guard = self.dispatch_lock.lock().await;
        if let Err(err) = self.actions.delete_current(selection) {
            debug!(error = %err, "delete skipped");
        }
    }

    pub async fn toggle_float(&self, selection: &MoleculeSelection<'_>) {
        let _guard = self.dispatch_lock.lock().await;
        if let Err(err) = self.actions.toggle_float(selection) {
            debug!(error = %err, "float skipped");
        }
    }

    pub async fn toggle_atom_numbers(&self, selection: &MoleculeSelection<'_>) {
        let _guard = self.dispatch_lock.lock().await;
        if let Err(err) = self.actions.toggle_atom_numbers(selection) {
            debug!(error = %err, "atom numbers toggle skipped");
        }
    }

    pub async fn expand_hydrogens(&self, selection: &MoleculeSelection<'_>, expand: bool) {
        let _guard = self.dispatch_lock.lock().await;
        let mode = if expand {
            HydrogenMode::Expanded
        } else {
            HydrogenMode::Collapsed
        };
        if let Err(err) = self.actions.set_hydrogens(selection, mode) {
            debug!(error = %err, "hydrogen update skipped");
        }
    }

    pub fn header(
        &self,
        source: RenderSource,
        selection: &MoleculeSelection<'_>,
        view: &MoleculesView,
    ) -> HeaderModel {
        HeaderModel::build(source, selection, view)
    }
}
