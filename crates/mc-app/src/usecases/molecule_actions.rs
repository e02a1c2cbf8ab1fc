use std::sync::Arc;

use mc_core::{
    ports::{ChemistryEnginePort, DispatchPort, HydrogenMode, NotificationPort, Severity},
    ConversionError, HostAction, MoleculeSelection, TextFormat,
};
use tracing::{debug, warn};

use crate::PanelError;

/// Callback run when an action needs the host to move the selected index.
pub type IndexChangeListener = Arc<dyn Fn(usize) + Send + Sync>;

/// Toolbar actions on the current molecule that go straight to the host store.
pub struct MoleculeActions {
    engine: Arc<dyn ChemistryEnginePort>,
    dispatcher: Arc<dyn DispatchPort>,
    notifier: Arc<dyn NotificationPort>,
    on_index_change: Option<IndexChangeListener>,
}

impl MoleculeActions {
    pub fn new(
        engine: Arc<dyn ChemistryEnginePort>,
        dispatcher: Arc<dyn DispatchPort>,
        notifier: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            engine,
            dispatcher,
            notifier,
            on_index_change: None,
        }
    }

    pub fn with_index_change_listener(mut self, listener: IndexChangeListener) -> Self {
        self.on_index_change = Some(listener);
        self
    }

    /// Delete the current molecule and move the selection back to the first one.
    pub fn delete_current(&self, selection: &MoleculeSelection<'_>) -> Result<(), PanelError> {
        let molecule = selection.current().ok_or(PanelError::NoCurrentMolecule)?;
        if let Some(listener) = &self.on_index_change {
            listener(0);
        }
        self.dispatcher.dispatch(HostAction::DeleteMolecule {
            id: molecule.id.clone(),
        });
        Ok(())
    }

    pub fn toggle_float(&self, selection: &MoleculeSelection<'_>) -> Result<(), PanelError> {
        let molecule = selection.current().ok_or(PanelError::NoCurrentMolecule)?;
        self.dispatcher.dispatch(HostAction::FloatMoleculeOverSpectrum {
            id: molecule.id.clone(),
        });
        Ok(())
    }

    pub fn toggle_atom_numbers(&self, selection: &MoleculeSelection<'_>) -> Result<(), PanelError> {
        let molecule = selection.current().ok_or(PanelError::NoCurrentMolecule)?;
        self.dispatcher.dispatch(HostAction::ToggleMoleculeAtomNumber {
            id: molecule.id.clone(),
        });
        Ok(())
    }

    /// Replace the current molecule's molfile with hydrogens expanded or collapsed.
    ///
    /// An engine failure is reported as a notification and no action is emitted.
    pub fn set_hydrogens(
        &self,
        selection: &MoleculeSelection<'_>,
        mode: HydrogenMode,
    ) -> Result<(), PanelError> {
        let molecule = selection.current().ok_or(PanelError::NoCurrentMolecule)?;

        let molfile = self
            .engine
            .parse_molfile(&molecule.molfile)
            .and_then(|handle| self.engine.print_hydrogens(&handle, mode))
            .map_err(|source| ConversionError {
                format: TextFormat::MolfileV3,
                source,
            });

        match molfile {
            Ok(molfile) => {
                debug!(molecule_id = %molecule.id, ?mode, "hydrogens updated");
                self.dispatcher.dispatch(HostAction::SetMolecule {
                    id: molecule.id.clone(),
                    label: molecule.label.clone(),
                    molfile,
                });
                Ok(())
            }
            Err(err) => {
                warn!(molecule_id = %molecule.id, error = %err, "hydrogen update failed");
                self.notifier.notify(&err.to_string(), Severity::Danger);
                Err(err.into())
            }
        }
    }
}
