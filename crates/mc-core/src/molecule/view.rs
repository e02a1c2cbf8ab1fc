use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::MoleculeId;

/// Per-molecule display flags owned by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoleculeViewState {
    /// Molecule is floated over the spectrum
    pub floating_visible: bool,
    pub show_atom_number: bool,
}

/// View state of every molecule, keyed by id.
pub type MoleculesView = HashMap<MoleculeId, MoleculeViewState>;
