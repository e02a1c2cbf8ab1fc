//! Messages emitted towards the host store.
//!
//! The store itself lives outside this crate; components receive a
//! [`DispatchPort`](crate::ports::DispatchPort) at construction and emit these
//! messages through it.

use serde::{Deserialize, Serialize};

use crate::molecule::{MoleculeId, NewMolecule};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HostAction {
    AddMolecules {
        molecules: Vec<NewMolecule>,
    },
    DeleteMolecule {
        id: MoleculeId,
    },
    SetMolecule {
        id: MoleculeId,
        label: String,
        molfile: String,
    },
    FloatMoleculeOverSpectrum {
        id: MoleculeId,
    },
    ToggleMoleculeAtomNumber {
        id: MoleculeId,
    },
}

impl HostAction {
    /// Wire name of the action, as the host reducer knows it.
    pub fn kind(&self) -> &'static str {
        match self {
            HostAction::AddMolecules { .. } => "ADD_MOLECULES",
            HostAction::DeleteMolecule { .. } => "DELETE_MOLECULE",
            HostAction::SetMolecule { .. } => "SET_MOLECULE",
            HostAction::FloatMoleculeOverSpectrum { .. } => "FLOAT_MOLECULE_OVER_SPECTRUM",
            HostAction::ToggleMoleculeAtomNumber { .. } => "TOGGLE_MOLECULE_ATOM_NUMBER",
        }
    }
}
