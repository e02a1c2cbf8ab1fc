//! Molecule domain model.
//!
//! A [`Molecule`] is the structure currently under edit. Its V3 molfile is the
//! only authoritative representation; every other text format is derived on
//! demand and never stored.

mod selection;
mod view;

pub use selection::MoleculeSelection;
pub use view::{MoleculeViewState, MoleculesView};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a molecule inside the host's molecule list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoleculeId(String);

impl MoleculeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MoleculeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MoleculeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MoleculeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A molecule owned by the host store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Molecule {
    pub id: MoleculeId,
    /// Display name
    pub label: String,
    /// Canonical V3 molfile, source of truth
    pub molfile: String,
}

impl Molecule {
    pub fn new(id: impl Into<MoleculeId>, label: impl Into<String>, molfile: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            molfile: molfile.into(),
        }
    }
}

/// A structure produced by the parser that the host has not stored yet.
///
/// The host assigns the identifier when it handles `ADD_MOLECULES`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMolecule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub molfile: String,
}

impl NewMolecule {
    pub fn new(molfile: impl Into<String>) -> Self {
        Self {
            label: None,
            molfile: molfile.into(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
