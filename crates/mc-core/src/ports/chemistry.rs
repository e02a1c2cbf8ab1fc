//! Chemistry engine port.
//!
//! The engine is an opaque capability: it parses structure text into a handle
//! it owns and prints handles back out. Nothing in this crate looks inside a
//! handle or reimplements chemical semantics.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::errors::EngineError;
use crate::export::TextFormat;
use crate::molecule::NewMolecule;

/// Engine-owned parsed structure.
#[derive(Clone)]
pub struct MoleculeHandle(Arc<dyn Any + Send + Sync>);

impl MoleculeHandle {
    pub fn new<T: Any + Send + Sync>(inner: T) -> Self {
        Self(Arc::new(inner))
    }

    /// Access the engine's own representation.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for MoleculeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MoleculeHandle(..)")
    }
}

/// Hydrogen display for printed V3 molfiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrogenMode {
    /// All hydrogens as explicit atoms
    Expanded,
    /// Hydrogens implicit
    Collapsed,
}

pub trait ChemistryEnginePort: Send + Sync {
    /// Parse a molfile (V2 or V3).
    fn parse_molfile(&self, molfile: &str) -> Result<MoleculeHandle, EngineError>;

    /// Print a parsed structure in the given text format.
    fn print(&self, handle: &MoleculeHandle, format: TextFormat) -> Result<String, EngineError>;

    /// Print a V3 molfile with hydrogens expanded or collapsed.
    fn print_hydrogens(
        &self,
        handle: &MoleculeHandle,
        mode: HydrogenMode,
    ) -> Result<String, EngineError>;

    /// Parse free-form text (SMILES, molfile, or a batch of them).
    ///
    /// Either every structure in the text is returned, or an error; never a
    /// partial list.
    fn parse_any(&self, text: &str) -> Result<Vec<NewMolecule>, EngineError>;
}

#[cfg(test)]
mockall::mock! {
    pub Engine {}

    impl ChemistryEnginePort for Engine {
        fn parse_molfile(&self, molfile: &str) -> Result<MoleculeHandle, EngineError>;
        fn print(&self, handle: &MoleculeHandle, format: TextFormat) -> Result<String, EngineError>;
        fn print_hydrogens(
            &self,
            handle: &MoleculeHandle,
            mode: HydrogenMode,
        ) -> Result<String, EngineError>;
        fn parse_any(&self, text: &str) -> Result<Vec<NewMolecule>, EngineError>;
    }
}
