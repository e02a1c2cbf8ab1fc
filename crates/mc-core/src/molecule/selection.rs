use super::Molecule;

/// The host's molecule list together with the externally selected index.
#[derive(Debug, Clone, Copy)]
pub struct MoleculeSelection<'a> {
    pub molecules: &'a [Molecule],
    pub current_index: usize,
}

impl<'a> MoleculeSelection<'a> {
    pub fn new(molecules: &'a [Molecule], current_index: usize) -> Self {
        Self {
            molecules,
            current_index,
        }
    }

    pub fn has_molecules(&self) -> bool {
        !self.molecules.is_empty()
    }

    /// The current molecule, if the index points at one.
    pub fn current(&self) -> Option<&'a Molecule> {
        self.molecules.get(self.current_index)
    }

    pub fn len(&self) -> usize {
        self.molecules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.molecules.is_empty()
    }
}
