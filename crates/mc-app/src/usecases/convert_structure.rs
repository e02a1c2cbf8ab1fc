use std::sync::Arc;

use mc_core::{ports::ChemistryEnginePort, ConversionError, Molecule, TextFormat};
use tracing::debug;

/// Derives text representations of a molecule from its stored V3 molfile.
///
/// V3 is returned verbatim. Everything else goes through the engine:
/// parse the stored molfile, then print the requested format. An engine
/// failure yields a [`ConversionError`] and never partial text.
#[derive(Clone)]
pub struct StructureConverter {
    engine: Arc<dyn ChemistryEnginePort>,
}

impl StructureConverter {
    pub fn new(engine: Arc<dyn ChemistryEnginePort>) -> Self {
        Self { engine }
    }

    pub fn convert(&self, molecule: &Molecule, format: TextFormat) -> Result<String, ConversionError> {
        if format == TextFormat::MolfileV3 {
            return Ok(molecule.molfile.clone());
        }

        let handle = self
            .engine
            .parse_molfile(&molecule.molfile)
            .map_err(|source| ConversionError { format, source })?;
        let text = self
            .engine
            .print(&handle, format)
            .map_err(|source| ConversionError { format, source })?;

        debug!(molecule_id = %molecule.id, %format, len = text.len(), "molecule converted");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{ethanol, MockEngine, ETHANOL_SMILES};
    use mc_core::{ports::MoleculeHandle, EngineError};

    #[test]
    fn molfile_v3_is_returned_without_engine_call() {
        let mut engine = MockEngine::new();
        engine.expect_parse_molfile().never();
        engine.expect_print().never();

        let converter = StructureConverter::new(Arc::new(engine));
        let molecule = ethanol();
        assert_eq!(
            converter.convert(&molecule, TextFormat::MolfileV3).unwrap(),
            molecule.molfile
        );
    }

    #[test]
    fn smiles_is_printed_from_parsed_molfile() {
        let mut engine = MockEngine::new();
        engine
            .expect_parse_molfile()
            .times(1)
            .returning(|molfile| Ok(MoleculeHandle::new(molfile.to_string())));
        engine
            .expect_print()
            .withf(|_, format| *format == TextFormat::Smiles)
            .times(1)
            .returning(|_, _| Ok(ETHANOL_SMILES.to_string()));

        let converter = StructureConverter::new(Arc::new(engine));
        assert_eq!(
            converter.convert(&ethanol(), TextFormat::Smiles).unwrap(),
            ETHANOL_SMILES
        );
    }

    #[test]
    fn unparsable_molfile_yields_conversion_error() {
        let mut engine = MockEngine::new();
        engine
            .expect_parse_molfile()
            .returning(|_| Err(EngineError::Unrecognized));
        engine.expect_print().never();

        let converter = StructureConverter::new(Arc::new(engine));
        let err = converter
            .convert(&ethanol(), TextFormat::MolfileV2)
            .unwrap_err();
        assert_eq!(err.format, TextFormat::MolfileV2);
        assert_eq!(err.source, EngineError::Unrecognized);
    }
}
