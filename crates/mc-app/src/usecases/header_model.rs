//! Toolbar state of the molecule panel header.
//!
//! Rendering is the host's job; this only decides which tools are shown,
//! enabled and active for a given molecule list.

use mc_core::molecule::{MoleculeSelection, MoleculesView};

/// Which panel hosts the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderSource {
    #[default]
    MoleculePanel,
    PredictionPanel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolId {
    AboutPrediction,
    ExportAs,
    Paste,
    AddMolecule,
    DeleteMolecule,
    PredictSpectra,
    FloatMolecule,
    ShowAtomNumbers,
    ExpandHydrogens,
    CollapseHydrogens,
}

impl ToolId {
    pub fn tooltip(self) -> &'static str {
        match self {
            ToolId::AboutPrediction => "About prediction",
            ToolId::ExportAs => "Export As",
            ToolId::Paste => "Paste SMILES or molfile",
            ToolId::AddMolecule => "Add molecule",
            ToolId::DeleteMolecule => "Delete molecule",
            ToolId::PredictSpectra => "Predict spectra",
            ToolId::FloatMolecule => "Float molecule",
            ToolId::ShowAtomNumbers => "Show atom number",
            ToolId::ExpandHydrogens => "Expand all hydrogens",
            ToolId::CollapseHydrogens => "Collapse all hydrogens",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolState {
    pub id: ToolId,
    pub enabled: bool,
    pub active: bool,
}

/// `current` is one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub current: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderModel {
    pub counter: Option<Counter>,
    /// Visible tools, in toolbar order
    pub tools: Vec<ToolState>,
}

impl HeaderModel {
    pub fn build(
        source: RenderSource,
        selection: &MoleculeSelection<'_>,
        view: &MoleculesView,
    ) -> Self {
        let has_molecules = selection.has_molecules();
        let in_molecule_panel = source == RenderSource::MoleculePanel;
        let view_state = selection
            .current()
            .and_then(|molecule| view.get(&molecule.id))
            .copied()
            .unwrap_or_default();

        let counter = (has_molecules && in_molecule_panel).then(|| Counter {
            current: selection.current_index + 1,
            total: selection.len(),
        });

        let tool = |id, enabled, active| ToolState { id, enabled, active };
        let mut tools = Vec::new();
        if !in_molecule_panel {
            tools.push(tool(ToolId::AboutPrediction, true, false));
        }
        if in_molecule_panel {
            tools.push(tool(ToolId::ExportAs, has_molecules, false));
        }
        tools.push(tool(ToolId::Paste, true, false));
        if in_molecule_panel {
            tools.push(tool(ToolId::AddMolecule, true, false));
            tools.push(tool(ToolId::DeleteMolecule, has_molecules, false));
            if has_molecules {
                tools.push(tool(ToolId::PredictSpectra, true, false));
            }
        }
        tools.push(tool(
            ToolId::FloatMolecule,
            has_molecules,
            view_state.floating_visible,
        ));
        tools.push(tool(
            ToolId::ShowAtomNumbers,
            has_molecules,
            view_state.show_atom_number,
        ));
        tools.push(tool(ToolId::ExpandHydrogens, has_molecules, false));
        tools.push(tool(ToolId::CollapseHydrogens, has_molecules, false));

        Self { counter, tools }
    }

    pub fn tool(&self, id: ToolId) -> Option<&ToolState> {
        self.tools.iter().find(|tool| tool.id == id)
    }
}
