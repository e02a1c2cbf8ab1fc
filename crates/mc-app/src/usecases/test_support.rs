//! Shared test doubles for the panel use cases.

use std::sync::Mutex;

use async_trait::async_trait;
use mc_core::{
    ports::{
        ChemistryEnginePort, ClipboardCapabilityPort, DispatchPort, HydrogenMode, MoleculeHandle,
        NotificationPort, RenderExportPort, Severity,
    },
    ClipboardError, EngineError, HostAction, Molecule, NewMolecule, RenderExportError, TextFormat,
};

pub const ETHANOL_SMILES: &str = "CCO";

pub const ETHANOL_V3: &str = "ethanol
     RDKit          2D

  0  0  0  0  0  0  0  0  0  0999 V3000
M  V30 BEGIN CTAB
M  V30 COUNTS 3 2 0 0 0
M  V30 BEGIN ATOM
M  V30 1 C 0 0 0 0
M  V30 2 C 1.299 0.75 0 0
M  V30 3 O 2.5981 0 0 0
M  V30 END ATOM
M  V30 BEGIN BOND
M  V30 1 1 1 2
M  V30 2 1 2 3
M  V30 END BOND
M  V30 END CTAB
M  END
";

pub fn ethanol() -> Molecule {
    Molecule::new("mol-ethanol", "P1", ETHANOL_V3)
}

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

mockall::mock! {
    pub Clipboard {}

    #[async_trait]
    impl ClipboardCapabilityPort for Clipboard {
        fn is_supported(&self) -> bool;
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
        async fn read_text(&self) -> Result<String, ClipboardError>;
    }
}

mockall::mock! {
    pub Renderer {}

    #[async_trait]
    impl RenderExportPort for Renderer {
        async fn copy_render_as_image(&self, node_key: &str) -> Result<(), RenderExportError>;
        fn export_render_as_svg(&self, node_key: &str, file_name: &str)
            -> Result<(), RenderExportError>;
    }
}

#[derive(Default)]
pub struct RecordingDispatcher {
    actions: Mutex<Vec<HostAction>>,
}

impl RecordingDispatcher {
    pub fn actions(&self) -> Vec<HostAction> {
        self.actions.lock().unwrap().clone()
    }
}

impl DispatchPort for RecordingDispatcher {
    fn dispatch(&self, action: HostAction) {
        self.actions.lock().unwrap().push(action);
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<(String, Severity)>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<(String, Severity)> {
        self.notifications.lock().unwrap().clone()
    }
}

impl NotificationPort for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.notifications
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
    }
}

/// Engine that knows ethanol and nothing else.
pub fn ethanol_engine() -> MockEngine {
    let mut engine = MockEngine::new();
    engine
        .expect_parse_molfile()
        .returning(|molfile| Ok(MoleculeHandle::new(molfile.to_string())));
    engine.expect_print().returning(|_, format| match format {
        TextFormat::Smiles => Ok(ETHANOL_SMILES.to_string()),
        TextFormat::MolfileV2 => Ok("ethanol V2000".to_string()),
        TextFormat::MolfileV3 => Ok(ETHANOL_V3.to_string()),
    });
    engine.expect_parse_any().returning(|text| {
        if text.trim() == ETHANOL_SMILES {
            Ok(vec![NewMolecule::new(ETHANOL_V3)])
        } else {
            Err(EngineError::Unrecognized)
        }
    });
    engine
}
