use mc_core::{ConversionError, ParseError, RenderExportError};

/// Errors produced inside the panel use cases.
///
/// None of these escape the orchestrator's entry points; they are turned into
/// notifications or fallback transitions at the boundary.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("no molecule is selected")]
    NoCurrentMolecule,

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    RenderExport(#[from] RenderExportError),
}
