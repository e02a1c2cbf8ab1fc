use thiserror::Error;

use crate::export::TextFormat;

/// Errors reported by the chemistry engine port.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unrecognized structure text")]
    Unrecognized,

    #[error("engine failure: {0}")]
    Failed(String),
}

/// The molecule could not be converted to the requested text format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not convert molecule to {format}: {source}")]
pub struct ConversionError {
    pub format: TextFormat,
    #[source]
    pub source: EngineError,
}

/// Clipboard capability failures.
///
/// Both variants lead to the same fallback interaction; they stay distinct for
/// diagnostics and notification text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No clipboard capability in this environment
    #[error("clipboard is not supported in this environment")]
    Unsupported,

    /// Capability present but the call was rejected
    #[error("clipboard access denied: {0}")]
    Denied(String),
}

/// Pasted text was not recognized as SMILES or molfile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse pasted structure: {source}")]
pub struct ParseError {
    #[source]
    pub source: EngineError,
}

/// Failures of the image / SVG export collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderExportError {
    #[error("image export is not supported in this environment")]
    Unsupported,

    #[error("no rendered structure for node {0}")]
    NodeNotFound(String),

    #[error("{0}")]
    Failed(String),
}
