//! Panel configuration domain model

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Panel configuration
///
/// Every field has a default so a partial (or empty) TOML document is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub export: ExportConfig,
    pub clipboard: ClipboardConfig,
    pub messages: MessagesConfig,
    pub logging: LoggingConfig,
}

impl PanelConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).context("invalid panel configuration")
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize panel configuration")
    }
}

/// Image / SVG export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name (without extension) used for SVG downloads
    pub svg_file_name: String,

    /// Prefix of the rendered node key, followed by the molecule index
    pub node_key_prefix: String,

    /// Where SVG downloads land; the user's download directory when unset
    pub directory: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            svg_file_name: "molFile".to_string(),
            node_key_prefix: "molSVG".to_string(),
            directory: None,
        }
    }
}

/// Which clipboard adapter to wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardMode {
    #[default]
    Native,
    /// Always go through the manual copy / paste modal
    FallbackOnly,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    pub mode: ClipboardMode,
}

/// User-facing notification texts that hosts may want to localize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub image_unsupported: String,
    pub paste_failed: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            image_unsupported: "Your browser does not support copying images to clipboard"
                .to_string(),
            paste_failed: "Failed to parse SMILES or molfile. Please paste a valid format"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to a file
    pub file: bool,

    /// Log directory; platform default when unset
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: true,
            directory: None,
        }
    }
}
