//! Export targets and the export menu.

mod menu;

pub use menu::{ExportMenuItem, EXPORT_MENU};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything a user can export the current molecule as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportTarget {
    #[serde(rename = "smiles")]
    Smiles,
    #[serde(rename = "molfileV3")]
    MolfileV3,
    #[serde(rename = "molfileV2")]
    MolfileV2,
    #[serde(rename = "png")]
    Png,
    #[serde(rename = "svg")]
    Svg,
}

impl ExportTarget {
    /// Stable menu identifier.
    pub fn id(self) -> &'static str {
        match self {
            ExportTarget::Smiles => "smiles",
            ExportTarget::MolfileV3 => "molfileV3",
            ExportTarget::MolfileV2 => "molfileV2",
            ExportTarget::Png => "png",
            ExportTarget::Svg => "svg",
        }
    }

    /// Look up a target by its menu identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "smiles" => Some(ExportTarget::Smiles),
            "molfileV3" => Some(ExportTarget::MolfileV3),
            "molfileV2" => Some(ExportTarget::MolfileV2),
            "png" => Some(ExportTarget::Png),
            "svg" => Some(ExportTarget::Svg),
            _ => None,
        }
    }

    /// Text format for targets that end up on the clipboard as text.
    pub fn text_format(self) -> Option<TextFormat> {
        match self {
            ExportTarget::Smiles => Some(TextFormat::Smiles),
            ExportTarget::MolfileV3 => Some(TextFormat::MolfileV3),
            ExportTarget::MolfileV2 => Some(TextFormat::MolfileV2),
            ExportTarget::Png | ExportTarget::Svg => None,
        }
    }
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Textual chemical formats the engine can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextFormat {
    Smiles,
    MolfileV2,
    MolfileV3,
}

impl TextFormat {
    /// Label used in the "copied to clipboard" notification.
    pub fn copied_label(self) -> &'static str {
        match self {
            TextFormat::Smiles => "SMILES",
            TextFormat::MolfileV2 | TextFormat::MolfileV3 => "MOLFile",
        }
    }
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextFormat::Smiles => "SMILES",
            TextFormat::MolfileV2 => "molfile V2",
            TextFormat::MolfileV3 => "molfile V3",
        };
        f.write_str(name)
    }
}

/// Key of the rendered structure node for the molecule at `index`.
pub fn render_node_key(prefix: &str, index: usize) -> String {
    format!("{prefix}{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_resolve_back_to_targets() {
        for item in EXPORT_MENU.iter() {
            assert_eq!(ExportTarget::from_id(item.id), Some(item.target));
            assert_eq!(item.target.id(), item.id);
        }
        assert_eq!(ExportTarget::from_id("pdf"), None);
    }

    #[test]
    fn image_targets_have_no_text_format() {
        assert_eq!(ExportTarget::Png.text_format(), None);
        assert_eq!(ExportTarget::Svg.text_format(), None);
        assert_eq!(ExportTarget::Smiles.text_format(), Some(TextFormat::Smiles));
    }

    #[test]
    fn both_molfile_versions_share_copied_label() {
        assert_eq!(TextFormat::MolfileV2.copied_label(), "MOLFile");
        assert_eq!(TextFormat::MolfileV3.copied_label(), "MOLFile");
        assert_eq!(TextFormat::Smiles.copied_label(), "SMILES");
    }

    #[test]
    fn node_key_uses_prefix_and_index() {
        assert_eq!(render_node_key("molSVG", 2), "molSVG2");
    }
}
