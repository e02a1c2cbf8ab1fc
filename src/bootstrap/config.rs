//! # Configuration loader
//!
//! Reads the panel's TOML configuration. No validation happens here: every
//! field has a default, so a missing file or a partial document still yields
//! a complete [`PanelConfig`].

use std::path::Path;

use anyhow::Context;
use mc_core::PanelConfig;
use tracing::info;

/// Load configuration from a TOML file.
///
/// A file that does not exist is not an error: defaults are returned.
///
/// # Errors
///
/// Returns error if the file exists but cannot be read, or is not a valid
/// panel configuration.
pub fn load_config(config_path: &Path) -> anyhow::Result<PanelConfig> {
    if !config_path.exists() {
        info!(path = %config_path.display(), "no config file, using defaults");
        return Ok(PanelConfig::default());
    }

    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    PanelConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to load config file: {}", config_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_core::config::ClipboardMode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [export]
            svg_file_name = "structure"

            [clipboard]
            mode = "fallback_only"

            [logging]
            file = false
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.export.svg_file_name, "structure");
        assert_eq!(config.export.node_key_prefix, "molSVG");
        assert_eq!(config.clipboard.mode, ClipboardMode::FallbackOnly);
        assert!(!config.logging.file);
    }

    #[test]
    fn test_load_config_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, PanelConfig::default());
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[clipboard\nmode = ").unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load config file"));
    }

    #[test]
    fn test_load_config_rejects_unknown_clipboard_mode() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[clipboard]\nmode = \"telepathy\"\n")
            .unwrap();

        assert!(load_config(temp_file.path()).is_err());
    }
}
