use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result};
use arboard::{Clipboard, ImageData};
use async_trait::async_trait;
use mc_core::{ports::RenderExportPort, RenderExportError};
use tokio::task::spawn_blocking;
use tracing::{debug, info, warn};

use super::registry::RenderRegistry;

/// Render exporter for desktop hosts.
///
/// PNG copies go to the system clipboard through `arboard`, SVG exports are
/// written to `output_dir` as `<file_name>.svg`. Decoding and the clipboard
/// write run on the blocking pool.
pub struct DesktopRenderExporter {
    registry: Arc<RenderRegistry>,
    output_dir: PathBuf,
    clipboard: Arc<Mutex<Option<Clipboard>>>,
}

impl DesktopRenderExporter {
    pub fn new(registry: Arc<RenderRegistry>, output_dir: impl Into<PathBuf>) -> Self {
        let clipboard = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                warn!(error = %err, "system clipboard unavailable, image copy disabled");
                None
            }
        };
        Self::with_clipboard(registry, output_dir, clipboard)
    }

    /// Exporter that never copies images. SVG export still works.
    pub fn without_clipboard(registry: Arc<RenderRegistry>, output_dir: impl Into<PathBuf>) -> Self {
        Self::with_clipboard(registry, output_dir, None)
    }

    fn with_clipboard(
        registry: Arc<RenderRegistry>,
        output_dir: impl Into<PathBuf>,
        clipboard: Option<Clipboard>,
    ) -> Self {
        Self {
            registry,
            output_dir: output_dir.into(),
            clipboard: Arc::new(Mutex::new(clipboard)),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Decode a PNG into the RGBA layout the clipboard expects.
fn decode_png(png: &[u8]) -> Result<ImageData<'static>> {
    let image = image::load_from_memory_with_format(png, image::ImageFormat::Png)
        .context("failed to decode rendered PNG")?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(ImageData {
        width: width as usize,
        height: height as usize,
        bytes: Cow::Owned(rgba.into_raw()),
    })
}

fn copy_png(clipboard: &Mutex<Option<Clipboard>>, png: &[u8]) -> Result<(), RenderExportError> {
    let image = decode_png(png).map_err(|e| RenderExportError::Failed(format!("{e:#}")))?;

    let mut guard = clipboard.lock().unwrap_or_else(PoisonError::into_inner);
    let clipboard = guard.as_mut().ok_or(RenderExportError::Unsupported)?;
    clipboard.set_image(image).map_err(|e| match e {
        arboard::Error::ClipboardNotSupported | arboard::Error::ConversionFailure => {
            RenderExportError::Unsupported
        }
        other => RenderExportError::Failed(other.to_string()),
    })
}

fn write_svg(dir: &Path, file_name: &str, svg: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;
    let path = dir.join(format!("{file_name}.svg"));
    fs::write(&path, svg).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

#[async_trait]
impl RenderExportPort for DesktopRenderExporter {
    async fn copy_render_as_image(&self, node_key: &str) -> Result<(), RenderExportError> {
        let structure = self
            .registry
            .get(node_key)
            .ok_or_else(|| RenderExportError::NodeNotFound(node_key.to_string()))?;
        let png = structure
            .png
            .ok_or_else(|| RenderExportError::Failed(format!("no PNG rendering for {node_key}")))?;

        let clipboard = self.clipboard.clone();
        spawn_blocking(move || copy_png(&clipboard, &png))
            .await
            .map_err(|e| RenderExportError::Failed(format!("image copy task failed: {e}")))??;

        debug!(node_key, "rendered structure copied as PNG");
        Ok(())
    }

    fn export_render_as_svg(
        &self,
        node_key: &str,
        file_name: &str,
    ) -> Result<(), RenderExportError> {
        let structure = self
            .registry
            .get(node_key)
            .ok_or_else(|| RenderExportError::NodeNotFound(node_key.to_string()))?;

        let path = write_svg(&self.output_dir, file_name, &structure.svg)
            .map_err(|e| RenderExportError::Failed(format!("{e:#}")))?;
        info!(node_key, path = %path.display(), "rendered structure exported as SVG");
        Ok(())
    }
}
