use async_trait::async_trait;

use crate::errors::RenderExportError;

/// Export of an already rendered structure, addressed by its node key.
#[async_trait]
pub trait RenderExportPort: Send + Sync {
    /// Copy the rendered structure to the clipboard as an image.
    async fn copy_render_as_image(&self, node_key: &str) -> Result<(), RenderExportError>;

    /// Save the rendered structure as a downloadable SVG file.
    fn export_render_as_svg(&self, node_key: &str, file_name: &str)
        -> Result<(), RenderExportError>;
}
