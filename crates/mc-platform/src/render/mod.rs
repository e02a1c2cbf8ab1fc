//! Export of structures that a view has already rendered.
//!
//! Views register their rendered output under a node key
//! (`molSVG{index}`). The exporter looks structures up by that key and
//! either copies the raster to the system clipboard or writes the vector
//! form to disk.

mod exporter;
mod registry;

pub use exporter::DesktopRenderExporter;
pub use registry::{RenderRegistry, RenderedStructure};
