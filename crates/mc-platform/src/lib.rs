//! # mc-platform
//!
//! Platform implementations of the molecule panel ports.
//!
//! This crate contains the adapters that talk to the operating system: the
//! system clipboard, the host store channel, the notification log and the
//! export of rendered structures.

pub mod adapters;
pub mod clipboard;
pub mod render;

pub use adapters::{ChannelDispatcher, TracingNotifier};
pub use clipboard::{FallbackOnlyClipboard, NativeClipboard};
pub use render::{DesktopRenderExporter, RenderRegistry, RenderedStructure};
