mod fallback_only;
mod native;

pub use fallback_only::FallbackOnlyClipboard;
pub use native::NativeClipboard;
