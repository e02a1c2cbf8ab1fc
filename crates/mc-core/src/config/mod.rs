pub mod panel_config;

pub use panel_config::{
    ClipboardConfig, ClipboardMode, ExportConfig, LoggingConfig, MessagesConfig, PanelConfig,
};
