//! # Dependency wiring
//!
//! The only place that depends on `mc-app` and `mc-platform` together.
//! It picks adapters according to [`PanelConfig`] and hands them to the
//! orchestrator as ports. No panel behavior is decided here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use mc_app::usecases::IndexChangeListener;
use mc_app::orchestrator::PasteClickListener;
use mc_app::{MoleculePanelOrchestrator, PanelDeps};
use mc_core::config::ClipboardMode;
use mc_core::ports::{
    ChemistryEnginePort, ClipboardCapabilityPort, NotificationPort, RenderExportPort,
};
use mc_core::{HostAction, PanelConfig};
use mc_platform::{
    ChannelDispatcher, DesktopRenderExporter, FallbackOnlyClipboard, NativeClipboard,
    RenderRegistry, TracingNotifier,
};
use tokio::sync::mpsc;
use tracing::info;

/// A wired panel.
pub struct PanelRuntime {
    pub orchestrator: Arc<MoleculePanelOrchestrator>,

    /// Host actions emitted by the panel, in dispatch order.
    pub actions: mpsc::UnboundedReceiver<HostAction>,

    /// Registry views publish rendered structures into. `None` when the host
    /// supplied its own renderer.
    pub renders: Option<Arc<RenderRegistry>>,
}

/// Assembles a [`MoleculePanelOrchestrator`] from configuration plus the
/// ports the host must (engine) or may (the rest) supply.
pub struct PanelBuilder {
    config: PanelConfig,
    engine: Option<Arc<dyn ChemistryEnginePort>>,
    clipboard: Option<Arc<dyn ClipboardCapabilityPort>>,
    notifier: Option<Arc<dyn NotificationPort>>,
    renderer: Option<Arc<dyn RenderExportPort>>,
    index_listener: Option<IndexChangeListener>,
    paste_listener: Option<PasteClickListener>,
}

impl PanelBuilder {
    pub fn new(config: PanelConfig) -> Self {
        Self {
            config,
            engine: None,
            clipboard: None,
            notifier: None,
            renderer: None,
            index_listener: None,
            paste_listener: None,
        }
    }

    pub fn engine(mut self, engine: Arc<dyn ChemistryEnginePort>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Override the clipboard adapter chosen from `clipboard.mode`.
    pub fn clipboard(mut self, clipboard: Arc<dyn ClipboardCapabilityPort>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn NotificationPort>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn renderer(mut self, renderer: Arc<dyn RenderExportPort>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn index_change_listener(mut self, listener: IndexChangeListener) -> Self {
        self.index_listener = Some(listener);
        self
    }

    /// Runs when paste is pressed, before the clipboard is read.
    pub fn paste_click_listener(mut self, listener: PasteClickListener) -> Self {
        self.paste_listener = Some(listener);
        self
    }

    /// # Errors
    ///
    /// Fails when no engine was supplied, or when the default renderer is
    /// needed and no export directory can be determined.
    pub fn build(self) -> anyhow::Result<PanelRuntime> {
        let engine = self
            .engine
            .context("a chemistry engine is required to build the molecule panel")?;
        let mode = self.config.clipboard.mode;

        let clipboard = match self.clipboard {
            Some(clipboard) => clipboard,
            None => default_clipboard(mode),
        };

        let (renderer, renders) = match self.renderer {
            Some(renderer) => (renderer, None),
            None => {
                let registry = Arc::new(RenderRegistry::new());
                let dir = resolve_export_dir(&self.config)?;
                let exporter = match mode {
                    ClipboardMode::Native => DesktopRenderExporter::new(registry.clone(), dir),
                    ClipboardMode::FallbackOnly => {
                        DesktopRenderExporter::without_clipboard(registry.clone(), dir)
                    }
                };
                (Arc::new(exporter) as Arc<dyn RenderExportPort>, Some(registry))
            }
        };

        let notifier = self
            .notifier
            .unwrap_or_else(|| Arc::new(TracingNotifier) as Arc<dyn NotificationPort>);
        let (dispatcher, actions) = ChannelDispatcher::channel();

        let deps = PanelDeps {
            engine,
            clipboard,
            dispatcher: Arc::new(dispatcher),
            notifier,
            renderer,
        };

        let mut orchestrator = MoleculePanelOrchestrator::new(deps, &self.config);
        if let Some(listener) = self.index_listener {
            orchestrator = orchestrator.with_index_change_listener(listener);
        }
        if let Some(listener) = self.paste_listener {
            orchestrator = orchestrator.with_paste_click_listener(listener);
        }

        info!(clipboard_mode = ?mode, "molecule panel wired");

        Ok(PanelRuntime {
            orchestrator: Arc::new(orchestrator),
            actions,
            renders,
        })
    }
}

fn default_clipboard(mode: ClipboardMode) -> Arc<dyn ClipboardCapabilityPort> {
    match mode {
        ClipboardMode::Native => Arc::new(NativeClipboard::new()),
        ClipboardMode::FallbackOnly => Arc::new(FallbackOnlyClipboard),
    }
}

fn resolve_export_dir(config: &PanelConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = &config.export.directory {
        return Ok(dir.clone());
    }
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .context("no download directory on this platform; set export.directory")
}
