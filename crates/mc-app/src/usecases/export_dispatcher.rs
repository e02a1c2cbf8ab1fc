use std::sync::Arc;

use mc_core::{
    config::{ExportConfig, MessagesConfig},
    export::render_node_key,
    ports::{NotificationPort, RenderExportPort, Severity},
    ClipboardOutcome, ConversionError, ExportTarget, Molecule, RenderExportError, TextFormat,
};
use tracing::{debug, info, info_span, warn, Instrument};

use super::{ClipboardBridge, FallbackCoordinator, StructureConverter};

/// What an export action ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Copied(TextFormat),
    /// Native write failed; the text waits in the manual copy modal
    FallbackPending(TextFormat),
    /// Native write failed after the user had moved on; nothing shown
    Discarded,
    ImageCopied,
    SvgExported,
    ConversionFailed(ConversionError),
    RenderFailed(RenderExportError),
    /// Invoked without a current molecule
    NoMolecule,
}

/// Routes an export target to the clipboard, image-copy or SVG-file path.
pub struct ExportDispatcher {
    converter: StructureConverter,
    bridge: ClipboardBridge,
    coordinator: Arc<FallbackCoordinator>,
    renderer: Arc<dyn RenderExportPort>,
    notifier: Arc<dyn NotificationPort>,
    export: ExportConfig,
    messages: MessagesConfig,
}

impl ExportDispatcher {
    pub fn new(
        converter: StructureConverter,
        bridge: ClipboardBridge,
        coordinator: Arc<FallbackCoordinator>,
        renderer: Arc<dyn RenderExportPort>,
        notifier: Arc<dyn NotificationPort>,
        export: ExportConfig,
        messages: MessagesConfig,
    ) -> Self {
        Self {
            converter,
            bridge,
            coordinator,
            renderer,
            notifier,
            export,
            messages,
        }
    }

    /// Export `molecule`, which sits at `index` in the host list.
    ///
    /// Failures are reported through notifications or the fallback modal and
    /// summarized in the returned outcome; nothing is propagated.
    pub async fn dispatch(
        &self,
        target: ExportTarget,
        molecule: Option<&Molecule>,
        index: usize,
    ) -> ExportOutcome {
        let Some(molecule) = molecule else {
            debug!(%target, "export ignored: no current molecule");
            return ExportOutcome::NoMolecule;
        };

        let span = info_span!("usecase.export_dispatcher.dispatch", %target, molecule_id = %molecule.id);
        async {
            match target {
                ExportTarget::Smiles => self.copy_text(molecule, TextFormat::Smiles).await,
                ExportTarget::MolfileV3 => self.copy_text(molecule, TextFormat::MolfileV3).await,
                ExportTarget::MolfileV2 => self.copy_text(molecule, TextFormat::MolfileV2).await,
                ExportTarget::Png => self.copy_image(index).await,
                ExportTarget::Svg => self.export_svg(index),
            }
        }
        .instrument(span)
        .await
    }

    async fn copy_text(&self, molecule: &Molecule, format: TextFormat) -> ExportOutcome {
        let text = match self.converter.convert(molecule, format) {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "export conversion failed");
                self.notifier.notify(
                    &format!("Failed to convert molecule to {format}"),
                    Severity::Danger,
                );
                return ExportOutcome::ConversionFailed(err);
            }
        };

        let ticket = self.coordinator.issue_ticket();
        let outcome = tokio::select! {
            outcome = self.bridge.write(&text) => outcome,
            () = self.coordinator.dismissed(ticket) => {
                debug!(%format, "clipboard write abandoned after dismissal");
                return ExportOutcome::Discarded;
            }
        };
        match outcome {
            ClipboardOutcome::Completed => {
                info!(%format, "molecule copied to clipboard");
                self.coordinator.write_succeeded(ticket);
                self.notifier.notify(
                    &format!("{} copied to clipboard", format.copied_label()),
                    Severity::Success,
                );
                ExportOutcome::Copied(format)
            }
            ClipboardOutcome::FallbackRequired(reason) => {
                let actions = self.coordinator.write_failed(ticket, text, reason);
                if actions.is_empty() {
                    ExportOutcome::Discarded
                } else {
                    ExportOutcome::FallbackPending(format)
                }
            }
        }
    }

    async fn copy_image(&self, index: usize) -> ExportOutcome {
        let node_key = render_node_key(&self.export.node_key_prefix, index);
        match self.renderer.copy_render_as_image(&node_key).await {
            Ok(()) => {
                self.notifier
                    .notify("MOL copied as PNG to clipboard", Severity::Success);
                ExportOutcome::ImageCopied
            }
            Err(err) => {
                warn!(error = %err, %node_key, "image copy failed");
                let message = match &err {
                    RenderExportError::Unsupported => self.messages.image_unsupported.clone(),
                    other => other.to_string(),
                };
                self.notifier.notify(&message, Severity::Danger);
                ExportOutcome::RenderFailed(err)
            }
        }
    }

    fn export_svg(&self, index: usize) -> ExportOutcome {
        let node_key = render_node_key(&self.export.node_key_prefix, index);
        match self
            .renderer
            .export_render_as_svg(&node_key, &self.export.svg_file_name)
        {
            Ok(()) => {
                debug!(%node_key, file_name = %self.export.svg_file_name, "svg exported");
                ExportOutcome::SvgExported
            }
            Err(err) => {
                warn!(error = %err, %node_key, "svg export failed");
                self.notifier.notify(&err.to_string(), Severity::Danger);
                ExportOutcome::RenderFailed(err)
            }
        }
    }
}
