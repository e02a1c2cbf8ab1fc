use super::ExportTarget;

/// One entry of the "Export As" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportMenuItem {
    pub id: &'static str,
    pub text: &'static str,
    pub target: ExportTarget,
}

pub const EXPORT_MENU: [ExportMenuItem; 5] = [
    ExportMenuItem {
        id: "smiles",
        text: "Copy as SMILES",
        target: ExportTarget::Smiles,
    },
    ExportMenuItem {
        id: "molfileV3",
        text: "Copy as molfile V3",
        target: ExportTarget::MolfileV3,
    },
    ExportMenuItem {
        id: "molfileV2",
        text: "Copy as molfile V2",
        target: ExportTarget::MolfileV2,
    },
    ExportMenuItem {
        id: "png",
        text: "Copy as PNG",
        target: ExportTarget::Png,
    },
    ExportMenuItem {
        id: "svg",
        text: "Export as SVG",
        target: ExportTarget::Svg,
    },
];
