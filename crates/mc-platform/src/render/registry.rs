use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// One rendered structure as produced by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStructure {
    pub svg: String,
    /// PNG raster, when the view produced one.
    pub png: Option<Vec<u8>>,
}

impl RenderedStructure {
    pub fn svg(svg: impl Into<String>) -> Self {
        Self {
            svg: svg.into(),
            png: None,
        }
    }

    pub fn with_png(mut self, png: Vec<u8>) -> Self {
        self.png = Some(png);
        self
    }
}

/// Rendered structures keyed by node key.
#[derive(Debug, Default)]
pub struct RenderRegistry {
    nodes: RwLock<HashMap<String, RenderedStructure>>,
}

impl RenderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the rendering for `node_key`.
    pub fn register(&self, node_key: impl Into<String>, structure: RenderedStructure) {
        self.nodes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(node_key.into(), structure);
    }

    pub fn remove(&self, node_key: &str) -> Option<RenderedStructure> {
        self.nodes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(node_key)
    }

    pub fn get(&self, node_key: &str) -> Option<RenderedStructure> {
        self.nodes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(node_key)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_replaces_previous_rendering() {
        let registry = RenderRegistry::new();
        registry.register("molSVG0", RenderedStructure::svg("<svg>old</svg>"));
        registry.register("molSVG0", RenderedStructure::svg("<svg>new</svg>"));

        assert_eq!(
            registry.get("molSVG0").map(|s| s.svg),
            Some("<svg>new</svg>".to_string())
        );
    }

    #[test]
    fn remove_forgets_node() {
        let registry = RenderRegistry::new();
        registry.register("molSVG1", RenderedStructure::svg("<svg/>"));

        assert!(registry.remove("molSVG1").is_some());
        assert!(registry.get("molSVG1").is_none());
    }
}
