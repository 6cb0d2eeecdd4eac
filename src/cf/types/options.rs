//! Decoding options.

use super::models::ContainerMode;

/// Default bound on how many container levels may nest inside each other.
pub const DEFAULT_MAX_CONTAINER_DEPTH: usize = 16;

/// Default bound on brace nesting in structural text.
pub const DEFAULT_MAX_TEXT_DEPTH: usize = 256;

/// Settings for opening a container and indexing its payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Storage mode of the outermost container. Nested containers are always raw.
    pub mode: ContainerMode,
    /// Maximum nesting of containers inside row bodies.
    pub max_container_depth: usize,
    /// Maximum brace nesting accepted by the structural-text indexer.
    pub max_text_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            mode: ContainerMode::Compressed,
            max_container_depth: DEFAULT_MAX_CONTAINER_DEPTH,
            max_text_depth: DEFAULT_MAX_TEXT_DEPTH,
        }
    }
}

impl DecodeOptions {
    /// Options for a container whose bodies are already inflated.
    pub fn raw() -> Self {
        Self {
            mode: ContainerMode::Raw,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: ContainerMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_container_depth(mut self, depth: usize) -> Self {
        self.max_container_depth = depth;
        self
    }

    pub fn with_max_text_depth(mut self, depth: usize) -> Self {
        self.max_text_depth = depth;
        self
    }
}
