//! Builder for `PasteConfig`
//!
//! Every field has a default, so the builder needs no type states; `build`
//! validates the limits before handing out a configuration.

use anyhow::Result;

use crate::paste::PasteMode;

use super::types::PasteConfig;

#[derive(Debug, Clone, Default)]
pub struct PasteConfigBuilder {
    pub(crate) config: PasteConfig,
}

impl PasteConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(mut self, mode: PasteMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Enable debug logging of paste decisions
    ///
    /// Records are emitted through the `log` facade at debug level; the host
    /// still needs a logger (e.g. `env_logger`) with a matching filter.
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    #[must_use]
    pub fn max_markup_bytes(mut self, bytes: usize) -> Self {
        self.config.max_markup_bytes = bytes;
        self
    }

    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// # Errors
    ///
    /// Returns an error if a limit is zero.
    pub fn build(self) -> Result<PasteConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
