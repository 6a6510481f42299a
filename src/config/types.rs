//! Core configuration types for paste normalization
//!
//! This module contains the `PasteConfig` struct consumed by the paste
//! handler, plus JSON loading helpers.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::PasteResult;
use crate::paste::PasteMode;
use crate::utils::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_MARKUP_BYTES};

use super::builder::PasteConfigBuilder;

/// Main configuration struct for the paste handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PasteConfig {
    /// Cleaning policy applied to every paste event.
    ///
    /// Default: `cleanHtml`
    pub(crate) mode: PasteMode,

    /// Emit debug logging for each paste decision.
    ///
    /// Logging goes through the `log` facade with target `paste_cleaner`;
    /// when false the pipeline emits no debug records at all.
    pub(crate) debug: bool,

    /// Markup payloads larger than this are declined.
    ///
    /// Default: 10 MB
    pub(crate) max_markup_bytes: usize,

    /// Deepest element nesting the normalizer descends into before giving up.
    ///
    /// Default: 512
    pub(crate) max_depth: usize,
}

impl Default for PasteConfig {
    fn default() -> Self {
        Self {
            mode: PasteMode::default(),
            debug: false,
            max_markup_bytes: DEFAULT_MAX_MARKUP_BYTES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl PasteConfig {
    #[must_use]
    pub fn builder() -> PasteConfigBuilder {
        PasteConfigBuilder::new()
    }

    /// Parse a JSON configuration; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the values fail validation.
    pub fn from_json_str(json: &str) -> PasteResult<Self> {
        let config: PasteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content is invalid.
    pub fn from_json_file(path: impl AsRef<Path>) -> PasteResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Same configuration with a different mode.
    #[must_use]
    pub fn with_mode(mut self, mode: PasteMode) -> Self {
        self.mode = mode;
        self
    }

    pub(crate) fn validate(&self) -> anyhow::Result<()> {
        if self.max_markup_bytes == 0 {
            anyhow::bail!("max_markup_bytes must be greater than zero");
        }
        if self.max_depth == 0 {
            anyhow::bail!("max_depth must be greater than zero");
        }
        Ok(())
    }
}
