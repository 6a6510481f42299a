//! Getter methods for `PasteConfig`

use crate::paste::PasteMode;

use super::types::PasteConfig;

impl PasteConfig {
    #[must_use]
    pub fn mode(&self) -> PasteMode {
        self.mode
    }

    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug
    }

    #[must_use]
    pub fn max_markup_bytes(&self) -> usize {
        self.max_markup_bytes
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
