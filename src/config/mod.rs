//! Configuration module for paste normalization
//!
//! This module provides the `PasteConfig` struct and its builder for
//! configuring the paste handler with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::PasteConfigBuilder;
pub use types::PasteConfig;
