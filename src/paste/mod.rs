//! Paste event handling.
//!
//! A [`PasteHandler`] turns a [`PasteEvent`] into exactly one
//! [`PasteOutcome`]: insert cleaned markup, insert plain text, or decline so
//! the host's default paste runs.

pub mod debug_log;
pub mod event;
pub mod guard;
pub mod handler;
pub mod mode;
pub mod outcome;

pub use debug_log::DebugLog;
pub use event::PasteEvent;
pub use guard::clean_with_fallback;
pub use handler::PasteHandler;
pub use mode::PasteMode;
pub use outcome::{PasteOutcome, PasteTarget};
