//! Auto-save functionality for editor forms.
//!
//! Provides:
//! - `AutosaveTimer` - Debounced save deadline plus the unsaved-changes flag
//! - `AutoSaveConfig` - User settings for auto-save behavior

mod config;
mod timer;

pub use config::AutoSaveConfig;
pub use timer::AutosaveTimer;
