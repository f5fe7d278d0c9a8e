//! Application state management for Teamboard.
//!
//! This crate contains every runtime state type of the dashboard, free of
//! any rendering code. The architecture separates concerns into:
//!
//! - **NavigationState**: what screen is shown, merged and replaced by
//!   navigation actions
//! - **View**: the closed routing table resolved from the navigation state
//! - **Breadcrumbs**: the clickable trail derived from the navigation state
//! - **NotificationCenter**: in-memory, capped, newest-first notifications
//! - **DesignerEditor**: designer form with validation and debounced autosave
//! - **AppState**: the root, updated only through [`Message`]s

mod app;
mod breadcrumb;
mod editor;
mod error;
mod navigation;
mod notifications;
mod settings;
mod view;

pub use app::{AppState, Message};
pub use breadcrumb::{Breadcrumb, breadcrumbs, format_trail};
pub use editor::{DesignerEditor, SaveOutcome};
pub use error::{EditorError, SettingsError, StateError};
pub use navigation::{
    EditorMode, NavigationData, NavigationPatch, NavigationState, Section, Subsection,
};
pub use notifications::{
    DEFAULT_NOTIFICATION_CAPACITY, NewNotification, Notification, NotificationCenter,
    NotificationKind,
};
pub use settings::{GeneralSettings, NotificationSettings, Settings, StorageSettings};
pub use view::View;
