//! Root application state.
//!
//! `AppState` is passed explicitly to whatever renders it and changes only
//! through [`AppState::update`]. Views and breadcrumbs are derived from the
//! navigation state on demand.

use teamboard_persistence::PersistenceError;
use uuid::Uuid;

use crate::breadcrumb::{Breadcrumb, breadcrumbs};
use crate::navigation::{NavigationPatch, NavigationState};
use crate::notifications::{NewNotification, NotificationCenter};
use crate::settings::Settings;
use crate::view::View;

/// Everything that can change the application state.
#[derive(Debug, Clone)]
pub enum Message {
    /// Shallow-merge a partial navigation value.
    Navigate(NavigationPatch),
    /// Replace the navigation state wholesale.
    Replace(NavigationState),
    GoBack,
    /// Activate the breadcrumb at this index of the current trail.
    SelectBreadcrumb(usize),
    Notify(NewNotification),
    MarkNotificationRead(Uuid),
    MarkAllNotificationsRead,
    DismissNotification(Uuid),
    ClearNotifications,
}

#[derive(Debug, Clone)]
pub struct AppState {
    navigation: NavigationState,
    notifications: NotificationCenter,
    settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    /// Start on the dashboard with an empty notification center.
    pub fn new(settings: Settings) -> Self {
        Self {
            navigation: NavigationState::default(),
            notifications: NotificationCenter::with_capacity(settings.notifications.capacity),
            settings,
        }
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Screen for the current navigation state.
    pub fn view(&self) -> View {
        View::resolve(&self.navigation)
    }

    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        breadcrumbs(&self.navigation)
    }

    /// Apply one message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Navigate(patch) => self.navigate_to(&patch),
            Message::Replace(state) => self.replace(state),
            Message::GoBack => self.go_back(),
            Message::SelectBreadcrumb(index) => {
                let Some(crumb) = self.breadcrumbs().into_iter().nth(index) else {
                    tracing::debug!(index, "Ignoring out-of-range breadcrumb");
                    return;
                };
                self.replace(crumb.target);
            }
            Message::Notify(new) => {
                self.notify(new);
            }
            Message::MarkNotificationRead(id) => {
                self.notifications.mark_read(id);
            }
            Message::MarkAllNotificationsRead => self.notifications.mark_all_read(),
            Message::DismissNotification(id) => {
                self.notifications.dismiss(id);
            }
            Message::ClearNotifications => self.notifications.clear(),
        }
    }

    /// Merge `patch` into the navigation state.
    pub fn navigate_to(&mut self, patch: &NavigationPatch) {
        let next = self.navigation.merged(patch);
        self.replace(next);
    }

    pub fn go_back(&mut self) {
        let previous = self.navigation.go_back();
        self.replace(previous);
    }

    fn replace(&mut self, state: NavigationState) {
        tracing::debug!(
            section = %state.section,
            subsection = ?state.subsection,
            id = ?state.id,
            "Navigate"
        );
        self.navigation = state;
    }

    /// Add a notification and return its id.
    pub fn notify(&mut self, new: NewNotification) -> Uuid {
        self.notifications.add(new)
    }

    /// Report a failed store operation to the user.
    pub fn notify_persistence_error(&mut self, title: &str, error: &PersistenceError) -> Uuid {
        let mut message = error.user_message();
        if let Some(suggestion) = error.suggestion() {
            message.push(' ');
            message.push_str(&suggestion);
        }
        self.notify(NewNotification::error(title, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{EditorMode, Section, Subsection};
    use crate::notifications::NotificationKind;

    #[test]
    fn test_starts_on_dashboard() {
        let state = AppState::default();
        assert_eq!(state.view(), View::Section(Section::Dashboard));
        assert_eq!(state.breadcrumbs().len(), 1);
    }

    #[test]
    fn test_navigate_and_back() {
        let mut state = AppState::default();
        state.update(Message::Navigate(
            NavigationPatch::open(Section::Learning, Subsection::LessonEditor)
                .module_id("M1")
                .mode(EditorMode::Create),
        ));
        assert!(state.view().is_editor());

        state.update(Message::GoBack);
        assert_eq!(state.navigation(), &NavigationState::module_editor("M1"));

        state.update(Message::GoBack);
        assert_eq!(state.view(), View::Section(Section::Learning));

        state.update(Message::GoBack);
        assert_eq!(state.view(), View::Section(Section::Dashboard));
    }

    #[test]
    fn test_select_breadcrumb() {
        let mut state = AppState::default();
        state.update(Message::Replace(
            NavigationState::at(Section::Learning)
                .with_subsection(Subsection::TestEditor)
                .with_module_id("M9")
                .with_id("T1"),
        ));

        state.update(Message::SelectBreadcrumb(7));
        assert_eq!(state.navigation().id.as_deref(), Some("T1"));

        state.update(Message::SelectBreadcrumb(1));
        assert_eq!(state.navigation(), &NavigationState::module_editor("M9"));

        state.update(Message::SelectBreadcrumb(0));
        assert_eq!(state.navigation(), &NavigationState::at(Section::Learning));
    }

    #[test]
    fn test_notification_messages() {
        let mut settings = Settings::default();
        settings.notifications.capacity = 2;
        let mut state = AppState::new(settings);

        state.update(Message::Notify(NewNotification::info("a", "")));
        state.update(Message::Notify(NewNotification::info("b", "")));
        state.update(Message::Notify(NewNotification::info("c", "")));
        assert_eq!(state.notifications().len(), 2);

        let newest = state.notifications().iter().next().map(|n| n.id).unwrap();
        state.update(Message::MarkNotificationRead(newest));
        assert_eq!(state.notifications().unread_count(), 1);

        state.update(Message::DismissNotification(newest));
        state.update(Message::MarkAllNotificationsRead);
        assert_eq!(state.notifications().unread_count(), 0);
        assert_eq!(state.notifications().len(), 1);

        state.update(Message::ClearNotifications);
        assert!(state.notifications().is_empty());
    }

    #[test]
    fn test_persistence_error_notification() {
        let mut state = AppState::default();
        let id = state.notify_persistence_error("Save failed", &PersistenceError::NotInitialized);
        let notification = state.notifications().get(id).unwrap();
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.title, "Save failed");
        assert!(!notification.message.is_empty());
    }
}
