//! Routing from navigation state to the screen to render.
//!
//! `View` has one variant per screen. Variants carry exactly what the screen
//! needs, so a lesson view without its lesson cannot be constructed.

use teamboard_model::Lesson;

use crate::navigation::{EditorMode, NavigationState, Section, Subsection};

/// The screen selected by a [`NavigationState`].
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Root screen of a section.
    Section(Section),

    DesignerProfile {
        designer_id: String,
    },

    /// Designer form. `designer_id` is absent when creating.
    DesignerEditor {
        designer_id: Option<String>,
        mode: EditorMode,
    },

    ModuleDetails {
        module_id: String,
    },

    ModuleEditor {
        module_id: Option<String>,
        mode: EditorMode,
    },

    /// Read-only lesson, passed by value from the module screen.
    LessonView {
        lesson: Lesson,
    },

    LessonEditor {
        lesson_id: Option<String>,
        /// Owning module; where "back" returns to.
        module_id: Option<String>,
        mode: EditorMode,
    },

    TestEditor {
        test_id: Option<String>,
        module_id: Option<String>,
        mode: EditorMode,
    },

    SkillEditor {
        skill_id: Option<String>,
        mode: EditorMode,
    },

    ProjectEditor {
        project_id: Option<String>,
        mode: EditorMode,
    },
}

impl View {
    /// Pick the screen for `nav`. The first matching row wins.
    ///
    /// Detail screens that need an id or a payload fall through to the
    /// section root when it is missing.
    pub fn resolve(nav: &NavigationState) -> Self {
        let mode = nav.effective_mode();
        let module_id = nav.module_id.clone();

        match (nav.subsection, nav.id.clone(), nav.lesson()) {
            (Some(Subsection::DesignerProfile), Some(designer_id), _) => {
                Self::DesignerProfile { designer_id }
            }
            (Some(Subsection::DesignerEditor), designer_id, _) => {
                Self::DesignerEditor { designer_id, mode }
            }
            (Some(Subsection::ModuleDetails), Some(module_id), _) => {
                Self::ModuleDetails { module_id }
            }
            (Some(Subsection::ModuleEditor), module_id, _) => {
                Self::ModuleEditor { module_id, mode }
            }
            (Some(Subsection::LessonView), _, Some(lesson)) => Self::LessonView {
                lesson: lesson.clone(),
            },
            (Some(Subsection::LessonEditor), lesson_id, _) => Self::LessonEditor {
                lesson_id,
                module_id,
                mode,
            },
            (Some(Subsection::TestEditor), test_id, _) => Self::TestEditor {
                test_id,
                module_id,
                mode,
            },
            (Some(Subsection::SkillEditor), skill_id, _) => Self::SkillEditor { skill_id, mode },
            (Some(Subsection::ProjectEditor), project_id, _) => {
                Self::ProjectEditor { project_id, mode }
            }
            _ => Self::Section(nav.section),
        }
    }

    /// Section root screen, if this is one.
    pub fn section(&self) -> Option<Section> {
        match self {
            Self::Section(section) => Some(*section),
            _ => None,
        }
    }

    /// Whether this screen is a form.
    pub fn is_editor(&self) -> bool {
        matches!(
            self,
            Self::DesignerEditor { .. }
                | Self::ModuleEditor { .. }
                | Self::LessonEditor { .. }
                | Self::TestEditor { .. }
                | Self::SkillEditor { .. }
                | Self::ProjectEditor { .. }
        )
    }

    /// Short name for logs and the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Section(section) => section.as_str(),
            Self::DesignerProfile { .. } => Subsection::DesignerProfile.as_str(),
            Self::DesignerEditor { .. } => Subsection::DesignerEditor.as_str(),
            Self::ModuleDetails { .. } => Subsection::ModuleDetails.as_str(),
            Self::ModuleEditor { .. } => Subsection::ModuleEditor.as_str(),
            Self::LessonView { .. } => Subsection::LessonView.as_str(),
            Self::LessonEditor { .. } => Subsection::LessonEditor.as_str(),
            Self::TestEditor { .. } => Subsection::TestEditor.as_str(),
            Self::SkillEditor { .. } => Subsection::SkillEditor.as_str(),
            Self::ProjectEditor { .. } => Subsection::ProjectEditor.as_str(),
        }
    }
}

impl From<&NavigationState> for View {
    fn from(nav: &NavigationState) -> Self {
        Self::resolve(nav)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_roots() {
        for section in Section::all() {
            let view = View::resolve(&NavigationState::at(*section));
            assert_eq!(view, View::Section(*section));
            assert!(!view.is_editor());
        }
    }

    #[test]
    fn test_profile_requires_id() {
        let nav = NavigationState::at(Section::Designers)
            .with_subsection(Subsection::DesignerProfile);
        assert_eq!(View::resolve(&nav), View::Section(Section::Designers));

        let nav = nav.with_id("d1");
        assert_eq!(
            View::resolve(&nav),
            View::DesignerProfile {
                designer_id: "d1".into()
            }
        );
    }

    #[test]
    fn test_designer_editor_defaults_to_create() {
        let nav = NavigationState::at(Section::Designers)
            .with_subsection(Subsection::DesignerEditor);
        let view = View::resolve(&nav);
        assert_eq!(
            view,
            View::DesignerEditor {
                designer_id: None,
                mode: EditorMode::Create
            }
        );
        assert!(view.is_editor());
    }

    #[test]
    fn test_lesson_view_requires_payload() {
        let nav = NavigationState::at(Section::Learning).with_subsection(Subsection::LessonView);
        assert_eq!(View::resolve(&nav), View::Section(Section::Learning));

        let lesson = Lesson::new("l1", "m1", "Grids");
        let nav = nav.with_lesson(lesson.clone());
        assert_eq!(View::resolve(&nav), View::LessonView { lesson });
    }

    #[test]
    fn test_lesson_editor_carries_module() {
        let nav = NavigationState::at(Section::Learning)
            .with_subsection(Subsection::LessonEditor)
            .with_module_id("m1")
            .with_mode(EditorMode::Edit)
            .with_id("l1");
        assert_eq!(
            View::resolve(&nav),
            View::LessonEditor {
                lesson_id: Some("l1".into()),
                module_id: Some("m1".into()),
                mode: EditorMode::Edit,
            }
        );
    }

    #[test]
    fn test_editor_in_foreign_section() {
        let nav = NavigationState::at(Section::Calendar).with_subsection(Subsection::ProjectEditor);
        assert_eq!(View::resolve(&nav).name(), "project-editor");
    }
}
