//! Navigation state types.
//!
//! This module contains the value that says which screen is shown:
//! - `Section`: top-level sidebar entry
//! - `Subsection`: detail or editor screen inside a section
//! - `EditorMode`: view, edit or create
//! - `NavigationState`: the full descriptor, plus `go_back`
//! - `NavigationPatch`: a partial update shallow-merged into the state

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use teamboard_model::Lesson;

use crate::error::StateError;

// =============================================================================
// SECTION ENUM
// =============================================================================

/// Top-level dashboard section.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    /// Team overview (default)
    #[default]
    Dashboard,
    Designers,
    /// Skills matrix
    Skills,
    /// Learning modules, lessons and tests
    Learning,
    Projects,
    Analytics,
    Calendar,
    Settings,
}

impl Section {
    /// Get all sections in sidebar order.
    pub const fn all() -> &'static [Section] {
        &[
            Self::Dashboard,
            Self::Designers,
            Self::Skills,
            Self::Learning,
            Self::Projects,
            Self::Analytics,
            Self::Calendar,
            Self::Settings,
        ]
    }

    /// Identifier used in navigation values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Designers => "designers",
            Self::Skills => "skills",
            Self::Learning => "learning",
            Self::Projects => "projects",
            Self::Analytics => "analytics",
            Self::Calendar => "calendar",
            Self::Settings => "settings",
        }
    }

    /// Get the display name for this section.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Designers => "Designers",
            Self::Skills => "Skills matrix",
            Self::Learning => "Learning",
            Self::Projects => "Projects",
            Self::Analytics => "Analytics",
            Self::Calendar => "Calendar",
            Self::Settings => "Settings",
        }
    }

    /// Parse a section name, falling back to the dashboard for unknown names.
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|e| {
            tracing::warn!("{e}, showing the dashboard instead");
            Self::Dashboard
        })
    }
}

impl FromStr for Section {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| StateError::UnknownSection {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SUBSECTION ENUM
// =============================================================================

/// Detail or editor screen shown inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subsection {
    DesignerProfile,
    DesignerEditor,
    ModuleDetails,
    ModuleEditor,
    LessonView,
    LessonEditor,
    TestEditor,
    SkillEditor,
    ProjectEditor,
}

impl Subsection {
    pub const fn all() -> &'static [Subsection] {
        &[
            Self::DesignerProfile,
            Self::DesignerEditor,
            Self::ModuleDetails,
            Self::ModuleEditor,
            Self::LessonView,
            Self::LessonEditor,
            Self::TestEditor,
            Self::SkillEditor,
            Self::ProjectEditor,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DesignerProfile => "designer-profile",
            Self::DesignerEditor => "designer-editor",
            Self::ModuleDetails => "module-details",
            Self::ModuleEditor => "module-editor",
            Self::LessonView => "lesson-view",
            Self::LessonEditor => "lesson-editor",
            Self::TestEditor => "test-editor",
            Self::SkillEditor => "skill-editor",
            Self::ProjectEditor => "project-editor",
        }
    }

    /// Whether this editor belongs to a learning module.
    pub fn is_module_child_editor(&self) -> bool {
        matches!(self, Self::LessonEditor | Self::TestEditor)
    }

    /// Get the display name, which depends on the editor mode.
    pub fn label(&self, mode: EditorMode) -> &'static str {
        let creating = mode == EditorMode::Create;
        match self {
            Self::DesignerProfile => "Designer profile",
            Self::DesignerEditor if creating => "New designer",
            Self::DesignerEditor => "Edit designer",
            Self::ModuleDetails => "Module details",
            Self::ModuleEditor if creating => "New module",
            Self::ModuleEditor => "Edit module",
            Self::LessonView => "Lesson",
            Self::LessonEditor if creating => "New lesson",
            Self::LessonEditor => "Edit lesson",
            Self::TestEditor if creating => "New test",
            Self::TestEditor => "Edit test",
            Self::SkillEditor if creating => "New skill",
            Self::SkillEditor => "Edit skill",
            Self::ProjectEditor if creating => "New project",
            Self::ProjectEditor => "Edit project",
        }
    }
}

impl FromStr for Subsection {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|sub| sub.as_str() == s)
            .ok_or_else(|| StateError::UnknownSubsection {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Subsection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// EDITOR MODE ENUM
// =============================================================================

/// How an editor screen treats its record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    View,
    Edit,
    /// Default when a navigation value carries no mode
    #[default]
    Create,
}

impl EditorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Create => "create",
        }
    }
}

impl FromStr for EditorMode {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(Self::View),
            "edit" => Ok(Self::Edit),
            "create" => Ok(Self::Create),
            _ => Err(StateError::UnknownMode {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// NAVIGATION STATE
// =============================================================================

/// Record handed to a screen directly instead of by id.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationData {
    Lesson(Lesson),
}

impl NavigationData {
    pub fn lesson(&self) -> Option<&Lesson> {
        match self {
            Self::Lesson(lesson) => Some(lesson),
        }
    }
}

/// What screen is currently shown.
///
/// `subsection` only means something together with `section`. `module_id`
/// is carried while a lesson or test is edited so that going back returns to
/// the owning module.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NavigationState {
    pub section: Section,
    pub subsection: Option<Subsection>,
    pub id: Option<String>,
    pub mode: Option<EditorMode>,
    pub data: Option<NavigationData>,
    pub module_id: Option<String>,
}

impl NavigationState {
    /// The root screen of a section.
    pub fn at(section: Section) -> Self {
        Self {
            section,
            ..Self::default()
        }
    }

    /// The module editor for `module_id`, in edit mode.
    pub fn module_editor(module_id: impl Into<String>) -> Self {
        Self::at(Section::Learning)
            .with_subsection(Subsection::ModuleEditor)
            .with_id(module_id)
            .with_mode(EditorMode::Edit)
    }

    pub fn with_subsection(mut self, subsection: Subsection) -> Self {
        self.subsection = Some(subsection);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_mode(mut self, mode: EditorMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_module_id(mut self, module_id: impl Into<String>) -> Self {
        self.module_id = Some(module_id.into());
        self
    }

    pub fn with_lesson(mut self, lesson: Lesson) -> Self {
        self.data = Some(NavigationData::Lesson(lesson));
        self
    }

    /// Mode with the `create` default applied.
    pub fn effective_mode(&self) -> EditorMode {
        self.mode.unwrap_or_default()
    }

    /// The lesson payload, if one was passed.
    pub fn lesson(&self) -> Option<&Lesson> {
        self.data.as_ref().and_then(NavigationData::lesson)
    }

    /// Shallow-merge `patch` into a copy of this state.
    ///
    /// The result is not validated: a subsection that does not belong to the
    /// section is kept as given.
    pub fn merged(&self, patch: &NavigationPatch) -> Self {
        Self {
            section: patch.section.unwrap_or(self.section),
            subsection: merge_field(&self.subsection, &patch.subsection),
            id: merge_field(&self.id, &patch.id),
            mode: merge_field(&self.mode, &patch.mode),
            data: merge_field(&self.data, &patch.data),
            module_id: merge_field(&self.module_id, &patch.module_id),
        }
    }

    /// The state "back" leads to from here.
    ///
    /// Lesson and test editors return to their owning module editor, which
    /// has to be checked before the generic "drop the subsection" rule.
    pub fn go_back(&self) -> Self {
        match self.subsection {
            Some(sub) if sub.is_module_child_editor() => match &self.module_id {
                Some(module_id) => Self::module_editor(module_id.clone()),
                None => Self::at(Section::Learning),
            },
            Some(Subsection::DesignerEditor) => Self::at(Section::Designers),
            Some(_) => Self::at(self.section),
            None => Self::at(Section::Dashboard),
        }
    }
}

fn merge_field<T: Clone>(current: &Option<T>, patch: &Option<Option<T>>) -> Option<T> {
    match patch {
        Some(value) => value.clone(),
        None => current.clone(),
    }
}

// =============================================================================
// NAVIGATION PATCH
// =============================================================================

/// A partial navigation value.
///
/// Every optional field is tri-state: `None` keeps the current value,
/// `Some(None)` clears it and `Some(Some(v))` sets it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NavigationPatch {
    pub section: Option<Section>,
    pub subsection: Option<Option<Subsection>>,
    pub id: Option<Option<String>>,
    pub mode: Option<Option<EditorMode>>,
    pub data: Option<Option<NavigationData>>,
    pub module_id: Option<Option<String>>,
}

impl NavigationPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Go to the root of `section`, clearing every other field.
    pub fn section_root(section: Section) -> Self {
        Self::new()
            .section(section)
            .clear_subsection()
            .clear_id()
            .clear_mode()
            .clear_data()
            .clear_module_id()
    }

    /// Open `subsection` of `section` with every other field cleared.
    pub fn open(section: Section, subsection: Subsection) -> Self {
        Self::section_root(section).subsection(subsection)
    }

    pub fn section(mut self, section: Section) -> Self {
        self.section = Some(section);
        self
    }

    pub fn subsection(mut self, subsection: Subsection) -> Self {
        self.subsection = Some(Some(subsection));
        self
    }

    pub fn clear_subsection(mut self) -> Self {
        self.subsection = Some(None);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(Some(id.into()));
        self
    }

    pub fn clear_id(mut self) -> Self {
        self.id = Some(None);
        self
    }

    pub fn mode(mut self, mode: EditorMode) -> Self {
        self.mode = Some(Some(mode));
        self
    }

    pub fn clear_mode(mut self) -> Self {
        self.mode = Some(None);
        self
    }

    pub fn lesson(mut self, lesson: Lesson) -> Self {
        self.data = Some(Some(NavigationData::Lesson(lesson)));
        self
    }

    pub fn clear_data(mut self) -> Self {
        self.data = Some(None);
        self
    }

    pub fn module_id(mut self, module_id: impl Into<String>) -> Self {
        self.module_id = Some(Some(module_id.into()));
        self
    }

    pub fn clear_module_id(mut self) -> Self {
        self.module_id = Some(None);
        self
    }
}
