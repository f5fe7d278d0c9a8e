//! Breadcrumb trail derived from the navigation state.

use crate::navigation::{EditorMode, NavigationState, Subsection};

/// One clickable step of the trail.
#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumb {
    pub label: String,
    /// Navigation state that replaces the current one when activated.
    pub target: NavigationState,
}

impl Breadcrumb {
    fn new(label: impl Into<String>, target: NavigationState) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }
}

/// Build the trail for `nav`: section, owning module (lesson and test
/// editors only), then the current subsection.
pub fn breadcrumbs(nav: &NavigationState) -> Vec<Breadcrumb> {
    let mut trail = vec![Breadcrumb::new(
        nav.section.label(),
        NavigationState::at(nav.section),
    )];

    let Some(subsection) = nav.subsection else {
        return trail;
    };

    if subsection.is_module_child_editor()
        && let Some(module_id) = &nav.module_id
    {
        trail.push(Breadcrumb::new(
            Subsection::ModuleEditor.label(EditorMode::Edit),
            NavigationState::module_editor(module_id.clone()),
        ));
    }

    trail.push(Breadcrumb::new(
        subsection.label(nav.effective_mode()),
        nav.clone(),
    ));
    trail
}

/// Render the labels joined with " / ".
pub fn format_trail(trail: &[Breadcrumb]) -> String {
    trail
        .iter()
        .map(|crumb| crumb.label.as_str())
        .collect::<Vec<_>>()
        .join(" / ")
}
