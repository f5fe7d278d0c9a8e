//! Navigation properties over arbitrary navigation sequences.

use proptest::prelude::*;
use teamboard_model::Lesson;
use teamboard_state::{
    AppState, EditorMode, Message, NavigationData, NavigationPatch, NavigationState, Section,
    Subsection, View, breadcrumbs,
};

fn section() -> impl Strategy<Value = Section> {
    proptest::sample::select(Section::all())
}

fn subsection() -> impl Strategy<Value = Subsection> {
    proptest::sample::select(Subsection::all())
}

fn mode() -> impl Strategy<Value = EditorMode> {
    prop_oneof![
        Just(EditorMode::View),
        Just(EditorMode::Edit),
        Just(EditorMode::Create),
    ]
}

fn record_id() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}"
}

fn lesson_data() -> impl Strategy<Value = NavigationData> {
    (record_id(), record_id()).prop_map(|(id, module_id)| {
        NavigationData::Lesson(Lesson::new(id, module_id, "Lesson"))
    })
}

fn patch() -> impl Strategy<Value = NavigationPatch> {
    (
        proptest::option::of(section()),
        proptest::option::of(proptest::option::of(subsection())),
        proptest::option::of(proptest::option::of(record_id())),
        proptest::option::of(proptest::option::of(mode())),
        proptest::option::of(proptest::option::of(lesson_data())),
        proptest::option::of(proptest::option::of(record_id())),
    )
        .prop_map(|(section, subsection, id, mode, data, module_id)| NavigationPatch {
            section,
            subsection,
            id,
            mode,
            data,
            module_id,
        })
}

fn state() -> impl Strategy<Value = NavigationState> {
    patch().prop_map(|p| NavigationState::default().merged(&p))
}

proptest! {
    #[test]
    fn resolved_view_matches_navigation(patches in proptest::collection::vec(patch(), 0..12)) {
        let mut app = AppState::default();
        for p in patches {
            app.update(Message::Navigate(p));
        }

        let nav = app.navigation();
        match app.view() {
            View::Section(section) => prop_assert_eq!(section, nav.section),
            view => prop_assert_eq!(Some(view.name()), nav.subsection.map(|s| s.as_str())),
        }
    }

    #[test]
    fn back_from_module_child_editor_returns_to_module(
        nav in state(),
        child in prop_oneof![Just(Subsection::LessonEditor), Just(Subsection::TestEditor)],
        module_id in record_id(),
    ) {
        let nav = NavigationState {
            subsection: Some(child),
            module_id: Some(module_id.clone()),
            ..nav
        };

        prop_assert_eq!(
            nav.go_back(),
            NavigationState::at(Section::Learning)
                .with_subsection(Subsection::ModuleEditor)
                .with_id(module_id)
                .with_mode(EditorMode::Edit)
        );
    }

    #[test]
    fn module_crumb_targets_back(nav in state(), module_id in record_id()) {
        let nav = NavigationState {
            subsection: Some(Subsection::LessonEditor),
            module_id: Some(module_id),
            ..nav
        };

        let trail = breadcrumbs(&nav);
        prop_assert_eq!(trail.len(), 3);
        prop_assert_eq!(trail[1].label.as_str(), "Edit module");
        prop_assert_eq!(&trail[1].target, &nav.go_back());
        prop_assert_eq!(&trail[2].target, &nav);
    }

    #[test]
    fn back_always_clears_editor_context(nav in state()) {
        let back = nav.go_back();
        prop_assert!(back.data.is_none());
        prop_assert!(back.module_id.is_none());
    }
}

#[test]
fn back_from_lesson_editor_without_module() {
    let nav = NavigationState::at(Section::Learning)
        .with_subsection(Subsection::LessonEditor)
        .with_id("L1")
        .with_mode(EditorMode::Edit);
    assert_eq!(nav.go_back(), NavigationState::at(Section::Learning));
}

#[test]
fn sidebar_click_resets_editor() {
    let mut app = AppState::default();
    app.update(Message::Replace(
        NavigationState::at(Section::Projects)
            .with_subsection(Subsection::ProjectEditor)
            .with_id("p1")
            .with_mode(EditorMode::Edit),
    ));
    app.update(Message::Navigate(NavigationPatch::section_root(Section::Calendar)));
    assert_eq!(app.navigation(), &NavigationState::at(Section::Calendar));
    assert_eq!(app.view(), View::Section(Section::Calendar));
}
