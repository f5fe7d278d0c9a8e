//! Designer form state.
//!
//! The editor owns a draft copy of a designer. Edits go to the draft and
//! schedule a debounced autosave; nothing reaches the store until
//! [`DesignerEditor::save`] or [`DesignerEditor::poll_autosave`] runs.

use std::time::Instant;

use chrono::Utc;
use teamboard_model::{Designer, MAX_LEVEL, SkillRating, Validate, ValidationIssue};
use teamboard_persistence::{AutoSaveConfig, AutosaveTimer, KeyValueStorage, LocalStore};
use uuid::Uuid;

use crate::error::EditorError;
use crate::navigation::EditorMode;

/// What a successful save did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// First save of a new designer.
    Created,
    Updated,
}

#[derive(Debug, Clone)]
pub struct DesignerEditor {
    draft: Designer,
    mode: EditorMode,
    timer: AutosaveTimer,
    config: AutoSaveConfig,
    issues: Vec<ValidationIssue>,
}

impl DesignerEditor {
    /// Editor for a new designer with a fresh id.
    pub fn create(config: AutoSaveConfig) -> Self {
        let draft = Designer::new(Uuid::new_v4().to_string(), "");
        Self::with_mode(draft, EditorMode::Create, config)
    }

    /// Editor for an existing designer.
    pub fn edit(designer: Designer, config: AutoSaveConfig) -> Self {
        Self::with_mode(designer, EditorMode::Edit, config)
    }

    /// Read-only view of a designer; edits are ignored.
    pub fn view(designer: Designer) -> Self {
        Self::with_mode(designer, EditorMode::View, AutoSaveConfig::disabled())
    }

    /// Load designer `id` from the store for editing.
    pub fn open<S: KeyValueStorage>(
        store: &LocalStore<S>,
        id: &str,
        config: AutoSaveConfig,
    ) -> Result<Self, EditorError> {
        store
            .record::<Designer>(id)?
            .map(|designer| Self::edit(designer, config))
            .ok_or_else(|| EditorError::NotFound { id: id.to_string() })
    }

    fn with_mode(draft: Designer, mode: EditorMode, config: AutoSaveConfig) -> Self {
        let issues = draft.validate();
        Self {
            draft,
            mode,
            timer: AutosaveTimer::new(),
            config,
            issues,
        }
    }

    pub fn draft(&self) -> &Designer {
        &self.draft
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Issues found by the last validation, in field order.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Whether the draft has changes that were not saved yet.
    pub fn is_dirty(&self) -> bool {
        self.timer.is_dirty()
    }

    pub fn autosave_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Apply an edit made at `now`. Returns false in view mode.
    pub fn update(&mut self, now: Instant, edit: impl FnOnce(&mut Designer)) -> bool {
        if self.mode == EditorMode::View {
            return false;
        }
        edit(&mut self.draft);
        self.issues = self.draft.validate();
        self.timer.mark_changed(now, &self.config);
        true
    }

    /// Add a zero-rated skill unless the designer already has it.
    pub fn add_skill(&mut self, now: Instant, skill_id: &str) -> bool {
        if self.draft.skill(skill_id).is_some() {
            return false;
        }
        self.update(now, |d| d.skills.push(SkillRating::new(skill_id, 0, 0)))
    }

    pub fn remove_skill(&mut self, now: Instant, skill_id: &str) -> bool {
        if self.draft.skill(skill_id).is_none() {
            return false;
        }
        self.update(now, |d| d.skills.retain(|s| s.skill_id != skill_id))
    }

    /// Move the current-level slider. The target is raised when it would
    /// fall below the new level.
    pub fn set_skill_level(&mut self, now: Instant, skill_id: &str, level: u8) -> bool {
        let level = level.min(MAX_LEVEL);
        self.update_rating(now, skill_id, |rating| {
            rating.current_level = level;
            rating.target_level = rating.target_level.max(level);
        })
    }

    /// Move the target slider, bounded to `current_level..=100`.
    pub fn set_skill_target(&mut self, now: Instant, skill_id: &str, target: u8) -> bool {
        self.update_rating(now, skill_id, |rating| {
            rating.target_level = target.clamp(rating.current_level, MAX_LEVEL);
        })
    }

    fn update_rating(
        &mut self,
        now: Instant,
        skill_id: &str,
        edit: impl FnOnce(&mut SkillRating),
    ) -> bool {
        if self.draft.skill(skill_id).is_none() {
            return false;
        }
        self.update(now, |d| {
            if let Some(rating) = d.skills.iter_mut().find(|s| s.skill_id == skill_id) {
                edit(rating);
                rating.last_updated = Some(Utc::now());
            }
        })
    }

    /// Re-run validation and return the issues.
    pub fn validate(&mut self) -> &[ValidationIssue] {
        self.issues = self.draft.validate();
        &self.issues
    }

    /// Validate, bump the designer's version and upsert it.
    ///
    /// The draft is only replaced by the saved record when the store write
    /// succeeds. A new designer switches the editor to edit mode.
    pub fn save<S: KeyValueStorage>(
        &mut self,
        store: &mut LocalStore<S>,
    ) -> Result<SaveOutcome, EditorError> {
        if !self.validate().is_empty() {
            return Err(EditorError::Invalid(self.issues.clone()));
        }

        self.timer.start_save();
        let mut record = self.draft.clone();
        record.touch(Utc::now());

        if let Err(e) = store.save_designer(record.clone()) {
            tracing::warn!(designer_id = %record.id, error = %e, "Designer save failed");
            self.timer.save_failed();
            return Err(e.into());
        }

        self.draft = record;
        self.timer.save_complete();

        let outcome = match self.mode {
            EditorMode::Create => {
                self.mode = EditorMode::Edit;
                SaveOutcome::Created
            }
            _ => SaveOutcome::Updated,
        };
        tracing::info!(
            designer_id = %self.draft.id,
            version = self.draft.version,
            ?outcome,
            "Designer saved"
        );
        Ok(outcome)
    }

    /// Run the debounced autosave if it is due at `now`.
    ///
    /// Only edit mode autosaves; a new designer needs an explicit first save.
    /// An invalid draft drops the pending save until the next edit.
    pub fn poll_autosave<S: KeyValueStorage>(
        &mut self,
        now: Instant,
        store: &mut LocalStore<S>,
    ) -> Result<bool, EditorError> {
        if !self.timer.is_due(now) {
            return Ok(false);
        }
        if self.mode != EditorMode::Edit || !self.is_valid() {
            self.timer.cancel();
            return Ok(false);
        }
        self.save(store)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use teamboard_persistence::MemoryStorage;

    fn valid_designer() -> Designer {
        let mut designer = Designer::new("d1", "Ada");
        designer.position = "Product designer".into();
        designer.email = "ada@example.com".into();
        designer.skills.push(SkillRating::new("figma", 40, 60));
        designer
    }

    fn store_with(designer: &Designer) -> LocalStore<MemoryStorage> {
        let mut store = LocalStore::new(MemoryStorage::new());
        store.save_designer(designer.clone()).unwrap();
        store
    }

    #[test]
    fn test_level_slider_raises_target() {
        let mut editor = DesignerEditor::edit(valid_designer(), AutoSaveConfig::default());
        let now = Instant::now();

        assert!(editor.set_skill_level(now, "figma", 80));
        let rating = editor.draft().skill("figma").unwrap();
        assert_eq!((rating.current_level, rating.target_level), (80, 80));

        editor.set_skill_level(now, "figma", 250);
        assert_eq!(editor.draft().skill("figma").unwrap().current_level, 100);
        assert!(!editor.set_skill_level(now, "sketch", 10));
    }

    #[test]
    fn test_target_slider_bounds() {
        let mut editor = DesignerEditor::edit(valid_designer(), AutoSaveConfig::default());
        let now = Instant::now();

        editor.set_skill_target(now, "figma", 10);
        assert_eq!(editor.draft().skill("figma").unwrap().target_level, 40);
        editor.set_skill_target(now, "figma", 200);
        assert_eq!(editor.draft().skill("figma").unwrap().target_level, 100);
    }

    #[test]
    fn test_add_and_remove_skill() {
        let mut editor = DesignerEditor::edit(valid_designer(), AutoSaveConfig::default());
        let now = Instant::now();

        assert!(editor.add_skill(now, "sketch"));
        assert!(!editor.add_skill(now, "sketch"));
        assert_eq!(editor.draft().skills.len(), 2);
        assert!(editor.remove_skill(now, "figma"));
        assert!(!editor.remove_skill(now, "figma"));
    }

    #[test]
    fn test_invalid_draft_blocks_save() {
        let mut store = LocalStore::new(MemoryStorage::new());
        let mut editor = DesignerEditor::create(AutoSaveConfig::default());

        let err = editor.save(&mut store).unwrap_err();
        match err {
            EditorError::Invalid(issues) => {
                let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
                assert_eq!(fields, ["name", "position", "email"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(store.get_designers().unwrap().is_empty());
    }

    #[test]
    fn test_create_then_save_switches_to_edit() {
        let mut store = LocalStore::new(MemoryStorage::new());
        let mut editor = DesignerEditor::create(AutoSaveConfig::default());
        let now = Instant::now();
        editor.update(now, |d| {
            d.name = "Grace".into();
            d.position = "UX lead".into();
            d.email = "grace@example.com".into();
        });

        assert_eq!(editor.save(&mut store).unwrap(), SaveOutcome::Created);
        assert_eq!(editor.mode(), EditorMode::Edit);
        assert_eq!(editor.draft().version, 1);
        assert!(!editor.is_dirty());

        assert_eq!(editor.save(&mut store).unwrap(), SaveOutcome::Updated);
        let stored = store.get_designers().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].version, 2);
        assert!(stored[0].last_modified.is_some());
    }

    #[test]
    fn test_autosave_waits_for_debounce() {
        let designer = valid_designer();
        let mut store = store_with(&designer);
        let mut editor = DesignerEditor::open(&store, "d1", AutoSaveConfig::default()).unwrap();
        let start = Instant::now();

        editor.update(start, |d| d.bio = Some("Type nerd".into()));
        assert!(!editor.poll_autosave(start + Duration::from_millis(1999), &mut store).unwrap());
        assert_eq!(store.record::<Designer>("d1").unwrap().unwrap().bio, None);

        assert!(editor.poll_autosave(start + Duration::from_millis(2000), &mut store).unwrap());
        let saved = store.record::<Designer>("d1").unwrap().unwrap();
        assert_eq!(saved.bio.as_deref(), Some("Type nerd"));
        assert_eq!(saved.version, designer.version + 1);
    }

    #[test]
    fn test_autosave_skips_invalid_draft() {
        let mut store = store_with(&valid_designer());
        let mut editor = DesignerEditor::open(&store, "d1", AutoSaveConfig::default()).unwrap();
        let start = Instant::now();

        editor.update(start, |d| d.email = "not-an-email".into());
        assert!(!editor.is_valid());
        assert!(!editor.poll_autosave(start + Duration::from_secs(5), &mut store).unwrap());
        assert!(editor.autosave_deadline().is_none());
        assert!(editor.is_dirty());
    }

    #[test]
    fn test_create_mode_never_autosaves() {
        let mut store = LocalStore::new(MemoryStorage::new());
        let mut editor = DesignerEditor::create(AutoSaveConfig::default());
        let start = Instant::now();
        editor.update(start, |d| {
            d.name = "Grace".into();
            d.position = "UX lead".into();
            d.email = "grace@example.com".into();
        });

        assert!(!editor.poll_autosave(start + Duration::from_secs(5), &mut store).unwrap());
        assert!(store.get_designers().unwrap().is_empty());
    }

    #[test]
    fn test_view_mode_ignores_edits() {
        let mut editor = DesignerEditor::view(valid_designer());
        assert!(!editor.update(Instant::now(), |d| d.name.clear()));
        assert_eq!(editor.draft().name, "Ada");
    }

    #[test]
    fn test_open_missing_designer() {
        let store = LocalStore::new(MemoryStorage::new());
        let err = DesignerEditor::open(&store, "ghost", AutoSaveConfig::default()).unwrap_err();
        assert!(matches!(err, EditorError::NotFound { id } if id == "ghost"));
    }
}
