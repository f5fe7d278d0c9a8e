//! The whole-document repository.

use chrono::Utc;
use teamboard_model::{
    AppData, Designer, LearningModule, Lesson, Project, Record, SeedData, Skill, Test,
};

use crate::error::{ImportError, PersistenceError, Result};
use crate::import::parse_document;
use crate::storage::KeyValueStorage;

/// Key the document is stored under.
pub const STORAGE_KEY: &str = "teamboard-data";

/// Sole read/write gateway to the persisted [`AppData`] document.
///
/// Every write is read-modify-write of the whole document and stamps
/// `lastUpdated`. There is no compare-and-swap: two writers sharing one
/// storage overwrite each other and the last write wins.
#[derive(Debug)]
pub struct LocalStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> LocalStore<S> {
    /// Store keeping its document under [`STORAGE_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ========================================================================
    // Whole document
    // ========================================================================

    /// The current document, `None` on first run or after clearing.
    pub fn get_all_data(&self) -> Result<Option<AppData>> {
        let Some(text) = self.storage.get(&self.key)? else {
            return Ok(None);
        };
        let data = serde_json::from_str(&text).map_err(|source| {
            PersistenceError::CorruptDocument {
                key: self.key.clone(),
                source,
            }
        })?;
        Ok(Some(data))
    }

    /// Whether a document has been written.
    pub fn is_initialized(&self) -> Result<bool> {
        Ok(self.storage.get(&self.key)?.is_some())
    }

    /// Write a fresh version-1 document built from `seed`.
    ///
    /// Fails with [`PersistenceError::AlreadyInitialized`] when a document
    /// exists; existing data is never overwritten by seeding.
    pub fn initialize_with_mock_data(&mut self, seed: SeedData) -> Result<()> {
        if self.is_initialized()? {
            return Err(PersistenceError::AlreadyInitialized);
        }
        let data = AppData::from_seed(seed, Utc::now());
        self.write(&data)?;
        tracing::info!(
            records = data.record_count(),
            "Initialized dashboard data from fixtures"
        );
        Ok(())
    }

    /// First-run helper: seed when there is no document yet.
    ///
    /// Returns `true` when it seeded.
    pub fn ensure_initialized(&mut self, seed: SeedData) -> Result<bool> {
        if self.is_initialized()? {
            return Ok(false);
        }
        self.initialize_with_mock_data(seed)?;
        Ok(true)
    }

    /// Delete the document. `get_all_data` returns `None` afterwards.
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.storage.remove(&self.key)?;
        tracing::info!("Cleared all dashboard data");
        Ok(())
    }

    // ========================================================================
    // Export / import
    // ========================================================================

    /// The stored document text, byte for byte.
    pub fn export_data(&self) -> Result<String> {
        self.storage
            .get(&self.key)?
            .ok_or(PersistenceError::NotInitialized)
    }

    /// Replace the whole document with `json`, explaining any rejection.
    ///
    /// On rejection the stored document is left exactly as it was.
    pub fn try_import_data(&mut self, json: &str) -> std::result::Result<AppData, ImportError> {
        let data = parse_document(json)?;
        self.write(&data)?;
        tracing::info!(
            records = data.record_count(),
            version = data.version,
            "Imported dashboard data"
        );
        Ok(data)
    }

    /// Replace the whole document with `json`.
    ///
    /// Returns `Ok(false)` when the input is not an acceptable document; the
    /// caller is expected to tell the user and change nothing else. Storage
    /// failures still surface as errors.
    pub fn import_data(&mut self, json: &str) -> Result<bool> {
        match self.try_import_data(json) {
            Ok(_) => Ok(true),
            Err(ImportError::Storage(e)) => Err(e),
            Err(e) => {
                tracing::warn!("Rejected import: {e}");
                Ok(false)
            }
        }
    }

    // ========================================================================
    // Collections
    // ========================================================================

    /// All records of one collection, empty without a document.
    pub fn records<R: Record>(&self) -> Result<Vec<R>> {
        Ok(self
            .get_all_data()?
            .map(|data| R::records(&data).to_vec())
            .unwrap_or_default())
    }

    /// One record by id.
    pub fn record<R: Record>(&self, id: &str) -> Result<Option<R>> {
        Ok(self
            .get_all_data()?
            .and_then(|data| data.find::<R>(id).cloned()))
    }

    /// Upsert a record by id and rewrite the document.
    ///
    /// Without a document, an empty version-1 document is started.
    pub fn save<R: Record>(&mut self, record: R) -> Result<()> {
        let now = Utc::now();
        let mut data = self
            .get_all_data()?
            .unwrap_or_else(|| AppData::empty(now));
        let id = record.id().to_string();
        let replaced = data.upsert(record);
        data.touch(now);
        self.write(&data)?;
        tracing::debug!(
            collection = R::COLLECTION,
            id = %id,
            replaced,
            "Saved record"
        );
        Ok(())
    }

    /// Remove a record by id. Returns whether anything was removed.
    pub fn delete<R: Record>(&mut self, id: &str) -> Result<bool> {
        let Some(mut data) = self.get_all_data()? else {
            return Ok(false);
        };
        if data.remove::<R>(id).is_none() {
            return Ok(false);
        }
        data.touch(Utc::now());
        self.write(&data)?;
        tracing::debug!(collection = R::COLLECTION, id, "Deleted record");
        Ok(true)
    }

    pub fn get_designers(&self) -> Result<Vec<Designer>> {
        self.records()
    }

    pub fn get_skills(&self) -> Result<Vec<Skill>> {
        self.records()
    }

    pub fn get_learning_modules(&self) -> Result<Vec<LearningModule>> {
        self.records()
    }

    pub fn get_projects(&self) -> Result<Vec<Project>> {
        self.records()
    }

    pub fn get_tests(&self) -> Result<Vec<Test>> {
        self.records()
    }

    pub fn get_lessons(&self) -> Result<Vec<Lesson>> {
        self.records()
    }

    pub fn save_designer(&mut self, designer: Designer) -> Result<()> {
        self.save(designer)
    }

    pub fn save_skill(&mut self, skill: Skill) -> Result<()> {
        self.save(skill)
    }

    pub fn save_learning_module(&mut self, module: LearningModule) -> Result<()> {
        self.save(module)
    }

    pub fn save_project(&mut self, project: Project) -> Result<()> {
        self.save(project)
    }

    pub fn save_test(&mut self, test: Test) -> Result<()> {
        self.save(test)
    }

    pub fn save_lesson(&mut self, lesson: Lesson) -> Result<()> {
        self.save(lesson)
    }

    pub fn delete_designer(&mut self, id: &str) -> Result<bool> {
        self.delete::<Designer>(id)
    }

    pub fn delete_skill(&mut self, id: &str) -> Result<bool> {
        self.delete::<Skill>(id)
    }

    pub fn delete_learning_module(&mut self, id: &str) -> Result<bool> {
        self.delete::<LearningModule>(id)
    }

    pub fn delete_project(&mut self, id: &str) -> Result<bool> {
        self.delete::<Project>(id)
    }

    pub fn delete_test(&mut self, id: &str) -> Result<bool> {
        self.delete::<Test>(id)
    }

    pub fn delete_lesson(&mut self, id: &str) -> Result<bool> {
        self.delete::<Lesson>(id)
    }

    fn write(&mut self, data: &AppData) -> Result<()> {
        let text = serde_json::to_string_pretty(data)
            .map_err(|source| PersistenceError::Serialization { source })?;
        self.storage.set(&self.key, &text)
    }
}
