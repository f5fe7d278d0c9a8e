//! Local persistence for Teamboard.
//!
//! All dashboard state is kept as one JSON document ([`AppData`]) under a
//! single key of a key-value store, the way a browser keeps it in local
//! storage. Every write rewrites the whole document.
//!
//! # Features
//!
//! - **Pluggable storage**: [`MemoryStorage`] for tests, [`FileStorage`] for
//!   the desktop, both behind [`KeyValueStorage`]
//! - **Atomic writes** to prevent a torn document on crash
//! - **Export/import** of the whole document as JSON, with a strict shape
//!   check on import
//! - **Debounced auto-save** timing for editor forms
//!
//! # Known limitation
//!
//! Saves are read-modify-write of the whole document with no version check.
//! Two processes sharing one storage directory silently overwrite each
//! other: the last write wins.
//!
//! # Example
//!
//! ```ignore
//! use teamboard_persistence::{LocalStore, MemoryStorage};
//! use teamboard_model::{Designer, SeedData};
//!
//! let mut store = LocalStore::new(MemoryStorage::new());
//! store.ensure_initialized(SeedData::default())?;
//! store.save_designer(Designer::new("d1", "Anna"))?;
//! let backup = store.export_data()?;
//! ```
//!
//! [`AppData`]: teamboard_model::AppData

mod autosave;
mod error;
mod import;
mod io;
mod storage;
mod store;

pub use autosave::{AutoSaveConfig, AutosaveTimer};
pub use error::{ImportError, PersistenceError, Result};
pub use import::parse_document;
pub use io::{export_file_name, read_backup, write_atomic, write_backup};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{LocalStore, STORAGE_KEY};
