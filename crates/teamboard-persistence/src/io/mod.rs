//! File I/O operations.
//!
//! This module handles:
//! - Atomic writes shared by file storage and backups
//! - Backup file naming, writing and reading

mod atomic;
mod backup;

pub use atomic::write_atomic;
pub use backup::{export_file_name, read_backup, write_backup};
