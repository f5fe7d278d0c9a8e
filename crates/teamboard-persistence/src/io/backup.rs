//! Backup files produced by export and consumed by import.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use super::write_atomic;
use crate::error::{PersistenceError, Result};

/// File name for a backup taken on `date`: `<product>-backup-<YYYY-MM-DD>.json`.
///
/// The product name is lower-cased and runs of anything but ASCII
/// alphanumerics collapse into a single `-`.
pub fn export_file_name(product: &str, date: NaiveDate) -> String {
    let mut slug = String::with_capacity(product.len());
    for ch in product.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    let slug = if slug.is_empty() { "teamboard" } else { slug };
    format!("{slug}-backup-{}.json", date.format("%Y-%m-%d"))
}

/// Write exported document text verbatim.
pub fn write_backup(path: &Path, contents: &str) -> Result<()> {
    write_atomic(path, contents.as_bytes())?;
    tracing::info!("Wrote backup to {}", path.display());
    Ok(())
}

/// Read the full text of a backup file, ready for import.
pub fn read_backup(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| PersistenceError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            export_file_name("Teamboard", date),
            "teamboard-backup-2024-03-09.json"
        );
        assert_eq!(
            export_file_name("  Design Team  Hub! ", date),
            "design-team-hub-backup-2024-03-09.json"
        );
        assert_eq!(export_file_name("***", date), "teamboard-backup-2024-03-09.json");
    }

    #[test]
    fn test_backup_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("backup.json");

        write_backup(&path, "{\"a\": 1}").unwrap();
        assert_eq!(read_backup(&path).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn test_read_missing_backup() {
        let dir = tempdir().unwrap();
        let result = read_backup(&dir.path().join("missing.json"));
        assert!(matches!(
            result,
            Err(PersistenceError::Io {
                operation: "read",
                ..
            })
        ));
    }
}
