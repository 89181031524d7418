use crate::error::{EngineError, Result};
use crate::record::FileRecord;
use delete_old_files_shared_kernel::FileName;
use std::fs;
use std::path::Path;

/// Outcome of a deletion batch.
#[derive(Debug, Default)]
pub struct DeletionReport {
    pub deleted: Vec<FileName>,
    pub failed: Vec<(FileName, std::io::Error)>,
}

impl DeletionReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// # Errors
    /// Returns [`EngineError::PartialDeletion`] if any removal failed.
    pub fn into_result(self) -> Result<Self> {
        if self.is_clean() {
            Ok(self)
        } else {
            Err(EngineError::PartialDeletion {
                failed: self.failed.len(),
                total: self.total(),
            })
        }
    }
}

/// Remove every record from `dir`, one at a time.
///
/// A failed removal is logged and recorded; the remaining files are still
/// attempted.
pub fn delete_files(dir: &Path, records: &[FileRecord]) -> DeletionReport {
    let mut report = DeletionReport::default();

    for record in records {
        let path = dir.join(record.name());
        match fs::remove_file(&path) {
            Ok(()) => {
                log::debug!("removed {}", path.display());
                report.deleted.push(record.name.clone());
            }
            Err(e) => {
                log::error!("failed to remove {}: {e}", path.display());
                report.failed.push((record.name.clone(), e));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::test_support::touch;
    use std::time::SystemTime;

    fn record(name: &str) -> FileRecord {
        FileRecord::new(name, 1_u64, SystemTime::now())
    }

    #[test]
    fn deletes_all_records() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.log", 1, 20);
        touch(dir.path(), "b.log", 1, 10);
        touch(dir.path(), "keep.log", 1, 0);

        let report = delete_files(dir.path(), &[record("a.log"), record("b.log")]);
        assert!(report.is_clean());
        assert_eq!(report.total(), 2);
        assert!(!dir.path().join("a.log").exists());
        assert!(!dir.path().join("b.log").exists());
        assert!(dir.path().join("keep.log").exists());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn failure_does_not_stop_batch() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.log", 1, 10);

        let report = delete_files(dir.path(), &[record("missing.log"), record("b.log")]);
        assert_eq!(report.deleted, [FileName::from("b.log")]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, FileName::from("missing.log"));
        assert!(!dir.path().join("b.log").exists());

        let err = report.into_result().unwrap_err();
        assert!(matches!(
            err,
            EngineError::PartialDeletion {
                failed: 1,
                total: 2
            }
        ));
        assert_eq!(err.to_string(), "failed to delete 1 of 2 file(s)");
    }

    #[test]
    fn empty_batch_is_clean() {
        let dir = tempfile::tempdir().unwrap();
        let report = delete_files(dir.path(), &[]);
        assert_eq!(report.total(), 0);
        assert!(report.into_result().is_ok());
    }
}
