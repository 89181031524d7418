use crate::error::{EngineError, Result};
use crate::record::FileRecord;
use std::fs;
use std::path::Path;

/// List the non-directory entries of `dir`, oldest first.
///
/// Entries are not descended into. Files sharing the same modification time
/// are ordered by name so the result does not depend on the platform's
/// directory read order.
///
/// # Errors
/// Returns [`EngineError::NotADirectory`] if `dir` is not a directory and
/// [`EngineError::Io`] if it cannot be opened or read.
pub fn list_by_time(dir: &Path) -> Result<Vec<FileRecord>> {
    let meta = fs::metadata(dir).map_err(EngineError::io(dir))?;
    if !meta.is_dir() {
        return Err(EngineError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    for entry in fs::read_dir(dir).map_err(EngineError::io(dir))? {
        let entry = entry.map_err(EngineError::io(dir))?;
        let path = entry.path();

        // DirEntry::metadata はシンボリックリンクを辿らない
        let meta = match entry.metadata() {
            Ok(meta) => meta,
            Err(e) => {
                log::debug!("skipping {}: {e}", path.display());
                continue;
            }
        };
        if meta.is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            log::debug!("skipping non UTF-8 name: {}", path.display());
            continue;
        };

        let mtime = match meta.modified() {
            Ok(mtime) => mtime,
            Err(e) => {
                log::debug!("skipping {}: no modification time: {e}", path.display());
                continue;
            }
        };

        records.push(FileRecord::new(name, meta.len(), mtime));
    }

    sort_oldest_first(&mut records);
    log::debug!("listed {} file(s) in {}", records.len(), dir.display());
    Ok(records)
}

/// Sort by modification time, then by name.
pub fn sort_oldest_first(records: &mut [FileRecord]) {
    records.sort_by(|a, b| a.mtime.cmp(&b.mtime).then_with(|| a.name.cmp(&b.name)));
}
