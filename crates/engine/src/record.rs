use delete_old_files_shared_kernel::{FileName, FileSize, ModificationTime};

/// Snapshot of a single directory entry taken at listing time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub name: FileName,
    pub size: FileSize,
    pub mtime: ModificationTime,
}

impl FileRecord {
    pub fn new(
        name: impl Into<FileName>,
        size: impl Into<FileSize>,
        mtime: impl Into<ModificationTime>,
    ) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            mtime: mtime.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Sum of the sizes of all given records.
pub fn total_size(records: &[FileRecord]) -> FileSize {
    records.iter().map(|r| r.size).sum()
}
