use crate::error::{EngineError, Result};
use crate::record::FileRecord;
use regex::Regex;
use std::path::Path;

/// Name filter built from the user's regular expression.
///
/// The expression is unanchored: it may match anywhere in a file name.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    regex: Regex,
    self_name: Option<String>,
}

impl FileMatcher {
    /// Compile `pattern`. Names equal to `self_name` never match.
    ///
    /// # Errors
    /// Returns [`EngineError::Pattern`] if the expression does not compile.
    pub fn new(pattern: &str, self_name: Option<String>) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| EngineError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex, self_name })
    }

    #[must_use]
    pub fn is_match(&self, name: &str) -> bool {
        if self.self_name.as_deref() == Some(name) {
            return false;
        }
        self.regex.is_match(name)
    }

    /// Keep matching records, preserving their order.
    #[must_use]
    pub fn filter(&self, records: Vec<FileRecord>) -> Vec<FileRecord> {
        records
            .into_iter()
            .filter(|r| self.is_match(r.name()))
            .collect()
    }
}

/// File name of the running executable, as invoked.
#[must_use]
pub fn current_program_name() -> Option<String> {
    let from_args = std::env::args_os().next().and_then(|arg0| {
        Path::new(&arg0)
            .file_name()
            .and_then(|s| s.to_str())
            .map(str::to_owned)
    });

    from_args.or_else(|| {
        std::env::current_exe().ok().and_then(|exe| {
            exe.file_name()
                .and_then(|s| s.to_str())
                .map(str::to_owned)
        })
    })
}
