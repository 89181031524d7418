// crates/engine/src/lib.rs
pub mod config;
pub mod confirm;
pub mod deleter;
pub mod error;
pub mod filesystem;
pub mod matcher;
pub mod record;
pub mod selector;

use crate::config::Config;
use crate::error::Result;
use crate::matcher::FileMatcher;
use crate::record::FileRecord;
use crate::selector::Selection;

/// What a run intends to delete, before any confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// No file name matched the pattern.
    NoMatches,
    /// Matches exist, but the negative count spares all of them.
    AllKept,
    /// Oldest-first deletion candidates; never empty.
    Delete(Vec<FileRecord>),
}

/// List, filter and select the files a run would delete.
///
/// The pattern is compiled before the directory is touched.
///
/// # Errors
///
/// Returns an error if the pattern does not compile or the directory cannot
/// be listed.
pub fn plan(config: &Config) -> Result<Plan> {
    let matcher = FileMatcher::new(&config.pattern, config.self_name.clone())?;
    let records = filesystem::list_by_time(&config.path)?;
    let matches = matcher.filter(records);
    log::debug!("{} file(s) match '{}'", matches.len(), config.pattern);

    if matches.is_empty() {
        return Ok(Plan::NoMatches);
    }

    Ok(match config.policy().apply(matches) {
        Selection::AllKept => Plan::AllKept,
        Selection::Selected(records) => Plan::Delete(records),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use crate::error::EngineError;
    use crate::filesystem::test_support::touch;

    fn logs_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.log", 1, 300);
        touch(dir.path(), "b.log", 1, 200);
        touch(dir.path(), "c.log", 1, 100);
        touch(dir.path(), "notes.txt", 1, 400);
        dir
    }

    fn plan_for(dir: &tempfile::TempDir, number: i64) -> Plan {
        let config = ConfigBuilder::default()
            .pattern(r".*\.log")
            .number(number)
            .path(dir.path())
            .build()
            .unwrap();
        plan(&config).unwrap()
    }

    fn names(plan: &Plan) -> Vec<&str> {
        match plan {
            Plan::Delete(records) => records.iter().map(FileRecord::name).collect(),
            other => panic!("expected deletion plan, got {other:?}"),
        }
    }

    #[test]
    fn keeps_first_n() {
        let dir = logs_dir();
        assert_eq!(names(&plan_for(&dir, 2)), ["a.log", "b.log"]);
    }

    #[test]
    fn drops_newest() {
        let dir = logs_dir();
        assert_eq!(names(&plan_for(&dir, -1)), ["a.log", "b.log"]);
    }

    #[test]
    fn all_kept() {
        let dir = logs_dir();
        assert_eq!(plan_for(&dir, -5), Plan::AllKept);
        assert_eq!(plan_for(&dir, -3), Plan::AllKept);
    }

    #[test]
    fn zero_selects_every_match() {
        let dir = logs_dir();
        assert_eq!(names(&plan_for(&dir, 0)), ["a.log", "b.log", "c.log"]);
    }

    #[test]
    fn no_matches() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "notes.txt", 1, 0);
        assert_eq!(plan_for(&dir, 0), Plan::NoMatches);
    }

    #[test]
    fn bad_pattern_fails_before_listing() {
        let config = ConfigBuilder::default()
            .pattern("[")
            .path("/definitely/not/here")
            .build()
            .unwrap();
        assert!(matches!(plan(&config), Err(EngineError::Pattern { .. })));
    }

    #[test]
    fn own_executable_is_never_planned() {
        let dir = logs_dir();
        touch(dir.path(), "tool.log", 1, 1000);
        let config = ConfigBuilder::default()
            .pattern(r"\.log$")
            .path(dir.path())
            .self_name(Some("tool.log".to_string()))
            .build()
            .unwrap();
        assert_eq!(names(&plan(&config).unwrap()), ["a.log", "b.log", "c.log"]);
    }
}
