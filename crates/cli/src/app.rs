// crates/cli/src/app.rs
use crate::error::Result;
use crate::presentation;
use delete_old_files_engine::config::Config;
use delete_old_files_engine::confirm::{Confirmation, Prompter, confirm};
use delete_old_files_engine::deleter::delete_files;
use delete_old_files_engine::{Plan, plan};
use std::io::Write;

/// Successful end states of a run. Errors are reported through [`Result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoMatches,
    AllKept,
    DryRun,
    Aborted,
    Deleted(usize),
}

/// Run the whole pipeline: plan, present, confirm, delete.
///
/// # Errors
///
/// Returns an error for an invalid pattern, an unreadable directory, or when
/// at least one file could not be deleted. A failed prompt is an abort.
pub fn run<W, P>(config: &Config, out: &mut W, prompter: &mut P) -> Result<Outcome>
where
    W: Write,
    P: Prompter + ?Sized,
{
    let selection = match plan(config)? {
        Plan::NoMatches => {
            writeln!(out, "No matching files found")?;
            return Ok(Outcome::NoMatches);
        }
        Plan::AllKept => {
            writeln!(out, "All matching files will be kept due to given number flag")?;
            return Ok(Outcome::AllKept);
        }
        Plan::Delete(records) => records,
    };

    presentation::print_selection(out, &selection)?;
    // プロンプトは stderr に出るため、先に一覧を出し切る
    out.flush()?;

    match confirm(config.confirm_mode(), selection, prompter) {
        Confirmation::DryRun => Ok(Outcome::DryRun),
        Confirmation::Aborted => {
            writeln!(out, "Aborted")?;
            Ok(Outcome::Aborted)
        }
        Confirmation::Confirmed(records) => {
            let report = delete_files(&config.path, &records).into_result()?;
            writeln!(out, "Finished deleting above files")?;
            Ok(Outcome::Deleted(report.deleted.len()))
        }
    }
}
