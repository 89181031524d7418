// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "delete-old-files",
    version = crate::VERSION,
    about = "delete given number of oldest files matching given pattern"
)]
pub struct Args {
    /// regular expression used to match files
    #[arg(long, short = 'e', visible_short_alias = 'p')]
    pub pattern: String,

    /// number of files to delete if positive, or to keep if negative; ALL matching files will be deleted if set to 0
    #[arg(long, short = 'n', default_value_t = 0, allow_negative_numbers = true)]
    pub number: i64,

    /// path to working directory
    #[arg(
        long,
        short = 'P',
        visible_alias = "prefix",
        default_value = ".",
        value_hint = ValueHint::DirPath
    )]
    pub path: PathBuf,

    /// print files to be deleted without deleting
    #[arg(long, visible_alias = "no")]
    pub dry_run: bool,

    /// delete files without confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}
