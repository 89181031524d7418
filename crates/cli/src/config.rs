// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use delete_old_files_engine::config::{Config, ConfigBuilder};
use delete_old_files_engine::error::EngineError;
use delete_old_files_engine::matcher::current_program_name;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        ConfigBuilder::default()
            .pattern(args.pattern)
            .number(args.number)
            .path(args.path)
            .dry_run(args.dry_run)
            .yes(args.yes)
            .self_name(current_program_name())
            .build()
            .map_err(|e| EngineError::Config(e.to_string()).into())
    }
}
