use clap::Parser;
use delete_old_files_cli::app;
use delete_old_files_cli::args::Args;
use delete_old_files_cli::config::Config;
use delete_old_files_cli::prompt::TerminalPrompter;
use env_logger::Env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .try_init();

    let args = Args::parse();
    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut prompter = TerminalPrompter::default();

    match app::run(&config, &mut out, &mut prompter) {
        Ok(outcome) => {
            log::debug!("finished: {outcome:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
