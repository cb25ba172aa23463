use urlblock::cli::CliCommand;
use urlblock::logging;

/// Exit status when at least one checked URL is blocked.
const EXIT_BLOCKED: i32 = 2;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the log file is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    match CliCommand::run_from_args() {
        Ok(true) => std::process::exit(EXIT_BLOCKED),
        Ok(false) => {}
        Err(err) => {
            eprintln!("urlblock error: {:#}", err);
            std::process::exit(1);
        }
    }
}
