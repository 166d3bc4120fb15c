use nvdefaults_core::logging;

mod cli;

fn main() {
    // Logging first; fall back to stderr if the state dir is unwritable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and run the fetch-parse-write sequence.
    if let Err(err) = cli::run_from_args() {
        eprintln!("nvdefaults error: {:#}", err);
        std::process::exit(1);
    }
}
