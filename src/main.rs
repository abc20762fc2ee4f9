use debpin::cli::Cli;
use debpin::logging;

fn main() {
    // Initialize logging as early as possible.
    logging::init();

    // Parse CLI and run; all failure kinds funnel through this one handler.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("debpin error: {:#}", err);
        std::process::exit(1);
    }
}
