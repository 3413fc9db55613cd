use tsgrab_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; a read-only state dir must not stop a download.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch. Per-job failures are reported, not returned.
    if let Err(err) = Cli::run_from_args().await {
        eprintln!("tsgrab error: {:#}", err);
        std::process::exit(1);
    }
}
