use pia_core::error::SubmitError;
use pia_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    if let Err(err) = CliCommand::run_from_args().await {
        // Submission errors were already rendered by the terminal surface.
        if err.downcast_ref::<SubmitError>().is_none() {
            eprintln!("pia error: {:#}", err);
        }
        std::process::exit(1);
    }
}

/// Installs logging once the verbosity flag is known.
pub(crate) fn init_logging(verbose: u8) {
    let target = logging::init_logging(verbose);
    tracing::debug!(?target, "logging ready");
}
