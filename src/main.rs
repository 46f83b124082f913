use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use argcorpus::constants::logging::DEFAULT_LOG_DIRECTIVE;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    argcorpus::cli::exit_code(argcorpus::cli::run(std::env::args().skip(1)))
}
