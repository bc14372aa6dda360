use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use passgen::{cli, exits};

fn main() -> ExitCode {
    exits::harden();
    exits::install_handlers();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    cli::run(args)
}
