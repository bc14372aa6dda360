//! Command-line request handling.

mod context;
mod flags;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

pub use context::Context;
pub use flags::CliFlags;

use crate::form;

/// Parse `args` and run either the form or a one-shot generation.
pub fn run(args: Vec<String>) -> ExitCode {
    let no_args = args.len() <= 1;
    let flags = match CliFlags::try_parse_from(&args) {
        Ok(flags) => flags,
        Err(e) => e.exit(),
    };
    quiet::set(flags.quiet);

    if flags.interactive || (no_args && quiet::is_interactive() && quiet::is_stdout_tty()) {
        return form::run();
    }

    let result = Context::new(flags).and_then(|mut ctx| ctx.run());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(location = %e.location(), "{e}");
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
