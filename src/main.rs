//! cihelper - CI helper for managing encrypted GitHub Actions secrets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cihelper::cli::{execute, Cli};
use cihelper::core::constants;
use cihelper::core::exit::terminate;
use cihelper::core::exit_codes::ExitCode;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // clap would exit with 2, which is reserved for shell misuse
            if e.use_stderr() {
                terminate(Some(ExitCode::InvalidArgument.code()), None);
            }
            terminate(None, None);
        }
    };

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.global.verbose {
            EnvFilter::new("cihelper=debug")
        } else {
            EnvFilter::new("cihelper=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match execute(cli) {
        Ok(()) => terminate(None, None),
        Err(e) => terminate(Some(e.exit_code().code()), Some(&e.to_string())),
    }
}
