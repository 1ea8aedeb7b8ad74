//! `m2-resync`: print and audit the parser's resynchronization sets.
//!
//! Logging is off unless `RUST_LOG` is set, e.g. `RUST_LOG=m2_resync=debug`.

mod commands;

use std::process::ExitCode;
use std::sync::Once;

use clap::{Parser, Subcommand};

use commands::{CliError, Report};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times; only the first call installs a subscriber,
/// and only when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Inspect the Modula-2 parser's resynchronization sets
#[derive(Parser, Debug)]
#[command(name = "m2-resync", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every recovery situation with its tokens
    List,

    /// Print one recovery situation
    Show {
        /// Situation name (e.g. `for-loop-body`) or ordinal
        #[arg(value_name = "SITUATION", allow_hyphen_values = true)]
        situation: String,
    },

    /// List the situations whose set contains a token
    Which {
        /// Token spelling (e.g. `END`, `;`, `identifier`)
        #[arg(value_name = "TOKEN", allow_hyphen_values = true)]
        token: String,
    },

    /// Verify the registry invariants
    Check,
}

fn execute(command: &Command) -> Result<Report, CliError> {
    match command {
        Command::List => Ok(commands::list()),
        Command::Show { situation } => commands::show(situation),
        Command::Which { token } => commands::which(token),
        Command::Check => Ok(commands::check()),
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "running");

    match execute(&cli.command) {
        Ok(report) => {
            print!("{}", report.output);
            if report.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
