//! # label-gate Entry Point
//!
//! Parses the command line, runs the gate once and turns its outcome into the
//! process exit code.

use std::process::ExitCode;

use clap::Parser;
use label_gate_cli::cli::{self, Cli};
use label_gate_cli::gate::report;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
  let cmd = Cli::parse();

  // Set up tracing based on verbosity level
  let level = match cmd.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // -v: info, warnings, and errors
    2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
  };

  // Logs go to stderr so stdout only carries the report
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  let outcome = cli::handle_cli(cmd);
  ExitCode::from(report(&outcome))
}
