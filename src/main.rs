//! srcfmt — runs clang-format in place over a C/C++ source tree.
//!
//! Thin binary entry point. All logic lives in the `srcfmt-core`
//! and `srcfmt-cli` crates.

use anyhow::Context;
use clap::Parser;
use srcfmt_cli::Cli;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the file listing.
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("srcfmt starting");

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = cli.resolve_config(&cwd)?;

    let stdout = std::io::stdout();
    let summary = srcfmt_cli::execute(config, &mut stdout.lock())?;

    Ok(ExitCode::from(srcfmt_cli::exit_status(&summary, cli.strict)))
}
