/// Drives a run and renders its progress as plain text.
///
/// Output format on stdout:
///
/// ```text
/// Formatting Code:
///   src/robot.cpp
///   src/robot.hpp
/// done!
/// ```
///
/// Excluded files produce no line. Formatter failures are logged to stderr
/// by the core and do not interrupt the listing.
use anyhow::Context;
use srcfmt_core::model::format_count;
use srcfmt_core::runner::progress::RunProgress;
use srcfmt_core::runner::start_run;
use srcfmt_core::{RunConfig, RunSummary};
use std::io::{self, Write};
use tracing::info;

/// First line of every run.
pub const BANNER: &str = "Formatting Code:";

/// Last line of every run.
pub const DONE: &str = "done!";

/// Write the stdout line(s) for one progress message.
pub fn render<W: Write>(msg: &RunProgress, out: &mut W) -> io::Result<()> {
    match msg {
        RunProgress::Started { .. } => writeln!(out, "{BANNER}"),
        RunProgress::Listed { file } | RunProgress::Formatting { file } => {
            writeln!(out, "  {file}")?;
            // Formatting can take a while per file; show the name before it starts.
            out.flush()
        }
        RunProgress::Skipped { .. } | RunProgress::Failed { .. } => Ok(()),
        RunProgress::Complete { .. } => {
            writeln!(out, "{DONE}")?;
            out.flush()
        }
    }
}

/// Run `config` on a worker thread, rendering progress to `out` as it arrives.
pub fn execute<W: Write>(config: RunConfig, out: &mut W) -> anyhow::Result<RunSummary> {
    let handle = start_run(config).context("failed to start run")?;

    let mut summary = None;
    for msg in handle.progress_rx.iter() {
        render(&msg, out).context("failed to write progress")?;
        if let RunProgress::Complete { summary: s } = msg {
            summary = Some(s);
        }
    }

    let summary = summary.context("run ended without completing")?;
    info!(
        "{} files collected, {} formatted, {} skipped, {} failed",
        format_count(summary.collected),
        format_count(summary.formatted),
        format_count(summary.skipped),
        format_count(summary.failed)
    );
    Ok(summary)
}

/// Process exit status for a finished run.
///
/// Failures only change the status under `--strict`; otherwise a run that
/// reached the end is a success.
pub fn exit_status(summary: &RunSummary, strict: bool) -> u8 {
    if strict && summary.has_failures() {
        1
    } else {
        0
    }
}
