/// Runner module — sequences a whole srcfmt run.
///
/// A run is a single linear pass:
/// 1. collect matching files under the root;
/// 2. in list mode, report each one;
/// 3. in format mode, skip excluded files and run the formatter on the rest,
///    one at a time, each invocation finishing before the next starts.
///
/// [`run`] executes on the calling thread. [`start_run`] executes the same
/// pass on a background thread and streams [`RunProgress`] messages over a
/// bounded channel so a frontend can print as files are processed.
pub mod progress;

use crate::collector::collect_source_files;
use crate::config::{RunConfig, RunMode};
use crate::error::FormatError;
use crate::model::RunSummary;
use progress::RunProgress;

use crossbeam_channel::Receiver;
use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Maximum number of progress messages that may queue up in the channel.
///
/// The formatter is far slower than any terminal, so the queue only fills
/// in list mode; there the run thread simply waits for the frontend.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 1_024;

/// Handle to a run executing on a background thread.
pub struct RunHandle {
    /// Receiver for progress updates from the run thread.
    pub progress_rx: Receiver<RunProgress>,
    thread: Option<thread::JoinHandle<RunSummary>>,
}

impl RunHandle {
    /// Block until the run finishes, discarding any unread progress.
    pub fn wait(mut self) -> RunSummary {
        // Keep draining so a full channel cannot stall the run thread.
        let mut last = None;
        for msg in self.progress_rx.iter() {
            if let RunProgress::Complete { summary } = msg {
                last = Some(summary);
            }
        }
        let joined = self.thread.take().and_then(|t| match t.join() {
            Ok(summary) => Some(summary),
            Err(_) => {
                warn!("Run thread panicked; summary may be incomplete");
                None
            }
        });
        joined.or(last).unwrap_or_default()
    }
}

/// Start a run on a background thread.
pub fn start_run(config: RunConfig) -> Result<RunHandle, FormatError> {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<RunProgress>(PROGRESS_CHANNEL_CAPACITY);

    let thread = thread::Builder::new()
        .name("srcfmt-runner".into())
        .spawn(move || {
            run(&config, |msg| {
                // The frontend may have hung up; the run still finishes.
                let _ = progress_tx.send(msg);
            })
        })
        .map_err(FormatError::WorkerSpawn)?;

    Ok(RunHandle {
        progress_rx,
        thread: Some(thread),
    })
}

/// Execute a run on the current thread, reporting each step to `on_progress`.
pub fn run<F>(config: &RunConfig, mut on_progress: F) -> RunSummary
where
    F: FnMut(RunProgress),
{
    let start = Instant::now();
    info!(
        "Collecting {:?} files under {}",
        config.extensions,
        config.root.display()
    );

    let collection = collect_source_files(&config.root, &config.extension_filter());

    let mut summary = RunSummary {
        collected: collection.files.len() as u64,
        unreadable: collection.unreadable,
        ..RunSummary::default()
    };

    on_progress(RunProgress::Started {
        root: config.root.clone(),
        total: summary.collected,
    });

    match config.mode {
        RunMode::List => {
            for file in collection.files {
                summary.listed += 1;
                on_progress(RunProgress::Listed { file });
            }
        }
        RunMode::Format => {
            let exclusions = config.exclusion_filter();
            let mut formatter_missing = false;

            for file in collection.files {
                if let Some(fragment) = exclusions.matching_fragment(&file) {
                    debug!("Skipping {file} (matches `{fragment}`)");
                    summary.skipped += 1;
                    let fragment = fragment.to_string();
                    on_progress(RunProgress::Skipped { file, fragment });
                    continue;
                }

                on_progress(RunProgress::Formatting { file: file.clone() });

                match config.formatter.invoke(file.path()) {
                    Ok(()) => summary.formatted += 1,
                    Err(err) => {
                        summary.failed += 1;
                        if matches!(err, FormatError::Spawn { .. }) {
                            // Logged once; every later file fails the same way.
                            if !formatter_missing {
                                warn!("{err}");
                            }
                            formatter_missing = true;
                        } else {
                            warn!("{err}");
                        }
                        on_progress(RunProgress::Failed {
                            file,
                            message: err.to_string(),
                        });
                    }
                }
            }
        }
    }

    summary.duration = start.elapsed();
    info!(
        "Run complete: {} collected, {} formatted, {} skipped, {} failed in {:?}",
        summary.collected, summary.formatted, summary.skipped, summary.failed, summary.duration
    );

    on_progress(RunProgress::Complete {
        summary: summary.clone(),
    });
    summary
}
