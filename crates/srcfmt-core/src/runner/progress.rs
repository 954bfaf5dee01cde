/// Run progress reporting — messages sent from the run thread to the
/// frontend via a crossbeam channel.
use crate::model::{RunSummary, SourceFile};
use std::path::PathBuf;

/// Progress updates for one run, in the order they happen.
///
/// Every run sends exactly one `Started` first and one `Complete` last.
#[derive(Debug, Clone)]
pub enum RunProgress {
    /// Collection finished; `total` files passed the extension filter.
    Started { root: PathBuf, total: u64 },
    /// List mode: a collected file.
    Listed { file: SourceFile },
    /// Format mode: the formatter is about to run on this file.
    Formatting { file: SourceFile },
    /// Format mode: the file matched an exclusion fragment.
    Skipped { file: SourceFile, fragment: String },
    /// Format mode: the formatter could not run or reported failure.
    /// Always follows the matching `Formatting` message.
    Failed { file: SourceFile, message: String },
    /// The run is over.
    Complete { summary: RunSummary },
}
