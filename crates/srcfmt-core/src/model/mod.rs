/// Data model for a srcfmt run.
///
/// A run has no state beyond the collected file list and the counters
/// accumulated while processing it.
pub mod source_file;
pub mod summary;

pub use source_file::SourceFile;
pub use summary::{format_count, RunSummary};
