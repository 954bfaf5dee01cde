/// srcfmt Core — source collection, filtering, and formatter invocation.
///
/// This crate contains all business logic with zero terminal I/O.
/// Frontends render the [`runner::progress::RunProgress`] stream however
/// they like.
///
/// # Modules
///
/// - [`model`] — Collected source files and per-run summaries.
/// - [`filter`] — Extension allow-list and exclusion-fragment filters.
/// - [`collector`] — Recursive `jwalk` traversal producing the file list.
/// - [`invoker`] — Runs the external formatter on a single file.
/// - [`runner`] — Sequences a whole run on a worker thread with progress reporting.
/// - [`config`] — Run settings, defaults, and JSON config-file overlay.
/// - [`error`] — Error type shared by every module.
pub mod collector;
pub mod config;
pub mod error;
pub mod filter;
pub mod invoker;
pub mod model;
pub mod runner;

pub use config::{RunConfig, RunMode};
pub use error::FormatError;
pub use model::{RunSummary, SourceFile};
