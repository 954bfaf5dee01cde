/// srcfmt CLI — terminal frontend.
///
/// This crate parses arguments and renders run progress to standard output.
/// Business logic lives in `srcfmt-core`.
pub mod app;
pub mod cli;

pub use app::{execute, exit_status};
pub use cli::Cli;
