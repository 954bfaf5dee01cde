/// Error type for the srcfmt core.
///
/// Per-file failures (`Spawn`, `ExitStatus`) never abort a run; the runner
/// turns them into progress messages. The remaining variants are fatal to
/// the caller that produced them.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    /// The formatter program could not be started (usually not on `PATH`).
    #[error("failed to run `{program}` on {}: {source}", .path.display())]
    Spawn {
        program: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The formatter ran but reported failure.
    #[error("`{program}` failed on {} ({})", .path.display(), exit_label(.code))]
    ExitStatus {
        program: String,
        path: PathBuf,
        code: Option<i32>,
    },

    #[error("cannot read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to spawn worker thread: {0}")]
    WorkerSpawn(#[source] io::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}
