/// External formatter invocation.
///
/// Each call blocks until the formatter exits. The child inherits stdout and
/// stderr so the formatter's own diagnostics reach the user unchanged; stdin
/// is closed so a formatter that falls back to reading stdin cannot hang
/// the run.
use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Formatter program used when none is configured.
pub const DEFAULT_FORMATTER: &str = "clang-format";

/// Flag that makes the default formatter rewrite files in place.
pub const IN_PLACE_FLAG: &str = "-i";

/// The formatter command line, minus the file argument.
///
/// The file path is always appended as the last positional argument.
/// Fields missing from a config file fall back to `clang-format -i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterCommand {
    pub program: String,
    pub args: Vec<String>,
}

fn default_args() -> Vec<String> {
    vec![IN_PLACE_FLAG.to_string()]
}

impl FormatterCommand {
    /// `program` with the in-place flag.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: default_args(),
        }
    }

    /// Full argument vector that [`invoke`](Self::invoke) would execute.
    pub fn command_line(&self, path: &Path) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.args.len() + 2);
        argv.push(OsString::from(&self.program));
        argv.extend(self.args.iter().map(OsString::from));
        argv.push(path.as_os_str().to_os_string());
        argv
    }

    /// Run the formatter on `path` and wait for it to finish.
    pub fn invoke(&self, path: &Path) -> Result<(), FormatError> {
        debug!("Running {:?}", self.command_line(path));

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .status()
            .map_err(|source| FormatError::Spawn {
                program: self.program.clone(),
                path: path.to_path_buf(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(FormatError::ExitStatus {
                program: self.program.clone(),
                path: path.to_path_buf(),
                code: status.code(),
            })
        }
    }
}

impl Default for FormatterCommand {
    fn default() -> Self {
        Self::new(DEFAULT_FORMATTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_command_is_clang_format_in_place() {
        let argv = FormatterCommand::default().command_line(Path::new("src/a.cpp"));
        assert_eq!(argv, ["clang-format", "-i", "src/a.cpp"].map(OsString::from));
    }

    #[test]
    fn path_is_the_last_argument() {
        let cmd = FormatterCommand {
            program: "fmt".into(),
            args: vec!["--style=file".into(), "-i".into()],
        };
        let argv = cmd.command_line(Path::new("x.h"));
        assert_eq!(argv.last().map(OsString::as_os_str), Some(std::ffi::OsStr::new("x.h")));
        assert_eq!(argv.len(), 4);
    }

    #[test]
    fn partial_json_keeps_default_program_and_args() {
        let args_only: FormatterCommand =
            serde_json::from_str(r#"{ "args": ["-i", "--style=file"] }"#).unwrap();
        assert_eq!(args_only.program, "clang-format");
        assert_eq!(args_only.args, ["-i", "--style=file"]);

        let program_only: FormatterCommand =
            serde_json::from_str(r#"{ "program": "clang-format-17" }"#).unwrap();
        assert_eq!(program_only.args, ["-i"]);
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let cmd = FormatterCommand::new("srcfmt-no-such-formatter-8d1f0c");
        let err = cmd.invoke(Path::new("a.cpp")).unwrap_err();
        assert!(matches!(err, FormatError::Spawn { .. }), "got {err:?}");
    }

    #[cfg(unix)]
    #[test]
    fn successful_exit_is_ok() {
        let cmd = FormatterCommand {
            program: "true".into(),
            args: Vec::new(),
        };
        assert!(cmd.invoke(Path::new("a.cpp")).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_carries_the_code() {
        let cmd = FormatterCommand {
            program: "sh".into(),
            args: vec!["-c".into(), "exit 3".into(), "fmt".into()],
        };
        match cmd.invoke(Path::new("a.cpp")) {
            Err(FormatError::ExitStatus { code, path, .. }) => {
                assert_eq!(code, Some(3));
                assert_eq!(path, Path::new("a.cpp"));
            }
            other => panic!("expected ExitStatus, got {other:?}"),
        }
    }
}
