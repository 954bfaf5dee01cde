/// Command-line arguments.
///
/// Every flag is optional: running `srcfmt` with no arguments formats
/// `src/` with `clang-format -i`, skipping `src/sol`. Settings are layered
/// as built-in defaults, then the config file, then these flags.
use clap::{ArgAction, Parser};
use srcfmt_core::{FormatError, RunConfig, RunMode};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Debug, Parser)]
#[command(
    name = "srcfmt",
    version,
    about = "Run clang-format in place over every C/C++ source file under a directory",
    long_about = None
)]
pub struct Cli {
    /// Directory to search (default: src)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Only print the files that would be formatted
    #[arg(long)]
    pub list: bool,

    /// Skip files whose path contains FRAGMENT (repeatable, replaces the defaults)
    #[arg(long, value_name = "FRAGMENT")]
    pub exclude: Vec<String>,

    /// Format every collected file, including vendored ones
    #[arg(long, conflicts_with = "exclude")]
    pub no_exclude: bool,

    /// Collect files with this extension (repeatable, replaces cpp/hpp/h)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Formatter executable (default: clang-format)
    #[arg(long, value_name = "PROGRAM")]
    pub formatter: Option<String>,

    /// JSON config file (default: ./.srcfmt.json if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit with status 1 if the formatter failed on any file
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Maximum tracing level for the stderr logger.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }

    /// Build the effective run configuration.
    ///
    /// `cwd` is where the default config file is looked up.
    pub fn resolve_config(&self, cwd: &Path) -> Result<RunConfig, FormatError> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::discover(cwd)?,
        };

        if let Some(root) = &self.root {
            config.root = root.clone();
        }
        if self.list {
            config.mode = RunMode::List;
        }
        if self.no_exclude {
            config.exclude.clear();
        } else if !self.exclude.is_empty() {
            config.exclude = self.exclude.clone();
        }
        if !self.extensions.is_empty() {
            config.extensions = self.extensions.clone();
        }
        if let Some(program) = &self.formatter {
            config.formatter.program = program.clone();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srcfmt_core::config::DEFAULT_CONFIG_FILE;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("srcfmt").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_arguments_gives_classic_defaults() {
        let tmp = TempDir::new().unwrap();
        let cli = parse(&[]);
        assert_eq!(cli.log_level(), Level::WARN);
        assert_eq!(cli.resolve_config(tmp.path()).unwrap(), RunConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let tmp = TempDir::new().unwrap();
        let cli = parse(&[
            "--root", "lib", "--list", "--exclude", "third_party", "--exclude", "gen",
            "--ext", "cc", "--formatter", "clang-format-17",
        ]);
        let config = cli.resolve_config(tmp.path()).unwrap();
        assert_eq!(config.root, Path::new("lib"));
        assert_eq!(config.mode, RunMode::List);
        assert_eq!(config.exclude, ["third_party", "gen"]);
        assert_eq!(config.extensions, ["cc"]);
        assert_eq!(config.formatter.program, "clang-format-17");
        assert_eq!(config.formatter.args, ["-i"]);
    }

    #[test]
    fn no_exclude_clears_fragments() {
        let tmp = TempDir::new().unwrap();
        let config = parse(&["--no-exclude"]).resolve_config(tmp.path()).unwrap();
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn no_exclude_conflicts_with_exclude() {
        let err = Cli::try_parse_from(["srcfmt", "--no-exclude", "--exclude", "x"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn flags_override_config_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(DEFAULT_CONFIG_FILE),
            r#"{ "root": "engine", "exclude": ["engine/lua"] }"#,
        )
        .unwrap();

        let from_file = parse(&[]).resolve_config(tmp.path()).unwrap();
        assert_eq!(from_file.root, Path::new("engine"));
        assert_eq!(from_file.exclude, ["engine/lua"]);

        let overridden = parse(&["--root", "other"]).resolve_config(tmp.path()).unwrap();
        assert_eq!(overridden.root, Path::new("other"));
        assert_eq!(overridden.exclude, ["engine/lua"]);
    }

    #[test]
    fn explicit_config_path_must_exist() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.json");
        let cli = parse(&["--config", missing.to_str().unwrap()]);
        assert!(matches!(
            cli.resolve_config(tmp.path()),
            Err(FormatError::ConfigRead { .. })
        ));
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["-v"]).log_level(), Level::INFO);
        assert_eq!(parse(&["-vv"]).log_level(), Level::DEBUG);
        assert_eq!(parse(&["-vvv"]).log_level(), Level::DEBUG);
    }
}
