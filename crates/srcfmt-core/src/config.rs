/// Run configuration.
///
/// Defaults reproduce the classic behaviour: format every `.cpp`, `.hpp`
/// and `.h` file under `src/` with `clang-format -i`, leaving `src/sol`
/// untouched. A JSON file can override any subset of fields:
///
/// ```json
/// {
///   "root": "src",
///   "extensions": ["cpp", "hpp", "h"],
///   "exclude": ["src/sol"],
///   "formatter": { "program": "clang-format-17", "args": ["-i"] },
///   "mode": "format"
/// }
/// ```
use crate::error::FormatError;
use crate::filter::{ExclusionFilter, ExtensionFilter, DEFAULT_EXCLUDES, DEFAULT_EXTENSIONS};
use crate::invoker::FormatterCommand;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory searched when no root is configured.
pub const DEFAULT_ROOT: &str = "src";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = ".srcfmt.json";

/// What a run does with each collected file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Print each collected file. Nothing is spawned and exclusions do not apply.
    List,
    /// Run the formatter on each collected file not matching an exclusion.
    #[default]
    Format,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub exclude: Vec<String>,
    pub formatter: FormatterCommand,
    pub mode: RunMode,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            exclude: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            formatter: FormatterCommand::default(),
            mode: RunMode::default(),
        }
    }
}

impl RunConfig {
    /// Read a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, FormatError> {
        let text = std::fs::read_to_string(path).map_err(|source| FormatError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| FormatError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load [`DEFAULT_CONFIG_FILE`] from `dir` if it exists, otherwise defaults.
    pub fn discover(dir: &Path) -> Result<Self, FormatError> {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn extension_filter(&self) -> ExtensionFilter {
        ExtensionFilter::new(&self.extensions)
    }

    pub fn exclusion_filter(&self) -> ExclusionFilter {
        ExclusionFilter::new(&self.exclude)
    }
}
