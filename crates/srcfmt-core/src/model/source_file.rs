/// A collected source file.
///
/// Holds the path as yielded by the traversal (root-relative if the root
/// was relative) plus a `/`-separated display form. Exclusion fragments are
/// matched against the display form so `src/sol` works on every platform.
use std::fmt;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceFile {
    path: PathBuf,
    display: String,
}

impl SourceFile {
    pub fn new(path: PathBuf) -> Self {
        let display = normalise_separators(&path);
        Self { path, display }
    }

    /// Filesystem path, suitable for passing to a child process.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path rendered with `/` separators.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

fn normalise_separators(path: &Path) -> String {
    let lossy = path.to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        lossy.into_owned()
    } else {
        lossy.replace(MAIN_SEPARATOR, "/")
    }
}
