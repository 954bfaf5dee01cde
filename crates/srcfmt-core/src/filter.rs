/// Path filters applied to a run.
///
/// - [`ExtensionFilter`] decides what the collector picks up.
/// - [`ExclusionFilter`] decides which collected files the formatter leaves
///   alone (vendored third-party code).
use crate::model::SourceFile;
use std::path::Path;

/// Extensions collected when no other allow-list is configured.
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["cpp", "hpp", "h"];

/// Path fragments excluded from formatting by default.
///
/// `src/sol` holds the vendored sol2 Lua bindings.
pub const DEFAULT_EXCLUDES: [&str; 1] = ["src/sol"];

/// Allow-list of file extensions.
///
/// Matching is exact and case-sensitive on the final extension, so
/// `a.CPP` and `a.cpp.orig` are both rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    /// Build a filter from extensions written with or without a leading dot.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = ext.as_ref().trim_start_matches('.');
            if !ext.is_empty() && !deduped.iter().any(|seen| seen == ext) {
                deduped.push(ext.to_string());
            }
        }
        Self { extensions: deduped }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|allowed| allowed == ext)
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

/// Substring filter over `/`-separated display paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionFilter {
    fragments: Vec<String>,
}

impl ExclusionFilter {
    /// Build a filter from path fragments. Empty fragments are dropped since
    /// they would match every path.
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fragments = fragments
            .into_iter()
            .map(|f| f.as_ref().replace('\\', "/"))
            .filter(|f| !f.is_empty())
            .collect();
        Self { fragments }
    }

    /// A filter that excludes nothing.
    pub fn none() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// The first fragment contained in `file`'s display path, if any.
    pub fn matching_fragment(&self, file: &SourceFile) -> Option<&str> {
        self.fragments
            .iter()
            .find(|fragment| file.display().contains(fragment.as_str()))
            .map(String::as_str)
    }

    pub fn is_excluded(&self, file: &SourceFile) -> bool {
        self.matching_fragment(file).is_some()
    }
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDES)
    }
}
