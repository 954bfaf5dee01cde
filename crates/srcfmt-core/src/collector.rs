/// Recursive source-file collector built on `jwalk`.
///
/// Walks the root with `jwalk`'s rayon-backed parallel traversal and keeps
/// every regular file whose extension passes the [`ExtensionFilter`].
/// Entries are sorted per directory, so the yielded order is depth-first
/// and deterministic even though directories are read in parallel.
///
/// Collection never fails:
/// - a missing root (or a root that is a plain file) yields nothing;
/// - unreadable directories are skipped, counted, and logged.
///
/// Symbolic links are not followed during traversal, so link loops cannot
/// occur. A link whose target is a regular file is still collected under
/// the link's own path.
use crate::filter::ExtensionFilter;
use crate::model::SourceFile;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, warn};

/// Output of a collection pass.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    /// Matching files in traversal order.
    pub files: Vec<SourceFile>,
    /// Directories that could not be read.
    pub unreadable: u64,
}

impl Collection {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Collect every file under `root` accepted by `filter`.
pub fn collect_source_files(root: &Path, filter: &ExtensionFilter) -> Collection {
    let mut collection = Collection::default();

    if !root.is_dir() {
        debug!("Root {} is not a directory, nothing to collect", root.display());
        return collection;
    }

    let start = Instant::now();

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::RayonNewPool(num_cpus::get()));

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // jwalk errors are typically access-denied on directories.
                collection.unreadable += 1;
                let err_path = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<unknown>".to_string());
                warn!("Skipping unreadable entry {err_path}: {err}");
                continue;
            }
        };

        let file_type = entry.file_type();

        if file_type.is_dir() {
            // jwalk reports a failed directory read on the directory's own entry.
            if let Some(err) = &entry.read_children_error {
                collection.unreadable += 1;
                warn!("Skipping unreadable directory {}: {err}", entry.path().display());
            }
            continue;
        }

        let path = entry.path();
        if !filter.matches(&path) {
            continue;
        }

        // Links are never descended into, but a link to a regular file is
        // collected like the file itself. Dangling links are dropped.
        let is_file = if file_type.is_symlink() {
            std::fs::metadata(&path).is_ok_and(|meta| meta.is_file())
        } else {
            file_type.is_file()
        };

        if is_file {
            collection.files.push(SourceFile::new(path));
        }
    }

    debug!(
        "Collected {} source files under {} in {:?}",
        collection.files.len(),
        root.display(),
        start.elapsed()
    );

    collection
}
