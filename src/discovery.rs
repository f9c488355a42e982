use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::constants::graph::{GRAPH_FILE_EXTENSIONS, SKIPPED_DIRECTORIES, SKIPPED_FILE_NAMES};
use crate::progress::ProgressReporter;

/// Finds graph files below a set of paths
pub struct GraphDiscovery {
    discovered: HashSet<PathBuf>,
    warnings: Vec<String>,
}

impl Default for GraphDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphDiscovery {
    pub fn new() -> Self {
        Self {
            discovered: HashSet::new(),
            warnings: Vec::new(),
        }
    }

    /// Problems met while discovering, such as paths that do not exist
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Discover all graph files in the given paths
    ///
    /// Files named explicitly are kept whatever their extension, so that the
    /// loader can report an unsupported format. Directories are searched
    /// recursively for `.toml` and `.json` files matching `pattern`, leaving
    /// out manifests such as `Cargo.toml` and `package.json`.
    pub fn discover_all(
        &mut self,
        paths: &[PathBuf],
        pattern: Option<&glob::Pattern>,
        progress: Option<&ProgressReporter>,
    ) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for path in paths {
            if !path.exists() {
                self.warnings
                    .push(format!("Path '{}' does not exist", path.display()));
                continue;
            }

            if path.is_file() {
                if self.discovered.insert(path.clone()) {
                    files.push(path.clone());
                }
                continue;
            }

            self.discover_in_dir(path, pattern, progress, &mut files);
        }

        // Sort by path for consistent output
        files.sort();

        files
    }

    fn discover_in_dir(
        &mut self,
        dir: &Path,
        pattern: Option<&glob::Pattern>,
        progress: Option<&ProgressReporter>,
        files: &mut Vec<PathBuf>,
    ) {
        let entries = WalkDir::new(dir)
            .into_iter()
            .filter_entry(|e| {
                // The root was named explicitly, so it is never skipped
                e.depth() == 0
                    || !(e.file_type().is_dir()
                        && SKIPPED_DIRECTORIES
                            .iter()
                            .any(|skipped| e.file_name() == *skipped))
            })
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    self.warnings.push(format!("Skipping unreadable entry: {err}"));
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|path| {
                is_graph_file(path) && !is_known_manifest(path) && matches_pattern(path, pattern)
            });

        for path in entries.collect::<Vec<_>>() {
            if let Some(p) = progress {
                p.checking_file(&path);
            }
            if self.discovered.insert(path.clone()) {
                files.push(path);
            }
        }
    }
}

fn is_graph_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| GRAPH_FILE_EXTENSIONS.contains(&ext))
}

fn is_known_manifest(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| SKIPPED_FILE_NAMES.iter().any(|skipped| name == *skipped))
}

fn matches_pattern(path: &Path, pattern: Option<&glob::Pattern>) -> bool {
    let Some(pattern) = pattern else {
        return true;
    };
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| pattern.matches(name))
}
