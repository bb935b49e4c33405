// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use pulsar_version_domain::TargetPattern;
use pulsar_version_ports::filesystem::TargetLocator;
use pulsar_version_shared_kernel::{InfrastructureError, Result};

// VCS metadata and dependency trees never hold the target script.
const DEFAULT_PRUNE_DIRS: &[&str] = &[".git", ".hg", ".svn", "node_modules"];

/// Resolves a [`TargetPattern`] by walking the search root.
///
/// Unlike a source-file walk, nothing is hidden by `.gitignore` or dotfile
/// rules: a glob names a path, so any regular file at that path counts.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobTargetLocator;

impl TargetLocator for GlobTargetLocator {
    fn locate(&self, root: &Path, pattern: &TargetPattern) -> Result<Vec<PathBuf>> {
        let meta = std::fs::metadata(root).map_err(|source| InfrastructureError::FileSystemOperation {
            operation: "stat search root".to_string(),
            path: root.to_path_buf(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(InfrastructureError::Walk {
                root: root.to_path_buf(),
                details: "search root is not a directory".to_string(),
            }
            .into());
        }

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(|entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                !(is_dir
                    && entry.depth() > 0
                    && entry.file_name().to_str().is_some_and(|name| DEFAULT_PRUNE_DIRS.contains(&name)))
            });

        let mut matches = Vec::new();
        // Unreadable subdirectories are skipped, the way shell globbing does.
        for entry in builder.build().flatten() {
            // Symlinked scripts count when they resolve to a regular file.
            let is_file = entry
                .file_type()
                .is_some_and(|ft| ft.is_file() || (ft.is_symlink() && entry.path().is_file()));
            if !is_file {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            if pattern.matches_path(relative) {
                matches.push(entry.into_path());
            }
        }
        matches.sort();
        Ok(matches)
    }
}
