// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use pulsar_version_domain::TargetPattern;
use pulsar_version_shared_kernel::Result;

/// Port for resolving the glob pattern to concrete files.
pub trait TargetLocator {
    /// All files under `root` matching `pattern`, sorted by path.
    fn locate(&self, root: &Path, pattern: &TargetPattern) -> Result<Vec<PathBuf>>;
}

/// Port for reading and replacing the target script.
pub trait ScriptStore {
    fn read(&self, path: &Path) -> Result<String>;
    fn replace(&self, path: &Path, content: &str) -> Result<()>;
}
