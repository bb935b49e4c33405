use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use tempfile::NamedTempFile;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically replace `path` with `data` via a sibling temp file and rename.
    ///
    /// The existing file's permissions are carried over so an executable
    /// script stays executable. A symlink is written through to its target.
    pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let resolved;
        let path = if fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink()) {
            resolved = fs::canonicalize(path)?;
            resolved.as_path()
        } else {
            path
        };
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let permissions = fs::metadata(path).ok().map(|m| m.permissions());

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(data)?;
        tmp.flush()?;
        if let Some(perms) = permissions {
            tmp.as_file().set_permissions(perms)?;
        }
        let _ = tmp.as_file().sync_all();

        tmp.persist(path).map_err(|e| e.error)?;

        // Sync the parent so the rename itself is durable.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
