use std::{fs, path::Path};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file as UTF-8 text.
    pub fn read_to_string(path: &Path) -> std::io::Result<String> {
        fs::read_to_string(path)
    }
}
