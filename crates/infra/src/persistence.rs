// crates/infra/src/persistence.rs
mod file_reader;
mod file_writer;

use std::path::Path;

use pulsar_version_ports::filesystem::ScriptStore;
use pulsar_version_shared_kernel::{InfrastructureError, Result};

pub use file_reader::FileReader;
pub use file_writer::FileWriter;

/// [`ScriptStore`] backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsScriptStore;

impl ScriptStore for FsScriptStore {
    fn read(&self, path: &Path) -> Result<String> {
        FileReader::read_to_string(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source }.into())
    }

    fn replace(&self, path: &Path, content: &str) -> Result<()> {
        FileWriter::atomic_write(path, content.as_bytes())
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source }.into())
    }
}
