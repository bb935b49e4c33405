// src/config.rs
use std::path::PathBuf;

use pulsar_version_domain::{MarkerPrefix, TargetPattern, VersionString};
use pulsar_version_ports::notify::Verbosity;
use pulsar_version_usecase::{BumpRequest, WriteMode};

/// Fully validated run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub pattern: TargetPattern,
    pub marker: MarkerPrefix,
    pub version: VersionString,
    pub mode: WriteMode,
    pub strict: bool,
    pub verbosity: Verbosity,
}

impl Config {
    pub fn to_request(&self) -> BumpRequest {
        BumpRequest {
            root: self.root.clone(),
            pattern: self.pattern.clone(),
            marker: self.marker.clone(),
            version: self.version.clone(),
            mode: self.mode,
            strict: self.strict,
        }
    }
}
