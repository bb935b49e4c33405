use std::path::PathBuf;

use pulsar_version_domain::{MarkerPrefix, RewriteOutcome, TargetPattern, VersionString};

/// What to do with the rewritten content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Replace the file on disk when the content changed.
    #[default]
    Apply,
    /// Compute the result only; the caller prints it.
    DryRun,
    /// Compute the result only; the caller fails if it differs.
    Check,
}

#[derive(Debug, Clone)]
pub struct BumpRequest {
    pub root: PathBuf,
    pub pattern: TargetPattern,
    pub marker: MarkerPrefix,
    pub version: VersionString,
    pub mode: WriteMode,
    /// Reject a pattern that matches more than one file.
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct BumpReport {
    pub target: PathBuf,
    pub outcome: RewriteOutcome,
    pub written: bool,
}
