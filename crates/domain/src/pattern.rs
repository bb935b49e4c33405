use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};
use pulsar_version_shared_kernel::{DomainError, DomainResult};

/// Location of the integration test script, relative to the repository root.
pub const DEFAULT_PATTERN: &str = "./scripts/run-integration-tests.sh";

/// Glob locating the target file, matched against root-relative paths.
#[derive(Debug, Clone)]
pub struct TargetPattern {
    original: String,
    matcher: GlobMatcher,
}

impl TargetPattern {
    pub fn new(pattern: &str) -> DomainResult<Self> {
        // Walked paths are relative to the root and carry no `./` prefix.
        let normalized = pattern.trim_start_matches("./");
        let glob = GlobBuilder::new(normalized)
            .literal_separator(true)
            .build()
            .map_err(|e| DomainError::InvalidPattern {
                pattern: pattern.to_string(),
                source: Some(Box::new(e)),
            })?;
        Ok(Self { original: pattern.to_string(), matcher: glob.compile_matcher() })
    }

    pub fn matches_path(&self, relative: &Path) -> bool {
        self.matcher.is_match(relative)
    }

    pub fn pattern(&self) -> &str {
        &self.original
    }
}
