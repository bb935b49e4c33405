use std::fmt;

use pulsar_version_shared_kernel::{DomainError, DomainResult};

/// Assignment prefix of the version constant in the integration test script.
pub const DEFAULT_MARKER: &str = "readonly PULSAR_DEFAULT_VERSION=";

/// Substring that identifies a line to rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPrefix(String);

impl MarkerPrefix {
    pub fn new(marker: impl Into<String>) -> DomainResult<Self> {
        let marker = marker.into();
        // An empty marker would match every line.
        if marker.is_empty() {
            return Err(DomainError::EmptyMarker);
        }
        Ok(Self(marker))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_in(&self, line: &str) -> bool {
        line.contains(self.0.as_str())
    }
}

impl Default for MarkerPrefix {
    fn default() -> Self {
        Self(DEFAULT_MARKER.to_string())
    }
}

impl fmt::Display for MarkerPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
