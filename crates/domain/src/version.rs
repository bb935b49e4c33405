use std::fmt;

/// Version value injected into the script, kept exactly as given.
///
/// No format is enforced: `3.0.0`, `latest` and `3.0.0-SNAPSHOT` are all
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionString(String);

impl VersionString {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value as it appears on the right-hand side of the assignment.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
