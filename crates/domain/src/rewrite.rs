use crate::{marker::MarkerPrefix, version::VersionString};

/// Result of running the version rewrite over a file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub content: String,
    /// 1-based numbers of the lines that held the marker.
    pub replaced_lines: Vec<usize>,
    pub changed: bool,
}

impl RewriteOutcome {
    pub fn marker_found(&self) -> bool {
        !self.replaced_lines.is_empty()
    }
}

/// Replace every line containing `marker` with `marker"version"\n`.
///
/// Other lines are copied through with their own terminator, so `\r\n`
/// endings and an unterminated last line survive untouched.
pub fn rewrite_lines(content: &str, marker: &MarkerPrefix, version: &VersionString) -> RewriteOutcome {
    let replacement = format!("{}{}\n", marker.as_str(), version.quoted());
    let mut out = String::with_capacity(content.len() + replacement.len());
    let mut replaced_lines = Vec::new();

    for (idx, line) in content.split_inclusive('\n').enumerate() {
        if marker.is_in(line) {
            out.push_str(&replacement);
            replaced_lines.push(idx + 1);
        } else {
            out.push_str(line);
        }
    }

    let changed = out != content;
    RewriteOutcome { content: out, replaced_lines, changed }
}
