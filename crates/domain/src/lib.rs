//! # Domain
//!
//! Value objects and the pure line rewrite behind `pulsar-version`.
//!
//! - [`marker`]: the prefix identifying the version-constant line
//! - [`version`]: the verbatim version string supplied by the caller
//! - [`pattern`]: the glob locating the target script
//! - [`rewrite`]: the line-by-line substitution and its outcome
//!
//! Nothing here touches the filesystem.

#![allow(clippy::multiple_crate_versions)]

pub mod marker;
pub mod pattern;
pub mod rewrite;
pub mod version;

pub use marker::{DEFAULT_MARKER, MarkerPrefix};
pub use pattern::{DEFAULT_PATTERN, TargetPattern};
pub use rewrite::{RewriteOutcome, rewrite_lines};
pub use version::VersionString;
