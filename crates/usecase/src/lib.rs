//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: resolve the target, rewrite it, persist the result
//! - [`dto`]: request and report types at the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{BumpReport, BumpRequest, WriteMode};
pub use orchestrator::BumpVersion;
